//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `pauta` - Agenda items and their voting session lifecycle

pub mod foundation;
pub mod pauta;
