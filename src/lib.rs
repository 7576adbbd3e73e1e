//! Assembly - Agenda items and timed voting sessions.
//!
//! A pauta (agenda item) is registered once and may have a single voting
//! session opened on it. The session stays open for a fixed number of
//! minutes; its status is derived from the clock whenever it is read.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
