//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - In-process event bus and the audit log subscriber
//! - `http` - axum REST API
//! - `memory` - In-memory repository for tests and `memory://` runs
//! - `postgres` - PostgreSQL repository via sqlx

pub mod events;
pub mod http;
pub mod memory;
pub mod postgres;

pub use events::{AuditLogHandler, InMemoryEventBus, AUDITED_EVENT_TYPES};
pub use memory::InMemoryPautaRepository;
pub use postgres::PostgresPautaRepository;
