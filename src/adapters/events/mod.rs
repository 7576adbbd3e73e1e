//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus
//! - `AuditLogHandler` - Subscriber that writes domain events to the log

mod audit_log;
mod in_memory;

pub use audit_log::{AuditLogHandler, AUDITED_EVENT_TYPES};
pub use in_memory::InMemoryEventBus;
