//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the assembly domain.

mod command;
mod errors;
mod events;
mod ids;
mod sessao_status;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::PautaId;
pub use sessao_status::SessaoStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
