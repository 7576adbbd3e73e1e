//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `PautaRepository` - Pauta persistence (PostgreSQL, in-memory)
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` / `EventHandler` - In-process event delivery

mod event_publisher;
mod event_subscriber;
mod pauta_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use pauta_repository::PautaRepository;
