//! In-memory adapters for tests and database-less runs.

mod pauta_repository;

pub use pauta_repository::InMemoryPautaRepository;
