//! Pauta repository port.
//!
//! Defines the contract for persisting and retrieving Pauta aggregates.
//! The store is the only source of truth; session status is never stored,
//! only the session start and duration.

use crate::domain::foundation::{DomainError, PautaId};
use crate::domain::pauta::{Pauta, Sessao};
use async_trait::async_trait;

/// Repository port for Pauta aggregate persistence.
#[async_trait]
pub trait PautaRepository: Send + Sync {
    /// Save a new pauta.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the title is already taken (unique constraint)
    /// - `DatabaseError` on persistence failure
    async fn save(&self, pauta: &Pauta) -> Result<(), DomainError>;

    /// Find a pauta by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PautaId) -> Result<Option<Pauta>, DomainError>;

    /// All pautas, oldest first.
    async fn find_all(&self) -> Result<Vec<Pauta>, DomainError>;

    /// Attach a session to a pauta that has none.
    ///
    /// The write is conditional: returns `Ok(false)` when the pauta already
    /// carries a session (or no longer exists), so two racing openings cannot
    /// both win.
    async fn open_sessao(&self, id: &PautaId, sessao: &Sessao) -> Result<bool, DomainError>;
}
