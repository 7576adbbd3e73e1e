//! In-memory implementation of PautaRepository.
//!
//! Enforces the same rules as the PostgreSQL table: unique titles and a
//! conditional session write. Used by tests and by `memory://` runs.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, PautaId};
use crate::domain::pauta::{Pauta, Sessao};
use crate::ports::PautaRepository;

/// In-memory pauta store, insertion ordered.
#[derive(Default)]
pub struct InMemoryPautaRepository {
    pautas: RwLock<Vec<Pauta>>,
}

impl InMemoryPautaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given pautas.
    pub fn with_pautas(pautas: impl IntoIterator<Item = Pauta>) -> Self {
        Self {
            pautas: RwLock::new(pautas.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.pautas.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PautaRepository for InMemoryPautaRepository {
    async fn save(&self, pauta: &Pauta) -> Result<(), DomainError> {
        let mut pautas = self.pautas.write().unwrap_or_else(PoisonError::into_inner);

        if pautas.iter().any(|p| p.id() == pauta.id()) {
            return Err(DomainError::new(ErrorCode::Conflict, "Pauta já cadastrada")
                .with_detail("constraint", "pautas_pkey"));
        }
        if pautas.iter().any(|p| p.titulo() == pauta.titulo()) {
            return Err(DomainError::new(ErrorCode::Conflict, "Pauta já cadastrada")
                .with_detail("constraint", "pautas_titulo_key"));
        }

        pautas.push(pauta.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PautaId) -> Result<Option<Pauta>, DomainError> {
        Ok(self
            .pautas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Pauta>, DomainError> {
        let mut pautas = self
            .pautas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        // Stable sort keeps insertion order for equal timestamps.
        pautas.sort_by_key(|p| *p.created_at());
        Ok(pautas)
    }

    async fn open_sessao(&self, id: &PautaId, sessao: &Sessao) -> Result<bool, DomainError> {
        let mut pautas = self.pautas.write().unwrap_or_else(PoisonError::into_inner);

        let Some(stored) = pautas.iter_mut().find(|p| p.id() == id) else {
            return Ok(false);
        };
        if stored.sessao().is_some() {
            return Ok(false);
        }

        *stored = Pauta::reconstitute(
            *stored.id(),
            stored.titulo().to_string(),
            stored.descricao().map(str::to_string),
            Some(*sessao),
            *stored.created_at(),
        );
        Ok(true)
    }
}
