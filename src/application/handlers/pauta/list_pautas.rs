//! ListPautasHandler - Query handler for every stored pauta.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::pauta::PautaError;
use crate::ports::PautaRepository;

use super::PautaView;

/// Handler for listing pautas, oldest first.
pub struct ListPautasHandler {
    repository: Arc<dyn PautaRepository>,
}

impl ListPautasHandler {
    pub fn new(repository: Arc<dyn PautaRepository>) -> Self {
        Self { repository }
    }

    /// Every view shares the same `now`, so statuses are consistent.
    pub async fn handle(&self) -> Result<Vec<PautaView>, PautaError> {
        let now = Timestamp::now();
        let pautas = self.repository.find_all().await?;

        Ok(pautas
            .into_iter()
            .map(|pauta| PautaView::at(pauta, &now))
            .collect())
    }
}
