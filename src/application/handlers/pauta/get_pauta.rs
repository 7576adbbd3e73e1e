//! GetPautaHandler - Query handler for a single pauta.

use std::sync::Arc;

use crate::domain::foundation::{PautaId, Timestamp};
use crate::domain::pauta::PautaError;
use crate::ports::PautaRepository;

use super::PautaView;

/// Query to get a pauta by ID.
#[derive(Debug, Clone)]
pub struct GetPautaQuery {
    pub pauta_id: PautaId,
}

/// Handler for retrieving pauta details.
pub struct GetPautaHandler {
    repository: Arc<dyn PautaRepository>,
}

impl GetPautaHandler {
    pub fn new(repository: Arc<dyn PautaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPautaQuery) -> Result<PautaView, PautaError> {
        let pauta = self
            .repository
            .find_by_id(&query.pauta_id)
            .await?
            .ok_or_else(|| PautaError::not_found(query.pauta_id))?;

        Ok(PautaView::at(pauta, &Timestamp::now()))
    }
}
