//! OpenSessaoHandler - Command handler for opening a pauta's voting session.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, PautaId, SerializableDomainEvent, Timestamp,
};
use crate::domain::pauta::{PautaError, Sessao, SessaoOpened, DEFAULT_DURATION_MINUTES};
use crate::ports::{EventPublisher, PautaRepository};

/// Command to open a voting session.
#[derive(Debug, Clone)]
pub struct OpenSessaoCommand {
    pub pauta_id: PautaId,
    /// Session length; `None` means `DEFAULT_DURATION_MINUTES`.
    pub minutos: Option<i64>,
}

/// Result of a successfully opened session.
#[derive(Debug, Clone)]
pub struct OpenSessaoResult {
    pub sessao: Sessao,
    pub event: SessaoOpened,
}

/// Handler for opening sessions.
pub struct OpenSessaoHandler {
    repository: Arc<dyn PautaRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl OpenSessaoHandler {
    pub fn new(
        repository: Arc<dyn PautaRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: OpenSessaoCommand,
        metadata: CommandMetadata,
    ) -> Result<OpenSessaoResult, PautaError> {
        // 1. Load
        let mut pauta = self
            .repository
            .find_by_id(&cmd.pauta_id)
            .await?
            .ok_or_else(|| PautaError::not_found(cmd.pauta_id))?;

        // 2. Apply the rule on the aggregate
        let minutos = cmd.minutos.unwrap_or(DEFAULT_DURATION_MINUTES);
        let sessao = match pauta.open_sessao(minutos, Timestamp::now()) {
            Ok(sessao) => *sessao,
            Err(err @ PautaError::SessaoConflict(_)) => {
                tracing::warn!(pauta_id = %cmd.pauta_id, "sessao already started");
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        // 3. Conditional write; losing a race is the same conflict
        if !self.repository.open_sessao(&cmd.pauta_id, &sessao).await? {
            tracing::warn!(pauta_id = %cmd.pauta_id, "sessao opened concurrently");
            return Err(PautaError::sessao_conflict(cmd.pauta_id));
        }

        // 4. Publish
        let event = SessaoOpened {
            event_id: EventId::new(),
            pauta_id: cmd.pauta_id,
            duration_minutes: sessao.duration_minutes(),
            opened_at: *sessao.started_at(),
            closes_at: sessao.closes_at(),
        };

        let mut envelope = event
            .to_envelope()
            .map_err(|e| PautaError::infrastructure(format!("Failed to serialize event: {}", e)))?
            .with_correlation_id(metadata.correlation_id());
        if let Some(source) = metadata.source() {
            envelope = envelope.with_source(source);
        }

        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            pauta_id = %cmd.pauta_id,
            minutos = sessao.duration_minutes(),
            closes_at = %sessao.closes_at().to_rfc3339(),
            "sessao opened"
        );

        Ok(OpenSessaoResult { sessao, event })
    }
}
