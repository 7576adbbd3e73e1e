//! CreatePautaHandler - Command handler for registering a new pauta.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, PautaId, SerializableDomainEvent};
use crate::domain::pauta::{Pauta, PautaCreated, PautaError};
use crate::ports::{EventPublisher, PautaRepository};

/// Command to create a new pauta.
#[derive(Debug, Clone)]
pub struct CreatePautaCommand {
    pub titulo: String,
    pub descricao: Option<String>,
}

/// Result of successful pauta creation.
#[derive(Debug, Clone)]
pub struct CreatePautaResult {
    pub pauta: Pauta,
    pub event: PautaCreated,
}

/// Handler for creating pautas.
pub struct CreatePautaHandler {
    repository: Arc<dyn PautaRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreatePautaHandler {
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
        cmd: CreatePautaCommand,
        metadata: CommandMetadata,
    ) -> Result<CreatePautaResult, PautaError> {
        // 1. Build and validate the aggregate
        let pauta = Pauta::new(PautaId::new(), cmd.titulo, cmd.descricao)?;

        // 2. Persist; a duplicate titulo surfaces as Conflict
        if let Err(e) = self.repository.save(&pauta).await {
            let err = PautaError::from(e);
            if let PautaError::Conflict(reason) = &err {
                tracing::warn!(titulo = %pauta.titulo(), %reason, "pauta rejected");
            }
            return Err(err);
        }

        // 3. Publish
        let event = PautaCreated {
            event_id: EventId::new(),
            pauta_id: *pauta.id(),
            titulo: pauta.titulo().to_string(),
            descricao: pauta.descricao().map(str::to_string),
            created_at: *pauta.created_at(),
        };

        let mut envelope = event
            .to_envelope()
            .map_err(|e| PautaError::infrastructure(format!("Failed to serialize event: {}", e)))?
            .with_correlation_id(metadata.correlation_id());
        if let Some(source) = metadata.source() {
            envelope = envelope.with_source(source);
        }

        self.event_publisher.publish(envelope).await?;

        tracing::info!(pauta_id = %pauta.id(), titulo = %pauta.titulo(), "pauta created");

        Ok(CreatePautaResult { pauta, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryPautaRepository;
    use crate::domain::foundation::{DomainError, ErrorCode, PautaId};
    use crate::domain::pauta::Sessao;
    use async_trait::async_trait;

    struct FailingPautaRepository;

    #[async_trait]
    impl PautaRepository for FailingPautaRepository {
        async fn save(&self, _pauta: &Pauta) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated save failure",
            ))
        }

        async fn find_by_id(&self, _id: &PautaId) -> Result<Option<Pauta>, DomainError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Pauta>, DomainError> {
            Ok(vec![])
        }

        async fn open_sessao(&self, _id: &PautaId, _sessao: &Sessao) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn command(titulo: &str) -> CreatePautaCommand {
        CreatePautaCommand {
            titulo: titulo.to_string(),
            descricao: Some("Discussão anual".to_string()),
        }
    }

    fn handler(
        repo: Arc<dyn PautaRepository>,
    ) -> (CreatePautaHandler, Arc<InMemoryEventBus>) {
        let bus = Arc::new(InMemoryEventBus::recording());
        (CreatePautaHandler::new(repo, bus.clone()), bus)
    }

    #[tokio::test]
    async fn creates_and_persists_pauta() {
        let repo = Arc::new(InMemoryPautaRepository::new());
        let (handler, _bus) = handler(repo.clone());

        let result = handler
            .handle(command("Orçamento 2025"), CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(result.pauta.titulo(), "Orçamento 2025");
        assert_eq!(result.pauta.descricao(), Some("Discussão anual"));
        assert!(result.pauta.sessao().is_none());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn publishes_pauta_created_with_correlation_id() {
        let repo = Arc::new(InMemoryPautaRepository::new());
        let (handler, bus) = handler(repo);

        let result = handler
            .handle(
                command("Orçamento 2025"),
                CommandMetadata::new()
                    .with_correlation_id("req-7")
                    .with_source("http"),
            )
            .await
            .unwrap();

        let events = bus.events_of_type("pauta.created.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, result.pauta.id().to_string());
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("req-7"));
        assert_eq!(events[0].metadata.source.as_deref(), Some("http"));
    }

    #[tokio::test]
    async fn envelope_has_no_source_when_command_has_none() {
        let (handler, bus) = handler(Arc::new(InMemoryPautaRepository::new()));

        handler
            .handle(command("Orçamento 2025"), CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(bus.published_events()[0].metadata.source, None);
    }

    #[tokio::test]
    async fn rejects_blank_titulo_without_side_effects() {
        let repo = Arc::new(InMemoryPautaRepository::new());
        let (handler, bus) = handler(repo.clone());

        let err = handler
            .handle(command("   "), CommandMetadata::new())
            .await
            .unwrap_err();

        assert!(matches!(err, PautaError::ValidationFailed { ref field, .. } if field == "titulo"));
        assert!(repo.is_empty());
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_titulo_is_conflict() {
        let repo = Arc::new(InMemoryPautaRepository::new());
        let (handler, bus) = handler(repo.clone());

        handler
            .handle(command("Orçamento 2025"), CommandMetadata::new())
            .await
            .unwrap();
        let err = handler
            .handle(command("Orçamento 2025"), CommandMetadata::new())
            .await
            .unwrap_err();

        assert!(matches!(err, PautaError::Conflict(_)));
        assert_eq!(repo.len(), 1);
        assert_eq!(bus.event_count(), 1);
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let (handler, bus) = handler(Arc::new(FailingPautaRepository));

        let err = handler
            .handle(command("Orçamento 2025"), CommandMetadata::new())
            .await
            .unwrap_err();

        assert!(matches!(err, PautaError::Infrastructure(_)));
        assert_eq!(bus.event_count(), 0);
    }
}
