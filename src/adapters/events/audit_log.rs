//! Event handler that writes every domain event to the structured log.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Event types the audit log subscribes to.
pub const AUDITED_EVENT_TYPES: &[&str] = &["pauta.created.v1", "pauta.sessao_opened.v1"];

/// Logs each domain event at `info` with its routing fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuditLogHandler;

#[async_trait]
impl EventHandler for AuditLogHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_type = %event.aggregate_type,
            aggregate_id = %event.aggregate_id,
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or("-"),
            source = event.metadata.source.as_deref().unwrap_or("-"),
            payload = %event.payload,
            "domain event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AuditLogHandler"
    }
}
