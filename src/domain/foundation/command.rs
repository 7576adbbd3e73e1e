//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` carries request context through a command handler and
//! into the events it emits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata context for command handlers.
///
/// ```ignore
/// let envelope = event
///     .to_envelope()?
///     .with_correlation_id(metadata.correlation_id());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links related operations across a single request.
    /// Generated on demand if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "http").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating a fresh one if none was set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
