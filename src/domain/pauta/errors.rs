//! Pauta-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, PautaId, ValidationError};

/// Message returned when a pauta id does not resolve.
pub const PAUTA_NOT_FOUND_MESSAGE: &str = "Pauta não encontrada";

/// Message returned when a session was already opened on the pauta.
pub const SESSAO_CONFLICT_MESSAGE: &str = "Sessão já iniciada ou encerrada!";

/// Pauta-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PautaError {
    /// Pauta was not found.
    NotFound(PautaId),
    /// A session already exists on the pauta (open or closed).
    SessaoConflict(PautaId),
    /// The store rejected the write (duplicate title or other constraint).
    Conflict(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PautaError {
    pub fn not_found(id: PautaId) -> Self {
        PautaError::NotFound(id)
    }
    pub fn sessao_conflict(id: PautaId) -> Self {
        PautaError::SessaoConflict(id)
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        PautaError::Conflict(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PautaError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PautaError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PautaError::NotFound(_) => ErrorCode::NotFound,
            PautaError::SessaoConflict(_) | PautaError::Conflict(_) => ErrorCode::Conflict,
            PautaError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PautaError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PautaError::NotFound(_) => PAUTA_NOT_FOUND_MESSAGE.to_string(),
            PautaError::SessaoConflict(_) => SESSAO_CONFLICT_MESSAGE.to_string(),
            PautaError::Conflict(msg) => msg.clone(),
            PautaError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PautaError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PautaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PautaError {}

impl From<DomainError> for PautaError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => match err.detail("id").and_then(|id| id.parse().ok()) {
                Some(id) => PautaError::NotFound(id),
                None => PautaError::Infrastructure(err.message),
            },
            ErrorCode::Conflict => PautaError::Conflict(err.message),
            ErrorCode::ValidationFailed => PautaError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                PautaError::Infrastructure(err.message)
            }
        }
    }
}

impl From<ValidationError> for PautaError {
    fn from(err: ValidationError) -> Self {
        PautaError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
