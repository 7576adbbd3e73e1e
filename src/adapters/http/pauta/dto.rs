//! HTTP DTOs for pauta endpoints.
//!
//! Field names follow the public API (Portuguese, camelCase) rather than the
//! domain types.

use serde::{Deserialize, Serialize};

use crate::application::PautaView;
use crate::domain::foundation::SessaoStatus;
use crate::domain::pauta::Sessao;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new pauta.
#[derive(Debug, Clone, Deserialize)]
pub struct CriarPautaRequest {
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
}

/// Request to open a voting session. An empty body is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NovaSessaoRequest {
    #[serde(default)]
    pub minutos: Option<i64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Pauta representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PautaResponse {
    pub id: String,
    pub titulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub criada_em: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessao: Option<SessaoResponse>,
    pub status_sessao: SessaoStatus,
}

/// Session window as exposed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessaoResponse {
    pub inicio: String,
    pub minutos: i64,
    pub encerramento: String,
}

impl From<&Sessao> for SessaoResponse {
    fn from(sessao: &Sessao) -> Self {
        Self {
            inicio: sessao.started_at().to_rfc3339(),
            minutos: sessao.duration_minutes(),
            encerramento: sessao.closes_at().to_rfc3339(),
        }
    }
}

impl From<PautaView> for PautaResponse {
    fn from(view: PautaView) -> Self {
        let pauta = view.pauta;
        Self {
            id: pauta.id().to_string(),
            titulo: pauta.titulo().to_string(),
            descricao: pauta.descricao().map(str::to_string),
            criada_em: pauta.created_at().to_rfc3339(),
            sessao: pauta.sessao().map(SessaoResponse::from),
            status_sessao: view.status,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
