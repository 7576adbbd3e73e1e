//! HTTP handlers for pauta endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::pauta::{
    CreatePautaCommand, CreatePautaHandler, GetPautaHandler, GetPautaQuery, ListPautasHandler,
    OpenSessaoCommand, OpenSessaoHandler, PautaView,
};
use crate::domain::foundation::{CommandMetadata, PautaId, Timestamp};
use crate::domain::pauta::{PautaError, PAUTA_NOT_FOUND_MESSAGE};
use crate::ports::{EventPublisher, PautaRepository};

use super::dto::{CriarPautaRequest, ErrorResponse, NovaSessaoRequest, PautaResponse};

/// Header carrying the caller's request id, reused as correlation id.
const REQUEST_ID_HEADER: &str = "x-request-id";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PautaHandlers {
    create_handler: Arc<CreatePautaHandler>,
    list_handler: Arc<ListPautasHandler>,
    get_handler: Arc<GetPautaHandler>,
    open_sessao_handler: Arc<OpenSessaoHandler>,
}

impl PautaHandlers {
    pub fn new(
        repository: Arc<dyn PautaRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreatePautaHandler::new(
                repository.clone(),
                event_publisher.clone(),
            )),
            list_handler: Arc::new(ListPautasHandler::new(repository.clone())),
            get_handler: Arc::new(GetPautaHandler::new(repository.clone())),
            open_sessao_handler: Arc::new(OpenSessaoHandler::new(repository, event_publisher)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /pautas - Create a new pauta
pub async fn create_pauta(
    State(handlers): State<PautaHandlers>,
    headers: HeaderMap,
    payload: Result<Json<CriarPautaRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let cmd = CreatePautaCommand {
        titulo: req.titulo,
        descricao: req.descricao,
    };

    match handlers
        .create_handler
        .handle(cmd, command_metadata(&headers))
        .await
    {
        Ok(result) => {
            let view = PautaView::at(result.pauta, &Timestamp::now());
            (StatusCode::CREATED, Json(PautaResponse::from(view))).into_response()
        }
        Err(e) => handle_pauta_error(e),
    }
}

/// GET /pautas - List every pauta
pub async fn list_pautas(State(handlers): State<PautaHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(views) => {
            let response: Vec<PautaResponse> = views.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_pauta_error(e),
    }
}

/// GET /pautas/:id - Get pauta details
pub async fn get_pauta(
    State(handlers): State<PautaHandlers>,
    Path(pauta_id): Path<String>,
) -> Response {
    let Ok(pauta_id) = pauta_id.parse::<PautaId>() else {
        return not_found();
    };

    match handlers.get_handler.handle(GetPautaQuery { pauta_id }).await {
        Ok(view) => (StatusCode::OK, Json(PautaResponse::from(view))).into_response(),
        Err(e) => handle_pauta_error(e),
    }
}

/// POST /pautas/:id/sessao - Open the voting session
///
/// The body is optional; without `minutos` the default duration applies.
pub async fn open_sessao(
    State(handlers): State<PautaHandlers>,
    Path(pauta_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Ok(pauta_id) = pauta_id.parse::<PautaId>() else {
        return not_found();
    };

    let req = if body.iter().all(u8::is_ascii_whitespace) {
        NovaSessaoRequest::default()
    } else {
        match serde_json::from_slice::<NovaSessaoRequest>(&body) {
            Ok(req) => req,
            Err(e) => return bad_request(format!("Invalid request body: {}", e)),
        }
    };

    let cmd = OpenSessaoCommand {
        pauta_id,
        minutos: req.minutos,
    };

    match handlers
        .open_sessao_handler
        .handle(cmd, command_metadata(&headers))
        .await
    {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => handle_pauta_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn command_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(PAUTA_NOT_FOUND_MESSAGE)),
    )
        .into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_pauta_error(error: PautaError) -> Response {
    match error {
        PautaError::NotFound(_) => not_found(),
        PautaError::SessaoConflict(_) | PautaError::Conflict(_) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(error.message())),
        )
            .into_response(),
        PautaError::ValidationFailed { .. } => bad_request(error.message()),
        PautaError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn pauta_error_not_found_maps_to_404() {
        let response = handle_pauta_error(PautaError::NotFound(PautaId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn pauta_error_conflicts_map_to_409() {
        let response = handle_pauta_error(PautaError::SessaoConflict(PautaId::new()));
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = handle_pauta_error(PautaError::conflict("Pauta já cadastrada"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn pauta_error_validation_failed_maps_to_400() {
        let response = handle_pauta_error(PautaError::validation("minutos", "out of range"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn pauta_error_infrastructure_maps_to_500() {
        let response = handle_pauta_error(PautaError::infrastructure("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn request_id_header_becomes_correlation_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));

        let metadata = command_metadata(&headers);
        assert_eq!(metadata.correlation_id(), "abc-123");
        assert_eq!(metadata.source(), Some("http"));
    }
}
