//! HTTP routes for pauta endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_pauta, get_pauta, list_pautas, open_sessao, PautaHandlers};

/// Creates the pauta router, mounted at `/pautas`.
pub fn pauta_routes(handlers: PautaHandlers) -> Router {
    Router::new()
        .route("/", post(create_pauta).get(list_pautas))
        .route("/:id", get(get_pauta))
        .route("/:id/sessao", post(open_sessao))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryPautaRepository;
    use crate::domain::foundation::PautaId;

    fn app() -> Router {
        let handlers = PautaHandlers::new(
            Arc::new(InMemoryPautaRepository::new()),
            Arc::new(InMemoryEventBus::new()),
        );
        Router::new().nest("/pautas", pauta_routes(handlers))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn post_creates_pauta() {
        let response = app()
            .oneshot(post_json("/pautas", json!({"titulo": "Orçamento"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["titulo"], "Orçamento");
        assert_eq!(body["statusSessao"], "not_started");
    }

    #[tokio::test]
    async fn post_with_malformed_json_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/pautas")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn post_with_blank_titulo_is_400() {
        let response = app()
            .oneshot(post_json("/pautas", json!({"titulo": "  "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_unknown_pauta_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/pautas/{}", PautaId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Pauta não encontrada");
    }

    #[tokio::test]
    async fn open_sessao_with_invalid_id_is_404() {
        let response = app()
            .oneshot(post_json("/pautas/not-a-uuid/sessao", json!({"minutos": 1})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let response = app()
            .oneshot(Request::builder().uri("/pautas").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }
}
