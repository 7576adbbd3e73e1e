//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the pauta endpoints, the health probe and the
//! tower-http middleware stack.

pub mod pauta;

pub use pauta::{pauta_routes, PautaHandlers};

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full application router.
pub fn app_router(handlers: PautaHandlers, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/pautas", pauta_routes(handlers))
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config.cors_origins_list();
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok())
                .collect::<Vec<_>>(),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::HeaderName::from_static("x-request-id")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryPautaRepository;

    fn app(config: &ServerConfig) -> Router {
        let handlers = PautaHandlers::new(
            Arc::new(InMemoryPautaRepository::new()),
            Arc::new(InMemoryEventBus::new()),
        );
        app_router(handlers, config)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };

        let response = app(&config)
            .oneshot(
                Request::builder()
                    .uri("/pautas")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:5173"))
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/votos").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
