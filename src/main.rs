//! Assembly server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use assembly::adapters::events::{AuditLogHandler, InMemoryEventBus, AUDITED_EVENT_TYPES};
use assembly::adapters::http::{app_router, PautaHandlers};
use assembly::adapters::memory::InMemoryPautaRepository;
use assembly::adapters::postgres::{self, PostgresPautaRepository};
use assembly::config::{AppConfig, LogFormat, ServerConfig};
use assembly::ports::{EventSubscriber, PautaRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let repository: Arc<dyn PautaRepository> = if config.database.is_in_memory() {
        tracing::warn!("using in-memory repository, data will not survive a restart");
        Arc::new(InMemoryPautaRepository::new())
    } else {
        let pool = postgres::connect(&config.database).await?;
        if config.database.synchronize {
            postgres::synchronize(&pool).await?;
        }
        Arc::new(PostgresPautaRepository::new(pool))
    };

    let event_bus = Arc::new(InMemoryEventBus::new());
    event_bus.subscribe_all(AUDITED_EVENT_TYPES, Arc::new(AuditLogHandler));

    let app = app_router(PautaHandlers::new(repository, event_bus), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match server.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
