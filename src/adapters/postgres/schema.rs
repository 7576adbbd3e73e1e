//! Schema synchronization.
//!
//! The table layout is derived from the Pauta entity and created on startup
//! if missing. There are no versioned migrations.

use sqlx::PgPool;

use crate::domain::foundation::DomainError;

/// DDL for the `pautas` table. The session lives inline; both session
/// columns are either set together or both NULL.
pub const PAUTAS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS pautas (
    id UUID PRIMARY KEY,
    titulo VARCHAR(255) NOT NULL UNIQUE,
    descricao TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    sessao_inicio TIMESTAMPTZ,
    sessao_minutos INTEGER,
    CONSTRAINT pautas_sessao_complete CHECK (
        (sessao_inicio IS NULL) = (sessao_minutos IS NULL)
    )
)
"#;

/// Creates the tables this service needs, leaving existing ones untouched.
pub async fn synchronize(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::query(PAUTAS_DDL)
        .execute(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to synchronize schema: {}", e)))?;

    tracing::info!("database schema synchronized");
    Ok(())
}
