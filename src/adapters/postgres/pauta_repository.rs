//! PostgreSQL implementation of PautaRepository.
//!
//! Persists Pauta aggregates to the `pautas` table. The session is stored
//! inline as two nullable columns (`sessao_inicio`, `sessao_minutos`).

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, PautaId, Timestamp};
use crate::domain::pauta::{Pauta, Sessao};
use crate::ports::PautaRepository;

/// PostgreSQL implementation of PautaRepository.
#[derive(Clone)]
pub struct PostgresPautaRepository {
    pool: PgPool,
}

impl PostgresPautaRepository {
    /// Creates a new PostgresPautaRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PautaRepository for PostgresPautaRepository {
    async fn save(&self, pauta: &Pauta) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO pautas (
                id, titulo, descricao, created_at, sessao_inicio, sessao_minutos
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(pauta.id().as_uuid())
        .bind(pauta.titulo())
        .bind(pauta.descricao())
        .bind(pauta.created_at().as_datetime())
        .bind(pauta.sessao().map(|s| *s.started_at().as_datetime()))
        .bind(pauta.sessao().map(|s| s.duration_minutes() as i32))
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to insert pauta"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PautaId) -> Result<Option<Pauta>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, titulo, descricao, created_at, sessao_inicio, sessao_minutos
            FROM pautas
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch pauta: {}", e)))?;

        row.map(row_to_pauta).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Pauta>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, titulo, descricao, created_at, sessao_inicio, sessao_minutos
            FROM pautas
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch pautas: {}", e)))?;

        rows.into_iter().map(row_to_pauta).collect()
    }

    async fn open_sessao(&self, id: &PautaId, sessao: &Sessao) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE pautas SET
                sessao_inicio = $2,
                sessao_minutos = $3
            WHERE id = $1 AND sessao_inicio IS NULL
            "#,
        )
        .bind(id.as_uuid())
        .bind(sessao.started_at().as_datetime())
        .bind(sessao.duration_minutes() as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to open sessao"))?;

        Ok(result.rows_affected() == 1)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Maps a write failure, surfacing unique violations as `Conflict`.
fn map_write_error(err: sqlx::Error, context: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let mut conflict = DomainError::new(ErrorCode::Conflict, "Pauta já cadastrada");
            if let Some(constraint) = db_err.constraint() {
                conflict = conflict.with_detail("constraint", constraint);
            }
            return conflict;
        }
    }
    DomainError::database(format!("{}: {}", context, err))
}

fn column_error(column: &str, err: sqlx::Error) -> DomainError {
    DomainError::database(format!("Failed to get {}: {}", column, err))
}

fn row_to_pauta(row: sqlx::postgres::PgRow) -> Result<Pauta, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let titulo: String = row.try_get("titulo").map_err(|e| column_error("titulo", e))?;
    let descricao: Option<String> = row
        .try_get("descricao")
        .map_err(|e| column_error("descricao", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;
    let sessao_inicio: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("sessao_inicio")
        .map_err(|e| column_error("sessao_inicio", e))?;
    let sessao_minutos: Option<i32> = row
        .try_get("sessao_minutos")
        .map_err(|e| column_error("sessao_minutos", e))?;

    Ok(Pauta::reconstitute(
        PautaId::from_uuid(id),
        titulo,
        descricao,
        columns_to_sessao(sessao_inicio, sessao_minutos)?,
        Timestamp::from_datetime(created_at),
    ))
}

fn columns_to_sessao(
    inicio: Option<chrono::DateTime<chrono::Utc>>,
    minutos: Option<i32>,
) -> Result<Option<Sessao>, DomainError> {
    match (inicio, minutos) {
        (Some(inicio), Some(minutos)) => Ok(Some(Sessao::reconstitute(
            Timestamp::from_datetime(inicio),
            i64::from(minutos),
        ))),
        (None, None) => Ok(None),
        _ => Err(DomainError::database(
            "Inconsistent sessao columns: start and duration must both be set",
        )),
    }
}
