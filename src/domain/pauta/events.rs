//! Pauta domain events.
//!
//! - `PautaCreated` - New pauta stored
//! - `SessaoOpened` - Voting session opened on a pauta

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, PautaId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// PautaCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new pauta is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PautaCreated {
    pub event_id: EventId,
    pub pauta_id: PautaId,
    pub titulo: String,
    pub descricao: Option<String>,
    pub created_at: Timestamp,
}

domain_event!(
    PautaCreated,
    event_type = "pauta.created.v1",
    schema_version = 1,
    aggregate_id = pauta_id,
    aggregate_type = "Pauta",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SessaoOpened
// ════════════════════════════════════════════════════════════════════════════

/// Published when a voting session is opened on a pauta.
///
/// There is no matching "closed" event: closing is a function of time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessaoOpened {
    pub event_id: EventId,
    pub pauta_id: PautaId,
    pub duration_minutes: i64,
    pub opened_at: Timestamp,
    pub closes_at: Timestamp,
}

domain_event!(
    SessaoOpened,
    event_type = "pauta.sessao_opened.v1",
    schema_version = 1,
    aggregate_id = pauta_id,
    aggregate_type = "Pauta",
    occurred_at = opened_at,
    event_id = event_id
);
