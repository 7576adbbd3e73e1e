//! Read model returned by the pauta query handlers.

use crate::domain::foundation::{SessaoStatus, Timestamp};
use crate::domain::pauta::Pauta;

/// A pauta together with its session status as seen at a single instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PautaView {
    pub pauta: Pauta,
    pub status: SessaoStatus,
}

impl PautaView {
    /// Derives the session status at `now`.
    pub fn at(pauta: Pauta, now: &Timestamp) -> Self {
        let status = pauta.sessao_status_at(now);
        Self { pauta, status }
    }
}
