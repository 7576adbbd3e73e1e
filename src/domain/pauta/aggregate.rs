//! Pauta aggregate entity.
//!
//! A pauta is an agenda item put to a vote. It is immutable after creation
//! except for attaching a single voting session.

use crate::domain::foundation::{DomainError, PautaId, SessaoStatus, Timestamp};

use super::errors::PautaError;
use super::sessao::Sessao;

/// Maximum length for pauta title.
pub const MAX_TITULO_LENGTH: usize = 255;

/// Maximum length for pauta description.
pub const MAX_DESCRICAO_LENGTH: usize = 2000;

/// Pauta aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `titulo` is 1-255 characters, non-empty after trimming
/// - `sessao` is set at most once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pauta {
    id: PautaId,
    titulo: String,
    descricao: Option<String>,
    sessao: Option<Sessao>,
    created_at: Timestamp,
}

impl Pauta {
    /// Create a new pauta with no session.
    ///
    /// Title and description are stored trimmed; a blank description is
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is empty or too long, or description too long
    pub fn new(
        id: PautaId,
        titulo: String,
        descricao: Option<String>,
    ) -> Result<Self, DomainError> {
        let titulo = titulo.trim().to_string();
        Self::validate_titulo(&titulo)?;

        let descricao = descricao
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(d) = &descricao {
            Self::validate_descricao(d)?;
        }

        Ok(Self {
            id,
            titulo,
            descricao,
            sessao: None,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a pauta from persistence (no validation, no events).
    pub fn reconstitute(
        id: PautaId,
        titulo: String,
        descricao: Option<String>,
        sessao: Option<Sessao>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            titulo,
            descricao,
            sessao,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PautaId {
        &self.id
    }

    pub fn titulo(&self) -> &str {
        &self.titulo
    }

    pub fn descricao(&self) -> Option<&str> {
        self.descricao.as_deref()
    }

    pub fn sessao(&self) -> Option<&Sessao> {
        self.sessao.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Session status at the given clock reading.
    pub fn sessao_status_at(&self, now: &Timestamp) -> SessaoStatus {
        match &self.sessao {
            Some(sessao) => sessao.status_at(now),
            None => SessaoStatus::NotStarted,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Open the voting session, starting at `now`.
    ///
    /// # Errors
    ///
    /// - `SessaoConflict` if a session already exists, open or closed
    /// - `ValidationFailed` if the duration is out of range
    pub fn open_sessao(
        &mut self,
        duration_minutes: i64,
        now: Timestamp,
    ) -> Result<&Sessao, PautaError> {
        if !self.sessao_status_at(&now).accepts_opening() {
            return Err(PautaError::sessao_conflict(self.id));
        }

        let sessao = Sessao::start(now, duration_minutes)?;
        Ok(&*self.sessao.insert(sessao))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_titulo(titulo: &str) -> Result<(), DomainError> {
        if titulo.is_empty() {
            return Err(DomainError::validation("titulo", "Title cannot be empty"));
        }
        if titulo.chars().count() > MAX_TITULO_LENGTH {
            return Err(DomainError::validation(
                "titulo",
                format!("Title must be {} characters or less", MAX_TITULO_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_descricao(descricao: &str) -> Result<(), DomainError> {
        if descricao.chars().count() > MAX_DESCRICAO_LENGTH {
            return Err(DomainError::validation(
                "descricao",
                format!(
                    "Description must be {} characters or less",
                    MAX_DESCRICAO_LENGTH
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn test_pauta() -> Pauta {
        Pauta::new(PautaId::new(), "Aprovação das contas".to_string(), None).unwrap()
    }

    // Construction tests

    #[test]
    fn new_pauta_has_no_sessao() {
        let pauta = test_pauta();
        assert!(pauta.sessao().is_none());
        assert_eq!(pauta.sessao_status_at(&Timestamp::now()), SessaoStatus::NotStarted);
    }

    #[test]
    fn new_pauta_trims_titulo() {
        let pauta = Pauta::new(PautaId::new(), "  Eleição  ".to_string(), None).unwrap();
        assert_eq!(pauta.titulo(), "Eleição");
    }

    #[test]
    fn new_pauta_drops_blank_descricao() {
        let pauta =
            Pauta::new(PautaId::new(), "Eleição".to_string(), Some("   ".to_string())).unwrap();
        assert_eq!(pauta.descricao(), None);
    }

    #[test]
    fn new_pauta_rejects_whitespace_titulo() {
        let err = Pauta::new(PautaId::new(), "   ".to_string(), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some("titulo"));
    }

    #[test]
    fn new_pauta_rejects_too_long_titulo() {
        let long = "x".repeat(MAX_TITULO_LENGTH + 1);
        assert!(Pauta::new(PautaId::new(), long, None).is_err());
    }

    #[test]
    fn new_pauta_counts_chars_not_bytes() {
        let accented = "ç".repeat(MAX_TITULO_LENGTH);
        assert!(Pauta::new(PautaId::new(), accented, None).is_ok());
    }

    #[test]
    fn new_pauta_rejects_too_long_descricao() {
        let long = "x".repeat(MAX_DESCRICAO_LENGTH + 1);
        let err = Pauta::new(PautaId::new(), "Eleição".to_string(), Some(long)).unwrap_err();
        assert_eq!(err.detail("field"), Some("descricao"));
    }

    // Session lifecycle tests

    #[test]
    fn open_sessao_attaches_session() {
        let mut pauta = test_pauta();
        let now = Timestamp::now();
        let sessao = *pauta.open_sessao(5, now).unwrap();

        assert_eq!(sessao.started_at(), &now);
        assert_eq!(pauta.sessao(), Some(&sessao));
        assert_eq!(pauta.sessao_status_at(&now), SessaoStatus::Open);
    }

    #[test]
    fn status_closes_after_deadline() {
        let mut pauta = test_pauta();
        let now = Timestamp::now();
        pauta.open_sessao(2, now).unwrap();

        assert_eq!(pauta.sessao_status_at(&now.plus_secs(119)), SessaoStatus::Open);
        assert_eq!(pauta.sessao_status_at(&now.plus_minutes(2)), SessaoStatus::Closed);
    }

    #[test]
    fn open_sessao_twice_while_open_conflicts() {
        let mut pauta = test_pauta();
        let now = Timestamp::now();
        pauta.open_sessao(5, now).unwrap();

        let result = pauta.open_sessao(5, now.plus_secs(10));
        assert_eq!(result.unwrap_err(), PautaError::SessaoConflict(*pauta.id()));
    }

    #[test]
    fn open_sessao_after_close_conflicts() {
        let mut pauta = test_pauta();
        let now = Timestamp::now();
        pauta.open_sessao(1, now).unwrap();

        let result = pauta.open_sessao(1, now.plus_minutes(30));
        assert!(matches!(result, Err(PautaError::SessaoConflict(_))));
        assert_eq!(pauta.sessao().unwrap().started_at(), &now);
    }

    #[test]
    fn open_sessao_rejects_invalid_duration_without_attaching() {
        let mut pauta = test_pauta();
        let result = pauta.open_sessao(0, Timestamp::now());

        assert!(matches!(result, Err(PautaError::ValidationFailed { .. })));
        assert!(pauta.sessao().is_none());
    }
}
