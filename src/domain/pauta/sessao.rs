//! Sessao value object - a time-boxed voting window.

use crate::domain::foundation::{SessaoStatus, Timestamp, ValidationError};

/// Duration used when the caller does not pick one.
pub const DEFAULT_DURATION_MINUTES: i64 = 1;

/// Shortest allowed session.
pub const MIN_DURATION_MINUTES: i64 = 1;

/// Longest allowed session (one day).
pub const MAX_DURATION_MINUTES: i64 = 24 * 60;

/// A voting session attached to a pauta.
///
/// Open/closed is never stored: it is computed against a clock reading,
/// open iff `now < started_at + duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sessao {
    started_at: Timestamp,
    duration_minutes: i64,
}

impl Sessao {
    /// Starts a session at `started_at` lasting `duration_minutes`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the duration is outside 1..=1440 minutes
    pub fn start(started_at: Timestamp, duration_minutes: i64) -> Result<Self, ValidationError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(ValidationError::out_of_range(
                "minutos",
                MIN_DURATION_MINUTES,
                MAX_DURATION_MINUTES,
                duration_minutes,
            ));
        }
        Ok(Self {
            started_at,
            duration_minutes,
        })
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(started_at: Timestamp, duration_minutes: i64) -> Self {
        Self {
            started_at,
            duration_minutes,
        }
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// The instant the session stops accepting votes.
    pub fn closes_at(&self) -> Timestamp {
        self.started_at.plus_minutes(self.duration_minutes)
    }

    pub fn is_open_at(&self, now: &Timestamp) -> bool {
        now.is_before(&self.closes_at())
    }

    /// Status at the given clock reading. Never `NotStarted`.
    pub fn status_at(&self, now: &Timestamp) -> SessaoStatus {
        if self.is_open_at(now) {
            SessaoStatus::Open
        } else {
            SessaoStatus::Closed
        }
    }
}
