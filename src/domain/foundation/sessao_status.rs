//! SessaoStatus enum for the voting session lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a voting session, derived at read time.
///
/// `NotStarted -> Open -> Closed`. The `Open -> Closed` edge is never
/// written anywhere: it happens when the clock passes the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessaoStatus {
    #[default]
    NotStarted,
    Open,
    Closed,
}

impl SessaoStatus {
    /// Returns true if a session may still be opened from this state.
    pub fn accepts_opening(&self) -> bool {
        self.can_transition_to(&SessaoStatus::Open)
    }
}

impl StateMachine for SessaoStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessaoStatus::*;
        matches!((self, target), (NotStarted, Open) | (Open, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessaoStatus::*;
        match self {
            NotStarted => vec![Open],
            Open => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for SessaoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessaoStatus::NotStarted => "not_started",
            SessaoStatus::Open => "open",
            SessaoStatus::Closed => "closed",
        };
        write!(f, "{}", s)
    }
}
