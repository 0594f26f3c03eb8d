use std::fmt;

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CombatantId, Side};

/// Why a roster was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterIssue {
    Empty,
    MissingSide(Side),
    DuplicateId(CombatantId),
    ZeroMaxHp(CombatantId),
    TooManySkills(CombatantId),
}

impl fmt::Display for RosterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "roster is empty"),
            Self::MissingSide(side) => write!(f, "no standing combatant on the {side} side"),
            Self::DuplicateId(id) => write!(f, "combatant {id} appears more than once"),
            Self::ZeroMaxHp(id) => write!(f, "combatant {id} has zero max hp"),
            Self::TooManySkills(id) => write!(f, "combatant {id} has more skill slots than allowed"),
        }
    }
}

/// Errors that prevent a battle from starting. No log exists when one is
/// returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{table} row {id} not found")]
    ConfigNotFound { table: &'static str, id: u32 },

    #[error("{0} oracle is not available")]
    OracleUnavailable(&'static str),

    #[error("invalid roster: {0}")]
    InvalidRoster(RosterIssue),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigNotFound { .. } | Self::InvalidRoster(_) => ErrorSeverity::Validation,
            Self::OracleUnavailable(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "SETUP_CONFIG_NOT_FOUND",
            Self::OracleUnavailable(_) => "SETUP_ORACLE_UNAVAILABLE",
            Self::InvalidRoster(_) => "SETUP_INVALID_ROSTER",
        }
    }
}
