//! Leaderboard over time-stamped avatar snapshots.
mod board;
mod entry;
mod ids;

pub use board::{RankingBoard, SharedRankingBoard, UpdateOutcome};
pub use entry::{AvatarSnapshot, RankingEntry};
pub use ids::{AvatarId, OwnerId, Timestamp};

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("ranking board lock poisoned")]
    LockPoisoned,

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl GameError for RankingError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Internal,
            Self::InvalidAddress(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "RANKING_LOCK_POISONED",
            Self::InvalidAddress(_) => "RANKING_INVALID_ADDRESS",
        }
    }
}
