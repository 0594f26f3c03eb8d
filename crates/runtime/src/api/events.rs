//! Events broadcast to runtime subscribers.

use battle_core::Outcome;

use super::matches::MatchId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    Finished {
        id: MatchId,
        outcome: Outcome,
        turns: u32,
        /// Hex SHA-256 of the encoded log.
        digest: String,
    },
    /// The match never started; `reason` is the rendered setup error.
    Rejected { id: MatchId, reason: String },
}

impl MatchEvent {
    pub fn id(&self) -> MatchId {
        match self {
            Self::Finished { id, .. } | Self::Rejected { id, .. } => *id,
        }
    }
}
