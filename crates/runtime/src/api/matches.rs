use std::fmt;

use battle_core::{BattleLog, CombatantRow, Outcome};

/// Caller-chosen identifier of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchId(pub u64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match-{}", self.0)
    }
}

/// Everything needed to run one battle against the runtime's tables.
#[derive(Clone, Debug)]
pub struct MatchRequest {
    pub id: MatchId,
    pub rows: Vec<CombatantRow>,
    pub seed: u64,
}

impl MatchRequest {
    pub fn new(id: MatchId, rows: Vec<CombatantRow>, seed: u64) -> Self {
        Self { id, rows, seed }
    }
}

/// A finished match.
#[derive(Clone, Debug)]
pub struct MatchReport {
    pub id: MatchId,
    pub log: BattleLog,
    /// SHA-256 of the encoded log.
    pub digest: [u8; 32],
}

impl MatchReport {
    pub fn outcome(&self) -> Outcome {
        self.log.outcome()
    }

    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}
