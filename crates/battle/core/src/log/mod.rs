//! Append-only battle log.
//!
//! Events are appended through [`BattleLogBuilder`] while the battle runs.
//! Finishing the builder consumes it, so a [`BattleLog`] with an outcome can
//! no longer change.
mod event;
mod outcome;

pub use event::BattleEvent;
pub use outcome::{BattleWarning, Outcome};

use crate::combat::SkillUseResult;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    #[error("failed to encode battle log: {0}")]
    Serialization(String),
}

impl GameError for LogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "LOG_SERIALIZATION"
    }
}

/// Collects events for a running battle.
#[derive(Clone, Debug)]
pub struct BattleLogBuilder {
    seed: u64,
    events: Vec<BattleEvent>,
}

impl BattleLogBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            events: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn append(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Seals the log with its outcome.
    pub fn finish(self, outcome: Outcome, turns: u32, warnings: Vec<BattleWarning>) -> BattleLog {
        BattleLog {
            seed: self.seed,
            events: self.events,
            outcome,
            turns,
            warnings,
        }
    }
}

/// Immutable record of a finished battle.
///
/// Together with the input tables and roster, the seed is enough to replay
/// the battle and reproduce this log byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    seed: u64,
    events: Vec<BattleEvent>,
    outcome: Outcome,
    turns: u32,
    warnings: Vec<BattleWarning>,
}

impl BattleLog {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of combatant turns taken, skipped turns included.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn warnings(&self) -> &[BattleWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Skill results in the order they resolved.
    pub fn skill_uses(&self) -> impl Iterator<Item = &SkillUseResult> {
        self.events.iter().filter_map(BattleEvent::as_skill_use)
    }

    /// Deterministic binary encoding of the whole log.
    #[cfg(feature = "serde")]
    pub fn to_bytes(&self) -> Result<Vec<u8>, LogError> {
        bincode::serialize(self).map_err(|e| LogError::Serialization(e.to_string()))
    }

    /// SHA-256 over [`BattleLog::to_bytes`], for replay verification.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], LogError> {
        use sha2::{Digest, Sha256};

        let bytes = self.to_bytes()?;
        Ok(Sha256::digest(&bytes).into())
    }

    #[cfg(feature = "serde")]
    pub fn digest_hex(&self) -> Result<String, LogError> {
        self.digest().map(hex::encode)
    }
}
