//! Deterministic turn-based battle simulation.
//!
//! `battle-core` takes a roster of combatants, skill and stat tables, and a
//! seed, and produces a replayable [`BattleLog`] with a terminal [`Outcome`].
//! Every random decision is drawn from one injected [`RandomSource`], so the
//! same inputs always yield a byte-identical log. All battle state changes
//! flow through [`engine::Simulator`].
//!
//! The [`ranking`] module is independent of battles: it keeps the latest
//! progress snapshot per owner and answers ordered leaderboard queries.
pub mod combat;
pub mod config;
pub mod elemental;
pub mod engine;
pub mod env;
pub mod error;
pub mod log;
pub mod ranking;
pub mod rng;
pub mod state;
pub mod stats;

pub use combat::{
    Skill, SkillCategory, SkillError, SkillId, SkillInfo, SkillUseResult, TargetRule, use_skill,
};
pub use config::BattleConfig;
pub use elemental::{ElementalResult, ElementalType};
pub use engine::{Phase, RosterIssue, SetupError, Simulator};
pub use env::{
    BattleEnv, CombatantRow, Env, SkillOracle, SkillRow, SkillSheet, SkillSlotRow, StatOracle,
    StatRow, StatRowId, StatSheet,
};
pub use error::{ErrorSeverity, GameError};
pub use log::{BattleEvent, BattleLog, BattleLogBuilder, BattleWarning, LogError, Outcome};
pub use ranking::{
    AvatarId, AvatarSnapshot, OwnerId, RankingBoard, RankingEntry, RankingError,
    SharedRankingBoard, Timestamp, UpdateOutcome,
};
pub use rng::{PcgRng, RandomSource, SequenceRng};
pub use state::{
    Combatant, CombatantId, CombatantIndex, Roster, Side, SkillSlot, StatusEffect,
    StatusEffectKind, StatusEffects,
};
pub use stats::{BaseStats, ResourceMeter, StatModel};
