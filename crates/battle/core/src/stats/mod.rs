//! Stat model.
//!
//! A combatant's numbers split into two layers:
//!
//! ```text
//! [ BaseStats ]      immutable, copied from a stat row
//!      ↓
//! [ ResourceMeter ]  mutable current HP, clamped to [0, max_hp]
//! ```
//!
//! Mutation goes through [`StatModel::apply_damage`] and
//! [`StatModel::apply_heal`] only. Neither logs anything; the skill
//! resolution engine records what happened.

pub mod core;
pub mod resources;

pub use self::core::BaseStats;
pub use resources::ResourceMeter;

use crate::rng::RandomSource;

/// Per-combatant numeric state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModel {
    base: BaseStats,
    hp: ResourceMeter,
}

impl StatModel {
    /// Creates a stat model at full health.
    pub fn new(base: BaseStats) -> Self {
        Self {
            hp: ResourceMeter::full(base.max_hp),
            base,
        }
    }

    /// Creates a stat model with an explicit current HP (clamped).
    pub fn with_current_hp(base: BaseStats, current_hp: u32) -> Self {
        Self {
            hp: ResourceMeter::new(current_hp, base.max_hp),
            base,
        }
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    pub fn max_hp(&self) -> u32 {
        self.hp.maximum()
    }

    pub fn current_hp(&self) -> u32 {
        self.hp.current()
    }

    pub fn attack(&self) -> u32 {
        self.base.attack
    }

    pub fn defense(&self) -> u32 {
        self.base.defense
    }

    pub fn speed(&self) -> u32 {
        self.base.speed
    }

    pub fn critical_chance(&self) -> u32 {
        self.base.critical_chance
    }

    /// Overwrites current HP, clamped to `[0, max_hp]`.
    pub fn set_current_hp(&mut self, value: u32) {
        self.hp.set_current(value);
    }

    /// Reduces current HP, never below zero. Returns the HP actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }

    /// Increases current HP, never above `max_hp`. Returns the HP actually gained.
    pub fn apply_heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// A combatant is active while it has HP left.
    pub fn is_active(&self) -> bool {
        !self.hp.is_depleted()
    }

    /// Speed after a percentage slow (0 = unslowed, 100 = stopped).
    pub fn effective_speed(&self, slow_percent: u32) -> u32 {
        let keep = 100u32.saturating_sub(slow_percent.min(100));
        (self.base.speed as u64 * keep as u64 / 100) as u32
    }

    /// Ratio of current to max HP in basis points, for ally targeting.
    pub fn hp_ratio_bp(&self) -> u32 {
        if self.max_hp() == 0 {
            return 0;
        }
        (self.current_hp() as u64 * 10_000 / self.max_hp() as u64) as u32
    }

    /// One critical check: a d100 draw against this combatant's critical chance.
    ///
    /// Always consumes exactly one draw so the random stream does not depend
    /// on the chance value.
    pub fn roll_critical(&self, rng: &mut dyn RandomSource) -> bool {
        rng.chance(self.base.critical_chance)
    }
}
