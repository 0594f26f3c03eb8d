//! Combatant record held in the battle arena.

use arrayvec::ArrayVec;

use crate::combat::Skill;
use crate::config::BattleConfig;
use crate::elemental::ElementalType;
use crate::stats::StatModel;

use super::common::{CombatantId, Side};
use super::status::{StatusEffectKind, StatusEffects};

/// A known skill and the percent chance the selection policy takes it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSlot {
    pub skill: Skill,
    /// 1-100. 100 means the slot is always taken when reached.
    pub chance: u32,
}

impl SkillSlot {
    pub fn new(skill: Skill, chance: u32) -> Self {
        Self {
            skill,
            chance: chance.min(100),
        }
    }

    pub fn always(skill: Skill) -> Self {
        Self::new(skill, 100)
    }
}

/// Outcome of ticking a combatant's status effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTick {
    /// HP actually lost to periodic damage.
    pub damage_taken: u32,
    pub expired: ArrayVec<StatusEffectKind, { BattleConfig::MAX_STATUS_EFFECTS }>,
    /// True if the periodic damage took the combatant to zero HP.
    pub fainted: bool,
}

/// One participant of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub side: Side,
    pub elemental: ElementalType,
    pub stats: StatModel,
    pub status: StatusEffects,
    pub skills: ArrayVec<SkillSlot, { BattleConfig::MAX_SKILL_SLOTS }>,
}

impl Combatant {
    pub fn new(id: CombatantId, side: Side, elemental: ElementalType, stats: StatModel) -> Self {
        Self {
            id,
            side,
            elemental,
            stats,
            status: StatusEffects::empty(),
            skills: ArrayVec::new(),
        }
    }

    /// Adds a skill slot (builder pattern). Slots past capacity are dropped.
    #[must_use]
    pub fn with_skill(mut self, slot: SkillSlot) -> Self {
        if !self.skills.is_full() {
            self.skills.push(slot);
        }
        self
    }

    pub fn is_active(&self) -> bool {
        self.stats.is_active()
    }

    /// Speed used for turn ordering, after slows.
    pub fn effective_speed(&self) -> u32 {
        self.stats.effective_speed(self.status.slow_percent())
    }

    /// Runs the owner's turn-boundary tick and applies any periodic damage.
    pub fn tick_status(&mut self) -> StatusTick {
        let was_active = self.is_active();
        let report = self.status.tick();
        let damage_taken = self.stats.apply_damage(report.damage);

        StatusTick {
            damage_taken,
            expired: report.expired,
            fainted: was_active && !self.is_active(),
        }
    }
}
