use crate::combat::SkillId;
use crate::elemental::ElementalType;
use crate::state::{CombatantId, Side};

use super::stats::StatRowId;

/// A skill a combatant knows, referenced by id, with its selection chance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSlotRow {
    pub skill: SkillId,
    pub chance: u32,
}

impl SkillSlotRow {
    pub const fn new(skill: SkillId, chance: u32) -> Self {
        Self { skill, chance }
    }
}

/// Setup row describing one participant of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantRow {
    pub id: CombatantId,
    pub side: Side,
    pub stats: StatRowId,
    pub elemental: ElementalType,
    /// Optional starting HP; full health when absent.
    pub current_hp: Option<u32>,
    pub skills: Vec<SkillSlotRow>,
}

impl CombatantRow {
    pub fn new(id: CombatantId, side: Side, stats: StatRowId, elemental: ElementalType) -> Self {
        Self {
            id,
            side,
            stats,
            elemental,
            current_hp: None,
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_skill(mut self, skill: SkillId, chance: u32) -> Self {
        self.skills.push(SkillSlotRow::new(skill, chance));
        self
    }

    #[must_use]
    pub fn with_current_hp(mut self, current_hp: u32) -> Self {
        self.current_hp = Some(current_hp);
        self
    }
}
