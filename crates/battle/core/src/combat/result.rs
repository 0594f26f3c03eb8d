//! Skill use result types.

use crate::elemental::ElementalType;
use crate::state::{CombatantId, StatusEffect};

use super::skill::{SkillCategory, SkillId};

/// One recorded effect application (one hit or one heal).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillInfo {
    pub caster: CombatantId,
    pub target: CombatantId,
    /// Computed magnitude of the hit or heal (before HP clamping).
    pub effect: u32,
    pub critical: bool,
    pub elemental: ElementalType,
    pub category: SkillCategory,
    /// Status effect the on-hit roll attached to the target, if any.
    pub applied_status: Option<StatusEffect>,
}

/// Everything one skill invocation did, in resolution order.
///
/// An empty `infos` list means the skill fizzled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillUseResult {
    pub caster: CombatantId,
    pub skill: SkillId,
    pub category: SkillCategory,
    pub infos: Vec<SkillInfo>,
}

impl SkillUseResult {
    pub fn new(caster: CombatantId, skill: SkillId, category: SkillCategory) -> Self {
        Self {
            caster,
            skill,
            category,
            infos: Vec::new(),
        }
    }

    /// Alias of [`SkillUseResult::new`] used for skills that found no target.
    pub fn empty(caster: CombatantId, skill: SkillId, category: SkillCategory) -> Self {
        Self::new(caster, skill, category)
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Sum of effects across all entries.
    pub fn total_effect(&self) -> u64 {
        self.infos.iter().map(|info| info.effect as u64).sum()
    }

    /// Sum of effects landing on one target.
    pub fn effect_on(&self, target: CombatantId) -> u64 {
        self.infos
            .iter()
            .filter(|info| info.target == target)
            .map(|info| info.effect as u64)
            .sum()
    }
}
