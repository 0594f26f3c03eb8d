//! Skill definitions.
//!
//! Skills are immutable rows. The closed [`SkillCategory`] set is dispatched
//! by a single `match` in [`use_skill`](super::use_skill).

use std::fmt;

use crate::elemental::ElementalType;
use crate::state::Side;

/// Identifier of a skill row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u32);

impl SkillId {
    /// Reserved identifier for the built-in fallback normal attack.
    ///
    /// Used when no configured skill is selected or the caster is silenced.
    pub const DEFAULT_ATTACK: Self = Self(u32::MAX);

    #[inline]
    pub const fn is_default_attack(self) -> bool {
        self.0 == Self::DEFAULT_ATTACK.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default_attack() {
            write!(f, "default_attack")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Closed set of skill behaviours.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillCategory {
    /// One hit for the caster's attack.
    NormalAttack,
    /// One hit for attack + power.
    BlowAttack,
    /// The same target struck `hit_count` times.
    DoubleAttack,
    /// `hit_count` hits spread over the enemy line.
    AreaAttack,
    /// Restores HP for the caster's attack.
    Heal,
}

impl SkillCategory {
    /// True for categories that damage enemies.
    pub const fn is_attack(self) -> bool {
        !matches!(self, Self::Heal)
    }

    /// Targeting rule a row of this category gets unless configured otherwise.
    pub const fn default_target(self) -> TargetRule {
        match self {
            Self::NormalAttack | Self::BlowAttack | Self::DoubleAttack => TargetRule::SingleEnemy,
            Self::AreaAttack => TargetRule::Enemies,
            Self::Heal => TargetRule::SelfOnly,
        }
    }

    /// Hit count a row of this category gets when the row leaves it at zero.
    pub const fn default_hit_count(self) -> u32 {
        match self {
            Self::DoubleAttack => 2,
            _ => 1,
        }
    }
}

/// Who a skill may land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetRule {
    /// First eligible enemy.
    SingleEnemy,
    /// Up to `hit_count` enemies.
    Enemies,
    /// The caster itself.
    SelfOnly,
    /// The live ally (caster included) with the lowest HP ratio.
    LowestHpAlly,
}

impl TargetRule {
    /// Side whose live combatants are the candidate targets.
    pub const fn candidate_side(self, caster: Side) -> Side {
        match self {
            Self::SingleEnemy | Self::Enemies => caster.opponent(),
            Self::SelfOnly | Self::LowestHpAlly => caster,
        }
    }
}

/// An immutable skill row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub category: SkillCategory,
    /// Flat contribution added to the caster's attack (Blow/Double/Area).
    pub power: u32,
    pub elemental: ElementalType,
    pub hit_count: u32,
    pub target: TargetRule,
}

impl Skill {
    pub fn new(
        id: SkillId,
        category: SkillCategory,
        power: u32,
        elemental: ElementalType,
        hit_count: u32,
    ) -> Self {
        let hit_count = if hit_count == 0 {
            category.default_hit_count()
        } else {
            hit_count
        };
        Self {
            id,
            category,
            power,
            elemental,
            hit_count,
            target: category.default_target(),
        }
    }

    /// Overrides the targeting rule (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: TargetRule) -> Self {
        self.target = target;
        self
    }

    /// The built-in normal attack carrying the caster's elemental affinity.
    pub fn default_attack(elemental: ElementalType) -> Self {
        Self::new(
            SkillId::DEFAULT_ATTACK,
            SkillCategory::NormalAttack,
            0,
            elemental,
            1,
        )
    }

    /// Number of hits this skill resolves, never less than one.
    pub fn hits(&self) -> u32 {
        self.hit_count.max(1)
    }
}
