//! Damage calculation.

use crate::config::BattleConfig;
use crate::elemental::{ElementalType, scale_damage};

use super::skill::SkillCategory;

/// Unscaled magnitude of a skill before critical and elemental modifiers.
///
/// NormalAttack and Heal use the caster's attack alone; the other attack
/// categories add the skill's power.
pub fn base_effect(category: SkillCategory, attack: u32, power: u32) -> u32 {
    match category {
        SkillCategory::NormalAttack | SkillCategory::Heal => attack,
        SkillCategory::BlowAttack | SkillCategory::DoubleAttack | SkillCategory::AreaAttack => {
            attack.saturating_add(power)
        }
    }
}

/// Calculate the damage of a single hit.
///
/// # Formula
///
/// ```text
/// amount = base
/// if critical:
///     amount = amount × crit_multiplier          (truncating)
/// amount = round_half_even(amount × elemental_multiplier)
/// final  = max(amount - defense, minimum_damage)
/// ```
///
/// # Arguments
///
/// * `base` - Unscaled magnitude from [`base_effect`]
/// * `is_critical` - Whether this hit's critical check succeeded
/// * `attacker` - Elemental type of the skill
/// * `defender` - Elemental affinity of the target
/// * `defense` - Target's defense stat
/// * `config` - Balance parameters
pub fn calculate_damage(
    base: u32,
    is_critical: bool,
    attacker: ElementalType,
    defender: ElementalType,
    defense: u32,
    config: &BattleConfig,
) -> u32 {
    let mut amount = base;

    if is_critical {
        amount = config.apply_critical(amount);
    }

    amount = scale_damage(amount, attacker, defender);

    amount.saturating_sub(defense).max(config.minimum_damage)
}
