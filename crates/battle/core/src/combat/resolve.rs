//! Skill resolution.
//!
//! [`use_skill`] is the single entry point: it filters the candidate targets,
//! dispatches on [`SkillCategory`] and mutates the roster in place. Random
//! draws happen in a fixed order per hit: critical check (d100), then the
//! on-hit status roll (d20) when the target survives.

use crate::config::BattleConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::rng::RandomSource;
use crate::state::{CombatantId, CombatantIndex, Roster};

use super::damage::{base_effect, calculate_damage};
use super::on_hit::roll_on_hit_status;
use super::result::{SkillInfo, SkillUseResult};
use super::skill::{Skill, SkillCategory, SkillId, TargetRule};

/// Errors raised while resolving a skill.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("combatant {caster} has no valid target for skill {skill}")]
    NoValidTarget { caster: CombatantId, skill: SkillId },

    #[error("caster {0} is not part of the roster")]
    UnknownCaster(CombatantIndex),
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoValidTarget { .. } => ErrorSeverity::Recoverable,
            Self::UnknownCaster(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoValidTarget { .. } => "SKILL_NO_VALID_TARGET",
            Self::UnknownCaster(_) => "SKILL_UNKNOWN_CASTER",
        }
    }
}

/// Resolves `skill` cast by `caster` against `candidates`.
///
/// `candidates` lists the combatants the skill may land on, in roster order.
/// Defeated or unknown entries are ignored. Attack categories fail with
/// [`SkillError::NoValidTarget`] when nothing eligible remains; heals fall
/// back to the caster.
pub fn use_skill(
    skill: &Skill,
    caster: CombatantIndex,
    candidates: &[CombatantIndex],
    roster: &mut Roster,
    rng: &mut dyn RandomSource,
    config: &BattleConfig,
) -> Result<SkillUseResult, SkillError> {
    let caster_id = roster
        .get(caster)
        .map(|combatant| combatant.id)
        .ok_or(SkillError::UnknownCaster(caster))?;

    let eligible: Vec<CombatantIndex> = candidates
        .iter()
        .copied()
        .filter(|index| roster.get(*index).is_some_and(|c| c.is_active()))
        .collect();

    let mut result = SkillUseResult::new(caster_id, skill.id, skill.category);

    if skill.category.is_attack() && eligible.is_empty() {
        return Err(SkillError::NoValidTarget {
            caster: caster_id,
            skill: skill.id,
        });
    }

    match skill.category {
        SkillCategory::NormalAttack | SkillCategory::BlowAttack => {
            let info = strike(skill, caster, eligible[0], roster, rng, config);
            result.infos.push(info);
        }
        SkillCategory::DoubleAttack => {
            // Every hit lands and is recorded, even on a target the first
            // hit already took down.
            let target = eligible[0];
            for _ in 0..skill.hits() {
                let info = strike(skill, caster, target, roster, rng, config);
                result.infos.push(info);
            }
        }
        SkillCategory::AreaAttack => {
            // Targets are fixed at cast time. Hits beyond the snapshot size
            // wrap around it; a hit aimed at someone who fell mid-cast moves
            // on to the next standing snapshot member. Once the whole
            // snapshot is down the remaining hits still land on their
            // round-robin slot.
            let snapshot: Vec<CombatantIndex> = eligible
                .iter()
                .copied()
                .take(skill.hits() as usize)
                .collect();
            for hit in 0..skill.hits() as usize {
                let target = (0..snapshot.len())
                    .map(|offset| snapshot[(hit + offset) % snapshot.len()])
                    .find(|index| roster[*index].is_active())
                    .unwrap_or(snapshot[hit % snapshot.len()]);
                let info = strike(skill, caster, target, roster, rng, config);
                result.infos.push(info);
            }
        }
        SkillCategory::Heal => {
            let target = heal_target(skill.target, caster, &eligible, roster);
            let info = heal(skill, caster, target, roster);
            result.infos.push(info);
        }
    }

    Ok(result)
}

/// One damaging hit from `caster` to `target`.
///
/// A target that is already down takes the hit without losing HP and never
/// rolls for a status effect.
fn strike(
    skill: &Skill,
    caster: CombatantIndex,
    target: CombatantIndex,
    roster: &mut Roster,
    rng: &mut dyn RandomSource,
    config: &BattleConfig,
) -> SkillInfo {
    let attacker = &roster[caster];
    let caster_id = attacker.id;
    let base = base_effect(skill.category, attacker.stats.attack(), skill.power);
    let critical = attacker.stats.roll_critical(rng);

    let defender = &mut roster[target];
    let effect = calculate_damage(
        base,
        critical,
        skill.elemental,
        defender.elemental,
        defender.stats.defense(),
        config,
    );
    defender.stats.apply_damage(effect);

    let applied_status = if config.status_on_hit && effect > 0 && defender.is_active() {
        roll_on_hit_status(rng).inspect(|effect| {
            defender.status.attach(*effect);
        })
    } else {
        None
    };

    SkillInfo {
        caster: caster_id,
        target: defender.id,
        effect,
        critical,
        elemental: skill.elemental,
        category: skill.category,
        applied_status,
    }
}

fn heal_target(
    rule: TargetRule,
    caster: CombatantIndex,
    eligible: &[CombatantIndex],
    roster: &Roster,
) -> CombatantIndex {
    match rule {
        TargetRule::LowestHpAlly => eligible
            .iter()
            .copied()
            .min_by_key(|index| roster[*index].stats.hp_ratio_bp())
            .unwrap_or(caster),
        _ => caster,
    }
}

/// Restores the caster's attack worth of HP; never crits, never scales.
fn heal(
    skill: &Skill,
    caster: CombatantIndex,
    target: CombatantIndex,
    roster: &mut Roster,
) -> SkillInfo {
    let healer = &roster[caster];
    let caster_id = healer.id;
    let effect = base_effect(SkillCategory::Heal, healer.stats.attack(), skill.power);

    let patient = &mut roster[target];
    patient.stats.apply_heal(effect);

    SkillInfo {
        caster: caster_id,
        target: patient.id,
        effect,
        critical: false,
        elemental: skill.elemental,
        category: SkillCategory::Heal,
        applied_status: None,
    }
}
