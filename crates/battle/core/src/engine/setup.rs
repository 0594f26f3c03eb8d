//! Roster construction and validation.

use std::collections::BTreeSet;

use crate::combat::Skill;
use crate::config::BattleConfig;
use crate::env::{BattleEnv, CombatantRow};
use crate::state::{Combatant, Roster, Side, SkillSlot};
use crate::stats::StatModel;

use super::errors::{RosterIssue, SetupError};

/// Resolves setup rows against the tables in `env` and validates the result.
pub fn build_roster(env: BattleEnv<'_>, rows: &[CombatantRow]) -> Result<Roster, SetupError> {
    let skills = env.skills().ok_or(SetupError::OracleUnavailable("skill"))?;
    let stats = env.stats().ok_or(SetupError::OracleUnavailable("stat"))?;

    let mut combatants = Vec::with_capacity(rows.len());
    for row in rows {
        if row.skills.len() > BattleConfig::MAX_SKILL_SLOTS {
            return Err(SetupError::InvalidRoster(RosterIssue::TooManySkills(row.id)));
        }

        let base = stats
            .stats(row.stats)
            .ok_or(SetupError::ConfigNotFound {
                table: "stat",
                id: row.stats.0,
            })?;
        let model = match row.current_hp {
            Some(hp) => StatModel::with_current_hp(base, hp),
            None => StatModel::new(base),
        };

        let mut combatant = Combatant::new(row.id, row.side, row.elemental, model);
        for slot in &row.skills {
            let skill: Skill = skills.skill(slot.skill).ok_or(SetupError::ConfigNotFound {
                table: "skill",
                id: slot.skill.0,
            })?;
            combatant = combatant.with_skill(SkillSlot::new(skill, slot.chance));
        }
        combatants.push(combatant);
    }

    let roster = Roster::new(combatants);
    validate_roster(&roster)?;
    Ok(roster)
}

/// Checks that a roster can host a battle.
pub fn validate_roster(roster: &Roster) -> Result<(), SetupError> {
    if roster.is_empty() {
        return Err(SetupError::InvalidRoster(RosterIssue::Empty));
    }

    let mut seen = BTreeSet::new();
    for (_, combatant) in roster.iter() {
        if !seen.insert(combatant.id) {
            return Err(SetupError::InvalidRoster(RosterIssue::DuplicateId(
                combatant.id,
            )));
        }
        if combatant.stats.max_hp() == 0 {
            return Err(SetupError::InvalidRoster(RosterIssue::ZeroMaxHp(combatant.id)));
        }
    }

    for side in [Side::Ally, Side::Enemy] {
        if roster.is_defeated(side) {
            return Err(SetupError::InvalidRoster(RosterIssue::MissingSide(side)));
        }
    }

    Ok(())
}
