use crate::combat::Skill;
use crate::rng::RandomSource;
use crate::state::Combatant;

/// Picks the skill a combatant uses this turn.
///
/// Slots are walked in order. A slot with chance 100 is taken without a draw;
/// any other slot costs one d100 draw and is taken when the roll is at most
/// its chance. When no slot is taken the caster falls back to the default
/// normal attack.
pub fn select_skill(combatant: &Combatant, rng: &mut dyn RandomSource) -> Skill {
    for slot in &combatant.skills {
        if slot.chance >= 100 || rng.roll_d100() <= slot.chance {
            return slot.skill.clone();
        }
    }
    Skill::default_attack(combatant.elemental)
}
