//! On-hit status table.
//!
//! Every damaging hit that leaves its target standing rolls a d20 from the
//! battle's random source. The mapping from roll to effect is a pure
//! function, so a log entry can be explained from the roll alone.
//!
//! | roll | effect                      |
//! |------|-----------------------------|
//! | 1    | damage over time, 4 × 3     |
//! | 2    | silence, 5 turns            |
//! | 3    | stun, 2 turns               |
//! | 4    | airborne, 2 turns           |
//! | 5    | slow 50%, 3 turns           |
//! | 6-20 | nothing                     |

use crate::rng::RandomSource;
use crate::state::StatusEffect;

pub const STATUS_ROLL_SIDES: u32 = 20;

pub const DOT_DAMAGE_PER_TICK: u32 = 4;
pub const DOT_DURATION: u32 = 3;
pub const SILENCE_DURATION: u32 = 5;
pub const STUN_DURATION: u32 = 2;
pub const AIRBORNE_DURATION: u32 = 2;
pub const SLOW_PERCENT: u32 = 50;
pub const SLOW_DURATION: u32 = 3;

/// Effect selected by a d20 roll, if any.
pub fn status_for_roll(roll: u32) -> Option<StatusEffect> {
    match roll {
        1 => Some(StatusEffect::damage_over_time(DOT_DAMAGE_PER_TICK, DOT_DURATION)),
        2 => Some(StatusEffect::silence(SILENCE_DURATION)),
        3 => Some(StatusEffect::stun(STUN_DURATION)),
        4 => Some(StatusEffect::airborne(AIRBORNE_DURATION)),
        5 => Some(StatusEffect::slow(SLOW_PERCENT, SLOW_DURATION)),
        _ => None,
    }
}

/// Draws one d20 and maps it through [`status_for_roll`].
pub fn roll_on_hit_status(rng: &mut dyn RandomSource) -> Option<StatusEffect> {
    status_for_roll(rng.roll_die(STATUS_ROLL_SIDES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::state::StatusEffectKind;

    #[test]
    fn each_kind_has_one_face() {
        let kinds: Vec<StatusEffectKind> = (1..=STATUS_ROLL_SIDES)
            .filter_map(status_for_roll)
            .map(|effect| effect.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                StatusEffectKind::DamageOverTime,
                StatusEffectKind::Silence,
                StatusEffectKind::Stun,
                StatusEffectKind::Airborne,
                StatusEffectKind::Slow,
            ]
        );
    }

    #[test]
    fn roll_uses_one_d20_draw() {
        // d20 of draw 2 is 3 → stun
        let mut rng = SequenceRng::new(vec![2]);
        let effect = roll_on_hit_status(&mut rng).unwrap();
        assert_eq!(effect, StatusEffect::stun(STUN_DURATION));
        assert_eq!(rng.consumed(), 1);
    }
}
