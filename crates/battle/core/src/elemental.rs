//! Elemental effectiveness table.
//!
//! Four elements form a directed cycle where each element beats the one it
//! points to: Fire → Wind → Land → Water → Fire. `Normal` sits outside the
//! cycle and never wins or loses.
//!
//! # Scaling
//!
//! ```text
//! multiplier = 1 + sign(result) * 0.5      // Win = +1, Draw = 0, Lose = -1
//! damage_out = round_half_even(base * multiplier)
//! ```
//!
//! Scaling is done in exact integer arithmetic (halves), so no float rounding
//! can leak into a battle log.

/// Elemental affinity of a skill or a combatant.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementalType {
    #[default]
    Normal,
    Fire,
    Water,
    Land,
    Wind,
}

/// Result of pitting one element against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementalResult {
    Win,
    Draw,
    Lose,
}

impl ElementalResult {
    /// +1 for Win, 0 for Draw, -1 for Lose.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Win => 1,
            Self::Draw => 0,
            Self::Lose => -1,
        }
    }

    /// The same matchup seen from the other side.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Draw => Self::Draw,
            Self::Lose => Self::Win,
        }
    }
}

impl ElementalType {
    /// Magnitude of the advantage/disadvantage swing.
    pub const MULTIPLIER_STEP: f64 = 0.5;

    /// The element this one beats, or `None` for `Normal`.
    pub const fn beats(self) -> Option<Self> {
        match self {
            Self::Normal => None,
            Self::Fire => Some(Self::Wind),
            Self::Water => Some(Self::Fire),
            Self::Land => Some(Self::Water),
            Self::Wind => Some(Self::Land),
        }
    }

    /// The element that beats this one, or `None` for `Normal`.
    pub const fn beaten_by(self) -> Option<Self> {
        match self {
            Self::Normal => None,
            Self::Fire => Some(Self::Water),
            Self::Water => Some(Self::Land),
            Self::Land => Some(Self::Wind),
            Self::Wind => Some(Self::Fire),
        }
    }
}

/// Outcome of `attacker` striking `defender`.
pub fn effectiveness(attacker: ElementalType, defender: ElementalType) -> ElementalResult {
    if attacker == ElementalType::Normal || attacker == defender {
        return ElementalResult::Draw;
    }
    if attacker.beats() == Some(defender) {
        ElementalResult::Win
    } else if attacker.beaten_by() == Some(defender) {
        ElementalResult::Lose
    } else {
        ElementalResult::Draw
    }
}

/// Damage multiplier for the matchup: 1.5, 1.0 or 0.5.
pub fn multiplier(attacker: ElementalType, defender: ElementalType) -> f64 {
    1.0 + effectiveness(attacker, defender).sign() as f64 * ElementalType::MULTIPLIER_STEP
}

/// Scales `base` by the matchup multiplier, rounding half to even.
pub fn scale_damage(base: u32, attacker: ElementalType, defender: ElementalType) -> u32 {
    // Work in halves: multiplier × 2 ∈ {1, 2, 3}
    let halves = (2 + effectiveness(attacker, defender).sign()) as u64;
    let doubled = base as u64 * halves;
    let quotient = doubled / 2;
    let rounded = if doubled % 2 == 1 && quotient % 2 == 1 {
        quotient + 1
    } else {
        quotient
    };
    rounded.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use ElementalType::*;

    #[test]
    fn cycle_is_reproduced_exactly() {
        assert_eq!(effectiveness(Fire, Wind), ElementalResult::Win);
        assert_eq!(effectiveness(Water, Fire), ElementalResult::Win);
        assert_eq!(effectiveness(Land, Water), ElementalResult::Win);
        assert_eq!(effectiveness(Wind, Land), ElementalResult::Win);

        assert_eq!(effectiveness(Wind, Fire), ElementalResult::Lose);
        assert_eq!(effectiveness(Fire, Water), ElementalResult::Lose);
        assert_eq!(effectiveness(Water, Land), ElementalResult::Lose);
        assert_eq!(effectiveness(Land, Wind), ElementalResult::Lose);

        // Opposite corners of the cycle are neutral
        assert_eq!(effectiveness(Fire, Land), ElementalResult::Draw);
        assert_eq!(effectiveness(Water, Wind), ElementalResult::Draw);
    }

    #[test]
    fn normal_and_mirror_matchups_draw() {
        for element in ElementalType::iter() {
            assert_eq!(effectiveness(Normal, element), ElementalResult::Draw);
            assert_eq!(effectiveness(element, Normal), ElementalResult::Draw);
            assert_eq!(effectiveness(element, element), ElementalResult::Draw);
        }
    }

    #[test]
    fn multiplier_is_bounded_and_antisymmetric() {
        for attacker in ElementalType::iter() {
            for defender in ElementalType::iter() {
                let m = multiplier(attacker, defender);
                assert!(m == 0.5 || m == 1.0 || m == 1.5, "{attacker} vs {defender}: {m}");
                assert_eq!(
                    effectiveness(attacker, defender),
                    effectiveness(defender, attacker).reverse()
                );
            }
        }
    }

    #[test]
    fn scaling_rounds_half_to_even() {
        assert_eq!(scale_damage(100, Fire, Wind), 150);
        assert_eq!(scale_damage(100, Wind, Fire), 50);
        assert_eq!(scale_damage(100, Fire, Land), 100);
        // 5 × 1.5 = 7.5 → 8 ; 7 × 1.5 = 10.5 → 10
        assert_eq!(scale_damage(5, Fire, Wind), 8);
        assert_eq!(scale_damage(7, Fire, Wind), 10);
        // 5 × 0.5 = 2.5 → 2 ; 7 × 0.5 = 3.5 → 4
        assert_eq!(scale_damage(5, Wind, Fire), 2);
        assert_eq!(scale_damage(7, Wind, Fire), 4);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("FIRE".parse::<ElementalType>().unwrap(), Fire);
        assert_eq!(Land.to_string(), "land");
    }
}
