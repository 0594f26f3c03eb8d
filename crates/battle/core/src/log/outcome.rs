use crate::state::Side;

/// Final result of a battle, from the Ally side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Derives the outcome from which sides still have someone standing.
    pub const fn from_survivors(allies_standing: bool, enemies_standing: bool) -> Option<Self> {
        match (allies_standing, enemies_standing) {
            (true, true) => None,
            (true, false) => Some(Self::Win),
            (false, true) => Some(Self::Lose),
            (false, false) => Some(Self::Draw),
        }
    }

    /// The same outcome seen from `side`.
    pub const fn for_side(self, side: Side) -> Self {
        match (self, side) {
            (outcome, Side::Ally) => outcome,
            (Self::Win, Side::Enemy) => Self::Lose,
            (Self::Lose, Side::Enemy) => Self::Win,
            (Self::Draw, Side::Enemy) => Self::Draw,
        }
    }
}

/// Non-fatal annotations attached to a finished log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleWarning {
    /// The turn ceiling was reached; the outcome was forced to a draw.
    TurnLimitExceeded { limit: u32 },
}
