use crate::combat::SkillUseResult;
use crate::state::{CombatantId, StatusEffectKind};

/// One entry of the battle log, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A new round began; `order` is the turn order fixed for the round.
    RoundStarted {
        round: u32,
        order: Vec<CombatantId>,
    },
    /// A skill resolved. No entries means it fizzled for lack of a target.
    SkillUsed(SkillUseResult),
    /// The combatant lost its turn to a status effect.
    TurnSkipped {
        combatant: CombatantId,
        cause: StatusEffectKind,
    },
    /// Periodic damage at the owner's turn boundary.
    StatusTick { combatant: CombatantId, damage: u32 },
    StatusExpired {
        combatant: CombatantId,
        kind: StatusEffectKind,
    },
    Fainted { combatant: CombatantId },
}

impl BattleEvent {
    pub fn as_skill_use(&self) -> Option<&SkillUseResult> {
        match self {
            Self::SkillUsed(result) => Some(result),
            _ => None,
        }
    }
}
