//! Mutable battle state: combatants, their status effects, and the arena
//! that addresses them.
mod combatant;
mod common;
mod roster;
pub mod status;

pub use combatant::{Combatant, SkillSlot, StatusTick};
pub use common::{CombatantId, CombatantIndex, Side};
pub use roster::Roster;
pub use status::{
    Restrictions, StatusEffect, StatusEffectKind, StatusEffects, TickPolicy, TickReport,
};
