//! Status effect registry.
//!
//! Status effects are transient modifiers attached to a single combatant:
//! damage over time, stun, slow, silence and airborne. Each carries a
//! remaining duration counted in the owner's turns.
//!
//! # Turn-based Duration
//!
//! [`StatusEffects::tick`] runs once at the owner's turn boundary. It applies
//! periodic magnitude for [`TickPolicy::PerTick`] kinds, decrements every
//! duration and removes effects that reach zero.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::BattleConfig;

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    /// HP loss every tick.
    DamageOverTime,

    /// Cannot act at all.
    Stun,

    /// Speed reduced by `magnitude` percent.
    Slow,

    /// Cannot use skills (falls back to the normal attack).
    Silence,

    /// Knocked up: cannot act.
    Airborne,
}

impl StatusEffectKind {
    /// How the effect's magnitude is applied over time.
    pub const fn tick_policy(self) -> TickPolicy {
        match self {
            Self::DamageOverTime => TickPolicy::PerTick,
            Self::Stun | Self::Slow | Self::Silence | Self::Airborne => TickPolicy::StartOfTurn,
        }
    }
}

/// When an effect's magnitude takes hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickPolicy {
    /// Checked at the start of the owner's turn (gating, speed).
    StartOfTurn,
    /// Applied at every tick (periodic damage).
    PerTick,
}

/// A single status effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    /// Damage per tick for DamageOverTime, percent for Slow, unused otherwise.
    pub magnitude: u32,
    /// Owner turns left before the effect is removed.
    pub remaining: u32,
    pub policy: TickPolicy,
}

impl StatusEffect {
    pub const fn new(kind: StatusEffectKind, magnitude: u32, duration: u32) -> Self {
        Self {
            kind,
            magnitude,
            remaining: duration,
            policy: kind.tick_policy(),
        }
    }

    pub const fn damage_over_time(damage_per_tick: u32, duration: u32) -> Self {
        Self::new(StatusEffectKind::DamageOverTime, damage_per_tick, duration)
    }

    pub const fn stun(duration: u32) -> Self {
        Self::new(StatusEffectKind::Stun, 0, duration)
    }

    pub const fn slow(percent: u32, duration: u32) -> Self {
        Self::new(StatusEffectKind::Slow, percent, duration)
    }

    pub const fn silence(duration: u32) -> Self {
        Self::new(StatusEffectKind::Silence, 0, duration)
    }

    pub const fn airborne(duration: u32) -> Self {
        Self::new(StatusEffectKind::Airborne, 0, duration)
    }
}

bitflags! {
    /// What the active effects forbid for the owner's upcoming turn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Restrictions: u8 {
        /// Turn is lost entirely (Stun, Airborne).
        const SKIP_TURN = 1 << 0;
        /// Only the default normal attack is allowed (Silence).
        const NO_SKILLS = 1 << 1;
    }
}

/// Result of one tick of a combatant's registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Periodic damage owed by PerTick effects this tick.
    pub damage: u32,
    /// Kinds removed because their duration ran out.
    pub expired: ArrayVec<StatusEffectKind, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

/// Active status effects on a combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Gets the active effect of a kind, if any.
    pub fn get(&self, kind: StatusEffectKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Attaches an effect, replacing an existing effect of the same kind.
    ///
    /// Returns the replaced effect. Effects with zero duration are ignored.
    pub fn attach(&mut self, effect: StatusEffect) -> Option<StatusEffect> {
        if effect.remaining == 0 {
            return None;
        }

        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            return Some(core::mem::replace(existing, effect));
        }

        // One slot per kind, so capacity is never the limiting factor
        if !self.effects.is_full() {
            self.effects.push(effect);
        }
        None
    }

    /// Removes a status effect immediately. Returns true if it was present.
    pub fn cleanse(&mut self, kind: StatusEffectKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        self.effects.len() != before
    }

    /// Removes every effect.
    pub fn cleanse_all(&mut self) {
        self.effects.clear();
    }

    /// Advances all effects by one turn.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        for effect in self.effects.iter_mut() {
            if effect.policy == TickPolicy::PerTick {
                report.damage = report.damage.saturating_add(effect.magnitude);
            }
            effect.remaining = effect.remaining.saturating_sub(1);
        }

        for effect in self.effects.iter().filter(|e| e.remaining == 0) {
            report.expired.push(effect.kind);
        }
        self.effects.retain(|e| e.remaining > 0);

        report
    }

    /// Restrictions the active effects impose on the owner's next turn.
    pub fn restrictions(&self) -> Restrictions {
        self.effects
            .iter()
            .fold(Restrictions::empty(), |acc, effect| match effect.kind {
                StatusEffectKind::Stun | StatusEffectKind::Airborne => {
                    acc | Restrictions::SKIP_TURN
                }
                StatusEffectKind::Silence => acc | Restrictions::NO_SKILLS,
                StatusEffectKind::DamageOverTime | StatusEffectKind::Slow => acc,
            })
    }

    /// True when the owner's upcoming turn is gated (skipped or skill-locked).
    pub fn is_stunned_or_silenced(&self) -> bool {
        !self.restrictions().is_empty()
    }

    /// Strongest active slow, in percent.
    pub fn slow_percent(&self) -> u32 {
        self.effects
            .iter()
            .filter(|e| e.kind == StatusEffectKind::Slow)
            .map(|e| e.magnitude)
            .max()
            .unwrap_or(0)
    }

    /// Returns an iterator over all active effects.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_replaces_same_kind() {
        let mut effects = StatusEffects::empty();
        assert!(effects.attach(StatusEffect::damage_over_time(4, 3)).is_none());
        let replaced = effects.attach(StatusEffect::damage_over_time(9, 1));
        assert_eq!(replaced, Some(StatusEffect::damage_over_time(4, 3)));
        assert_eq!(effects.len(), 1);
        assert_eq!(effects.get(StatusEffectKind::DamageOverTime).unwrap().magnitude, 9);
    }

    #[test]
    fn zero_duration_is_ignored() {
        let mut effects = StatusEffects::empty();
        effects.attach(StatusEffect::stun(0));
        assert!(effects.is_empty());
    }

    #[test]
    fn tick_applies_periodic_damage_and_expires() {
        let mut effects = StatusEffects::empty();
        effects.attach(StatusEffect::damage_over_time(4, 2));
        effects.attach(StatusEffect::stun(1));

        let first = effects.tick();
        assert_eq!(first.damage, 4);
        assert_eq!(first.expired.as_slice(), &[StatusEffectKind::Stun]);
        assert!(!effects.has(StatusEffectKind::Stun));

        let second = effects.tick();
        assert_eq!(second.damage, 4);
        assert_eq!(second.expired.as_slice(), &[StatusEffectKind::DamageOverTime]);
        assert!(effects.is_empty());

        assert_eq!(effects.tick(), TickReport::default());
    }

    #[test]
    fn restrictions_gate_the_next_turn() {
        let mut effects = StatusEffects::empty();
        assert!(!effects.is_stunned_or_silenced());

        effects.attach(StatusEffect::silence(5));
        assert_eq!(effects.restrictions(), Restrictions::NO_SKILLS);
        assert!(effects.is_stunned_or_silenced());

        effects.attach(StatusEffect::airborne(2));
        assert!(effects.restrictions().contains(Restrictions::SKIP_TURN));

        effects.cleanse_all();
        effects.attach(StatusEffect::slow(50, 3));
        assert!(!effects.is_stunned_or_silenced());
        assert_eq!(effects.slow_percent(), 50);
    }

    #[test]
    fn cleanse_removes_one_kind() {
        let mut effects = StatusEffects::empty();
        effects.attach(StatusEffect::stun(2));
        effects.attach(StatusEffect::silence(2));
        assert!(effects.cleanse(StatusEffectKind::Stun));
        assert!(!effects.cleanse(StatusEffectKind::Stun));
        assert_eq!(effects.len(), 1);
    }
}
