//! Arena of combatants addressed by stable indices.
//!
//! Skill resolution never holds references into the roster across calls; it
//! receives `&mut Roster` plus indices, which keeps caster/target aliasing
//! explicit.

use core::ops::{Index, IndexMut};

use super::combatant::Combatant;
use super::common::{CombatantId, CombatantIndex, Side};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self { combatants }
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn get(&self, index: CombatantIndex) -> Option<&Combatant> {
        self.combatants.get(index.0)
    }

    pub fn get_mut(&mut self, index: CombatantIndex) -> Option<&mut Combatant> {
        self.combatants.get_mut(index.0)
    }

    /// Looks up the arena index of a combatant id.
    pub fn find(&self, id: CombatantId) -> Option<CombatantIndex> {
        self.combatants
            .iter()
            .position(|c| c.id == id)
            .map(CombatantIndex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CombatantIndex, &Combatant)> {
        self.combatants
            .iter()
            .enumerate()
            .map(|(i, c)| (CombatantIndex(i), c))
    }

    /// Active combatants of `side`, in roster order.
    pub fn live_on(&self, side: Side) -> Vec<CombatantIndex> {
        self.iter()
            .filter(|(_, c)| c.side == side && c.is_active())
            .map(|(index, _)| index)
            .collect()
    }

    /// True when `side` has no active combatant left.
    pub fn is_defeated(&self, side: Side) -> bool {
        !self.combatants.iter().any(|c| c.side == side && c.is_active())
    }

    /// Active combatants ordered by descending effective speed.
    ///
    /// The sort is stable, so equal speeds keep roster order.
    pub fn turn_order(&self) -> Vec<CombatantIndex> {
        let mut order: Vec<(CombatantIndex, u32)> = self
            .iter()
            .filter(|(_, c)| c.is_active())
            .map(|(index, c)| (index, c.effective_speed()))
            .collect();
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order.into_iter().map(|(index, _)| index).collect()
    }
}

impl Index<CombatantIndex> for Roster {
    type Output = Combatant;

    fn index(&self, index: CombatantIndex) -> &Combatant {
        &self.combatants[index.0]
    }
}

impl IndexMut<CombatantIndex> for Roster {
    fn index_mut(&mut self, index: CombatantIndex) -> &mut Combatant {
        &mut self.combatants[index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elemental::ElementalType;
    use crate::stats::{BaseStats, StatModel};

    fn unit(id: u32, side: Side, speed: u32) -> Combatant {
        Combatant::new(
            CombatantId(id),
            side,
            ElementalType::Normal,
            StatModel::new(BaseStats::new(10, 1, 0, speed, 0)),
        )
    }

    #[test]
    fn turn_order_is_speed_desc_with_stable_ties() {
        let roster = Roster::new(vec![
            unit(1, Side::Ally, 5),
            unit(2, Side::Enemy, 9),
            unit(3, Side::Ally, 9),
            unit(4, Side::Enemy, 1),
        ]);
        let order = roster.turn_order();
        assert_eq!(
            order,
            vec![
                CombatantIndex(1),
                CombatantIndex(2),
                CombatantIndex(0),
                CombatantIndex(3)
            ]
        );
    }

    #[test]
    fn fainted_units_leave_live_lists_but_stay_addressable() {
        let mut roster = Roster::new(vec![unit(1, Side::Ally, 5), unit(2, Side::Enemy, 5)]);
        roster[CombatantIndex(1)].stats.apply_damage(100);

        assert!(roster.live_on(Side::Enemy).is_empty());
        assert!(roster.is_defeated(Side::Enemy));
        assert!(!roster.is_defeated(Side::Ally));
        assert_eq!(roster.turn_order(), vec![CombatantIndex(0)]);
        assert_eq!(roster.find(CombatantId(2)), Some(CombatantIndex(1)));
        assert!(!roster[CombatantIndex(1)].is_active());
    }
}
