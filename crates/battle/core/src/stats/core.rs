//! Base stats - the immutable numbers a combatant enters battle with.

/// Base attributes copied from a stat row at battle start.
///
/// - **max_hp**: upper bound for current HP
/// - **attack**: base magnitude of attacks and heals
/// - **defense**: flat reduction applied to incoming hits
/// - **speed**: turn-order priority (higher acts first)
/// - **critical_chance**: percent chance (0-100) that a hit is critical
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub critical_chance: u32,
}

impl BaseStats {
    /// Create new base stats with specified values
    pub const fn new(max_hp: u32, attack: u32, defense: u32, speed: u32, critical_chance: u32) -> Self {
        Self {
            max_hp,
            attack,
            defense,
            speed,
            critical_chance,
        }
    }
}

impl Default for BaseStats {
    /// A middling level-one fighter.
    fn default() -> Self {
        Self::new(100, 10, 0, 10, 0)
    }
}
