/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Ceiling on combatant turns. Reaching it ends the battle as a draw.
    pub max_turns: u32,
    /// Critical hit multiplier in percent (150 = x1.5). Applied with truncation.
    pub critical_multiplier_percent: u32,
    /// Lower bound for a damaging hit after defense mitigation. Zero keeps
    /// harmless attackers harmless.
    pub minimum_damage: u32,
    /// Whether damaging hits roll the on-hit status table.
    pub status_on_hit: bool,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_SKILL_SLOTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 300;
    pub const DEFAULT_CRITICAL_MULTIPLIER_PERCENT: u32 = 150;
    pub const DEFAULT_MINIMUM_DAMAGE: u32 = 0;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            critical_multiplier_percent: Self::DEFAULT_CRITICAL_MULTIPLIER_PERCENT,
            minimum_damage: Self::DEFAULT_MINIMUM_DAMAGE,
            status_on_hit: true,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_minimum_damage(mut self, minimum_damage: u32) -> Self {
        self.minimum_damage = minimum_damage;
        self
    }

    pub fn with_status_on_hit(mut self, enabled: bool) -> Self {
        self.status_on_hit = enabled;
        self
    }

    /// Applies the critical multiplier to an effect magnitude.
    pub fn apply_critical(&self, amount: u32) -> u32 {
        (amount as u64 * self.critical_multiplier_percent as u64 / 100) as u32
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
