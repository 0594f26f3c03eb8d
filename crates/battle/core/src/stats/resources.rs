//! Resource pools.
//!
//! HP is the only pool a battle tracks. The maximum comes from base stats,
//! the current value is battle state and is always kept within `[0, maximum]`.

/// Integer resource meter tracked per combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into `[0, maximum]`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a meter at its maximum.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Overwrites the current value, clamped to the maximum.
    pub fn set_current(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }

    /// Drains up to `amount`. Returns how much was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }

    /// Restores up to `amount`. Returns how much was actually added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.maximum - self.current);
        self.current += applied;
        applied
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub const fn is_full(&self) -> bool {
        self.current == self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_maximum() {
        let meter = ResourceMeter::new(999, 105);
        assert_eq!(meter.current(), 105);
        assert!(meter.is_full());
    }

    #[test]
    fn drain_and_restore_report_applied_amount() {
        let mut meter = ResourceMeter::new(30, 100);
        assert_eq!(meter.drain(50), 30);
        assert!(meter.is_depleted());
        assert_eq!(meter.restore(250), 100);
        assert_eq!(meter.current(), 100);
    }
}
