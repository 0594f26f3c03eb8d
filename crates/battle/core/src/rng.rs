//! Deterministic random number generation.
//!
//! Every random decision in a battle (critical rolls, skill chance rolls, the
//! on-hit status table) draws from one injected [`RandomSource`]. No other
//! source of nondeterminism is permitted inside the engine.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed, they must
//! produce the same sequence of numbers. This is what makes a battle log
//! reproducible from `(roster, skills, seed)`.

/// Seedable source of randomness consumed by the engine.
///
/// Draws advance internal state, so the order of calls is part of the
/// deterministic contract.
pub trait RandomSource {
    /// Generate the next u32 value.
    fn next_u32(&mut self) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used for percentage mechanics like critical chance and skill chance.
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (self.next_u32() % sides) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32() % range)
    }

    /// Percentage check: one d100 draw, succeeds when the roll is within `percent`.
    fn chance(&mut self, percent: u32) -> bool {
        self.roll_d100() <= percent
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits, cheap to copy per battle
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        // Standard PCG seeding: step once, add the seed, step again.
        let mut state = Self::pcg_step(0);
        state = state.wrapping_add(seed);
        Self {
            state: Self::pcg_step(state),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Scripted source replaying a fixed list of raw draws, then repeating the last.
///
/// Lets tests pin exact rolls (`roll_d100` of a draw `n` is `n % 100 + 1`).
#[derive(Clone, Debug)]
pub struct SequenceRng {
    draws: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self
            .draws
            .get(self.cursor)
            .or_else(|| self.draws.last())
            .copied()
            .unwrap_or(0);
        self.cursor += 1;
        value
    }
}
