//! xorshift64* random number generator
//!
//! Small, fast and fully deterministic: the same seed always yields the same
//! sequence of guest decisions, so a run can be replayed exactly.

use serde::{Deserialize, Serialize};

/// Seeded random number generator (xorshift64*)
///
/// # Example
/// ```
/// use hotel_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(2020);
/// let face = rng.roll(4); // 1..=4
/// assert!((1..=4).contains(&face));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a generator from a seed
    ///
    /// A zero seed is replaced by 1 (xorshift has no zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next raw 64-bit value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Roll a die with `sides` faces, returning `1..=sides`
    ///
    /// # Panics
    /// Panics if sides is zero
    pub fn roll(&mut self, sides: u32) -> u32 {
        assert!(sides > 0, "die must have at least one side");
        // High bits of xorshift64* are the better-mixed ones
        ((self.next() >> 32) % u64::from(sides)) as u32 + 1
    }

    /// Current internal state
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
