//! Guest decline policies
//!
//! After a room is found the guest may still walk away. Every policy
//! answers one question per matched order: does this guest decline?

use super::DeclinePolicy;
use crate::models::order::Order;
use crate::rng::RngManager;

/// Guest declines with probability `1 / one_in`
///
/// Rolls a die with `one_in` faces and declines on the highest face, so the
/// default of four gives the 25% cancellation rate.
///
/// # Example
///
/// ```
/// use hotel_simulator_core_rs::policy::{DeclinePolicy, RandomDecline};
/// use hotel_simulator_core_rs::{Date, Guest, Order, RngManager};
///
/// let mut policy = RandomDecline::new(4);
/// let mut rng = RngManager::new(42);
/// let order = Order::new(
///     "order_00001".to_string(),
///     Date::new(1, 3, 2020),
///     Guest::new("Ivanov", "Ivan", "Ivanovich"),
///     1,
///     Date::new(1, 3, 2020),
///     1,
///     3000,
/// );
///
/// let declined = (0..1000).filter(|_| policy.declines(&order, &mut rng)).count();
/// assert!(declined > 150 && declined < 350);
/// ```
#[derive(Debug, Clone)]
pub struct RandomDecline {
    one_in: u32,
}

impl RandomDecline {
    /// # Panics
    /// Panics if one_in is zero
    pub fn new(one_in: u32) -> Self {
        assert!(one_in > 0, "one_in must be positive");
        Self { one_in }
    }

    pub fn one_in(&self) -> u32 {
        self.one_in
    }
}

impl Default for RandomDecline {
    fn default() -> Self {
        Self::new(4)
    }
}

impl DeclinePolicy for RandomDecline {
    fn declines(&mut self, _order: &Order, rng: &mut RngManager) -> bool {
        rng.roll(self.one_in) == self.one_in
    }
}

/// Every guest accepts the room
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverDecline;

impl DeclinePolicy for NeverDecline {
    fn declines(&mut self, _order: &Order, _rng: &mut RngManager) -> bool {
        false
    }
}

/// Every guest declines the room
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl DeclinePolicy for AlwaysDecline {
    fn declines(&mut self, _order: &Order, _rng: &mut RngManager) -> bool {
        true
    }
}
