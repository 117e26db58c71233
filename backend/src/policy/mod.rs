//! Guest Decline Policy Module
//!
//! A matched order is not settled yet: the guest can still turn the room
//! down. This module defines that decision as a trait so the orchestrator can
//! run with random cancellations in production and fixed outcomes in tests.
//!
//! # Policy Interface
//!
//! ```rust
//! use hotel_simulator_core_rs::policy::DeclinePolicy;
//! use hotel_simulator_core_rs::{Order, RngManager};
//!
//! struct LargePartiesDecline;
//!
//! impl DeclinePolicy for LargePartiesDecline {
//!     fn declines(&mut self, order: &Order, _rng: &mut RngManager) -> bool {
//!         order.quantity() > 4
//!     }
//! }
//! ```
//!
//! Policies are selected with `DeclineConfig` in the simulation config.

use crate::models::order::Order;
use crate::rng::RngManager;

pub mod decline;

pub use decline::{AlwaysDecline, NeverDecline, RandomDecline};

/// Decides whether a guest turns down the room found for them
pub trait DeclinePolicy {
    /// True if the guest declines
    ///
    /// Implementations needing randomness must draw from `rng` so runs stay
    /// reproducible.
    fn declines(&mut self, order: &Order, rng: &mut RngManager) -> bool;
}
