//! Deterministic random number generation
//!
//! Guest cancellations are the only random element of a run.
//! CRITICAL: All randomness in the simulator MUST go through this module.

mod xorshift;

pub use xorshift::RngManager;
