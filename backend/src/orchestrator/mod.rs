//! Orchestrator - main simulation loop
//!
//! Runs the daily cycle of departures, order intake, allocation and
//! statistics over the simulated month.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    DailyReport, DeclineConfig, Orchestrator, RevenueAccumulator, SimulationConfig, SimulationError,
    SimulationReport,
};
