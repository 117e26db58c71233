//! Hotel Simulator Core - Rust Engine
//!
//! Day-by-day simulation of a hotel over one month: guests book rooms, a
//! greedy allocator places them, some guests cancel, and occupancy and
//! revenue statistics are computed at the close of every day.
//!
//! # Architecture
//!
//! - **core**: Calendar dates and the simulated day window
//! - **models**: Domain types (Room, Order, Hotel, Event)
//! - **tariffs**: Room, comfort and meal prices
//! - **allocation**: Two-pass greedy room selection
//! - **policy**: Guest decline policies
//! - **loader**: Room and order file parsing
//! - **orchestrator**: Main simulation loop
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole currency units)
//! 2. All randomness is deterministic (seeded RNG)
//! 3. A room's bookings never overlap and stay ordered by arrival

// Module declarations
pub mod allocation;
pub mod core;
pub mod loader;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod rng;
pub mod tariffs;

// Re-exports for convenience
pub use allocation::{allocate, find_suitable_room, RoomMatch};
pub use core::calendar::{Date, DateParseError, SimulationCalendar};
pub use loader::{load_hotel, InputError};
pub use models::{
    event::{Event, EventLog},
    hotel::{Availability, CategoryLoad, Departure, Hotel, HotelError},
    order::{Guest, Order},
    room::{Category, Comfort, Room, RoomError, RoomType},
};
pub use orchestrator::{
    DailyReport, DeclineConfig, Orchestrator, RevenueAccumulator, SimulationConfig, SimulationError,
    SimulationReport,
};
pub use rng::RngManager;
pub use tariffs::{MealPlan, Tariffs};
