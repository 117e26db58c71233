//! Orchestrator Engine
//!
//! Main simulation loop integrating all components:
//! - Guest departures
//! - Order intake by booking day
//! - Two-pass room allocation and guest decline
//! - Occupancy and revenue statistics
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! ```text
//! For each day d in first_day..=last_day:
//! 1. Evict guests whose departure day is d
//! 2. Collect orders booked on day d
//! 3. For each order: full-price pass, then discount pass
//!    - match + guest declines  → lost revenue
//!    - match + guest accepts   → booking appended, profit realized
//!    - no match                → lost revenue
//! 4. Compute availability, category load and total load
//! 5. Log end of day, advance the calendar
//! ```
//!
//! # Example
//!
//! ```rust
//! use hotel_simulator_core_rs::loader;
//! use hotel_simulator_core_rs::orchestrator::{DeclineConfig, Orchestrator, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     decline: DeclineConfig::Never,
//!     ..SimulationConfig::default()
//! };
//!
//! let rooms = "1 single 1 standard\n2 double 2 standard\n3 half_luxury 2 improved\n4 luxury 3 apartment\n";
//! let orders = "01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 2 3500\n";
//! let hotel = loader::load_hotel(rooms, orders, &config.tariffs).unwrap();
//!
//! let mut orchestrator = Orchestrator::new(config, hotel).unwrap();
//! let day1 = orchestrator.tick().unwrap();
//! assert_eq!(day1.settled, 1);
//! assert_eq!(day1.revenue, 3180);
//! assert_eq!(day1.lost_revenue, 0);
//! ```

use crate::allocation;
use crate::core::calendar::{Date, SimulationCalendar};
use crate::loader::{self, InputError};
use crate::models::event::{Event, EventLog};
use crate::models::hotel::{Availability, CategoryLoad, Hotel, HotelError};
use crate::models::room::Category;
use crate::policy::{AlwaysDecline, DeclinePolicy, NeverDecline, RandomDecline};
use crate::rng::RngManager;
use crate::tariffs::Tariffs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete simulation configuration
///
/// Every field has a default, so a JSON config file only needs the fields it
/// changes.
///
/// Rooms fix their price when built, so load them with the same `tariffs`
/// that are passed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// RNG seed for deterministic guest declines
    pub rng_seed: u64,

    /// First simulated day of the month (inclusive)
    pub first_day: u32,

    /// Last simulated day of the month (inclusive)
    pub last_day: u32,

    pub month: u32,

    pub year: u32,

    /// Room, comfort and meal prices
    pub tariffs: Tariffs,

    /// How guests decline matched rooms
    pub decline: DeclineConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rng_seed: 2020,
            first_day: 1,
            last_day: 30,
            month: 3,
            year: 2020,
            tariffs: Tariffs::default(),
            decline: DeclineConfig::default(),
        }
    }
}

/// Decline policy selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeclineConfig {
    /// Guest declines with probability `1 / one_in`
    Random { one_in: u32 },

    /// Every matched guest accepts
    Never,

    /// Every matched guest declines
    Always,
}

impl Default for DeclineConfig {
    fn default() -> Self {
        DeclineConfig::Random { one_in: 4 }
    }
}

impl DeclineConfig {
    fn build(&self) -> Box<dyn DeclinePolicy> {
        match self {
            DeclineConfig::Random { one_in } => Box::new(RandomDecline::new(*one_in)),
            DeclineConfig::Never => Box::new(NeverDecline),
            DeclineConfig::Always => Box::new(AlwaysDecline),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Statistics for one simulated day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub day: u32,

    pub date: Date,

    /// Guests who left this day
    pub departures: usize,

    /// Orders placed in a room
    pub settled: usize,

    /// Orders matched but declined by the guest
    pub declined: usize,

    /// Orders with no suitable room
    pub unmatched: usize,

    pub availability: Availability,

    /// Per-category occupancy, in `Category::ALL` order
    pub category_load: Vec<CategoryLoad>,

    /// Occupied rooms as a percentage of all rooms
    pub total_load_percent: f64,

    /// Profit realized from settled orders
    pub revenue: i64,

    /// Revenue lost to declines and unmatched orders
    pub lost_revenue: i64,
}

/// Totals accumulated over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueAccumulator {
    pub total_revenue: i64,
    pub total_lost_revenue: i64,
    pub total_departures: usize,
    pub total_settled: usize,
    pub total_declined: usize,
    pub total_unmatched: usize,
    /// Highest number of occupied rooms on any day
    pub peak_occupied: usize,
}

impl RevenueAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one day into the totals
    pub fn add(&mut self, report: &DailyReport) {
        self.total_revenue += report.revenue;
        self.total_lost_revenue += report.lost_revenue;
        self.total_departures += report.departures;
        self.total_settled += report.settled;
        self.total_declined += report.declined;
        self.total_unmatched += report.unmatched;
        self.peak_occupied = self.peak_occupied.max(report.availability.non_available);
    }

    /// Orders processed so far
    pub fn total_orders(&self) -> usize {
        self.total_settled + self.total_declined + self.total_unmatched
    }
}

/// Output of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Unique ID of this run
    pub run_id: String,

    pub rng_seed: u64,

    pub days: Vec<DailyReport>,

    pub totals: RevenueAccumulator,

    pub events: Vec<Event>,
}

/// Simulation error types
///
/// Every variant is fatal: the run stops at the first error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Malformed input data: {0}")]
    MalformedInput(#[from] InputError),

    #[error("Category {0} has no rooms; load percentage is undefined")]
    EmptyCategory(Category),

    #[error("Hotel has no rooms")]
    EmptyHotel,

    #[error("Room index {0} out of range")]
    RoomNotFound(usize),

    #[error("Simulation already finished at day {0}")]
    Finished(u32),
}

impl From<HotelError> for SimulationError {
    fn from(err: HotelError) -> Self {
        match err {
            HotelError::EmptyCategory(category) => SimulationError::EmptyCategory(category),
            HotelError::EmptyHotel => SimulationError::EmptyHotel,
            HotelError::RoomNotFound(index) => SimulationError::RoomNotFound(index),
        }
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Main orchestrator managing hotel state and the daily loop
///
/// # Determinism
///
/// The decline policy draws from `rng_manager` only. Same seed + same
/// config + same inputs = identical event log and reports.
pub struct Orchestrator {
    hotel: Hotel,

    calendar: SimulationCalendar,

    rng_manager: RngManager,

    rng_seed: u64,

    decline_policy: Box<dyn DeclinePolicy>,

    tariffs: Tariffs,

    totals: RevenueAccumulator,

    event_log: EventLog,
}

impl Orchestrator {
    /// Create an orchestrator over a loaded hotel
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidConfig` if the config fails validation.
    pub fn new(config: SimulationConfig, hotel: Hotel) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let decline_policy = config.decline.build();
        Ok(Self::assemble(config, hotel, decline_policy))
    }

    /// Create an orchestrator from the text of the room and order files
    ///
    /// Rooms are priced with `config.tariffs`.
    ///
    /// # Errors
    ///
    /// - `SimulationError::MalformedInput` if either file fails to parse
    /// - `SimulationError::InvalidConfig` if the config fails validation
    pub fn from_text(
        config: SimulationConfig,
        rooms_text: &str,
        orders_text: &str,
    ) -> Result<Self, SimulationError> {
        let hotel = loader::load_hotel(rooms_text, orders_text, &config.tariffs)?;
        Self::new(config, hotel)
    }

    /// Create an orchestrator with a caller-supplied decline policy
    ///
    /// `config.decline` is ignored.
    pub fn with_decline_policy(
        config: SimulationConfig,
        hotel: Hotel,
        decline_policy: Box<dyn DeclinePolicy>,
    ) -> Result<Self, SimulationError> {
        Self::validate_config(&SimulationConfig {
            decline: DeclineConfig::Never,
            ..config.clone()
        })?;

        Ok(Self::assemble(config, hotel, decline_policy))
    }

    fn assemble(
        config: SimulationConfig,
        hotel: Hotel,
        decline_policy: Box<dyn DeclinePolicy>,
    ) -> Self {
        info!(
            rooms = hotel.num_rooms(),
            orders = hotel.num_orders(),
            seed = config.rng_seed,
            "simulation initialized"
        );

        Self {
            hotel,
            calendar: SimulationCalendar::new(
                config.first_day,
                config.last_day,
                config.month,
                config.year,
            ),
            rng_manager: RngManager::new(config.rng_seed),
            rng_seed: config.rng_seed,
            decline_policy,
            tariffs: config.tariffs,
            totals: RevenueAccumulator::new(),
            event_log: EventLog::new(),
        }
    }

    /// Validate configuration
    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.first_day == 0 {
            return Err(SimulationError::InvalidConfig(
                "first_day must be > 0".to_string(),
            ));
        }

        if config.first_day > config.last_day {
            return Err(SimulationError::InvalidConfig(format!(
                "first_day {} is after last_day {}",
                config.first_day, config.last_day
            )));
        }

        if !(1..=12).contains(&config.month) {
            return Err(SimulationError::InvalidConfig(format!(
                "month must be in 1..=12, got {}",
                config.month
            )));
        }

        if let DeclineConfig::Random { one_in: 0 } = config.decline {
            return Err(SimulationError::InvalidConfig(
                "decline one_in must be > 0".to_string(),
            ));
        }

        config
            .tariffs
            .validate()
            .map_err(SimulationError::InvalidConfig)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Day the next `tick()` will simulate
    pub fn current_day(&self) -> u32 {
        self.calendar.current_day()
    }

    pub fn current_date(&self) -> Date {
        self.calendar.current_date()
    }

    pub fn is_finished(&self) -> bool {
        self.calendar.is_finished()
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn event_count(&self) -> usize {
        self.event_log.len()
    }

    pub fn totals(&self) -> &RevenueAccumulator {
        &self.totals
    }

    pub fn tariffs(&self) -> &Tariffs {
        &self.tariffs
    }

    fn log_event(&mut self, event: Event) {
        debug!(event = ?event, "event");
        self.event_log.log(event);
    }

    // ========================================================================
    // Daily Loop
    // ========================================================================

    /// Simulate one day and advance the calendar
    ///
    /// # Errors
    ///
    /// - `SimulationError::Finished` if every day has been simulated
    /// - `SimulationError::EmptyCategory` / `EmptyHotel` when statistics are undefined
    pub fn tick(&mut self) -> Result<DailyReport, SimulationError> {
        if self.calendar.is_finished() {
            return Err(SimulationError::Finished(self.calendar.last_day()));
        }

        let day = self.calendar.current_day();
        let date = self.calendar.current_date();
        let _span = tracing::info_span!("day", %date).entered();

        let mut revenue = 0;
        let mut lost_revenue = 0;
        let mut settled = 0;
        let mut declined = 0;
        let mut unmatched = 0;

        // Checked before any state change: a failed day leaves the hotel
        // and the event log untouched
        self.hotel.check_statistics_defined()?;

        // STEP 1: DEPARTURES
        let departures = self.hotel.departation_from_all_rooms(day);
        let num_departures = departures.len();
        for departure in departures {
            self.log_event(Event::Departure {
                day,
                order_id: departure.order.id().to_string(),
                guest: departure.order.guest().clone(),
                room_number: departure.room_number,
            });
        }

        // STEP 2: INTAKE
        let orders = self.hotel.daily_check_orders(day);

        // STEP 3: MATCHING
        for order in orders {
            let Some(found) = allocation::allocate(self.hotel.rooms(), &order, &self.tariffs)
            else {
                warn!(order_id = order.id(), guest = %order.guest(), "no suitable room");
                lost_revenue += order.lost_revenue();
                unmatched += 1;
                self.log_event(Event::NoSuitableRoom {
                    day,
                    order_id: order.id().to_string(),
                    guest: order.guest().clone(),
                    quantity: order.quantity(),
                    lost_revenue: order.lost_revenue(),
                });
                continue;
            };

            if self.decline_policy.declines(&order, &mut self.rng_manager) {
                warn!(order_id = order.id(), guest = %order.guest(), "guest declined");
                lost_revenue += order.lost_revenue();
                declined += 1;
                self.log_event(Event::Declined {
                    day,
                    order_id: order.id().to_string(),
                    guest: order.guest().clone(),
                    quantity: order.quantity(),
                    room_number: found.room_number,
                    lost_revenue: order.lost_revenue(),
                });
                continue;
            }

            revenue += found.profit;
            settled += 1;
            let event = Event::Settlement {
                day,
                order_id: order.id().to_string(),
                guest: order.guest().clone(),
                quantity: order.quantity(),
                room_number: found.room_number.clone(),
                meal: found.meal,
                profit: found.profit,
                discounted: found.discounted,
            };
            self.hotel.book(found.room_index, order)?;
            self.log_event(event);
        }

        // STEP 4: STATISTICS
        let availability = self.hotel.check_general_available(day);
        let category_load = self.hotel.check_general_category_load(day)?;
        let total_load_percent = self.hotel.total_load_percent(day)?;

        self.log_event(Event::EndOfDay {
            day,
            occupied: availability.non_available,
            available: availability.available,
            revenue,
            lost_revenue,
        });

        let report = DailyReport {
            day,
            date,
            departures: num_departures,
            settled,
            declined,
            unmatched,
            availability,
            category_load,
            total_load_percent,
            revenue,
            lost_revenue,
        };
        self.totals.add(&report);

        info!(
            occupied = availability.non_available,
            available = availability.available,
            revenue,
            lost_revenue,
            "day closed"
        );

        // STEP 5: ADVANCE CALENDAR
        self.calendar.advance_day();

        Ok(report)
    }

    /// Simulate every remaining day
    pub fn run(&mut self) -> Result<SimulationReport, SimulationError> {
        let mut days = Vec::new();
        while !self.calendar.is_finished() {
            days.push(self.tick()?);
        }

        info!(
            days = days.len(),
            revenue = self.totals.total_revenue,
            lost_revenue = self.totals.total_lost_revenue,
            "simulation finished"
        );

        Ok(SimulationReport {
            run_id: uuid::Uuid::new_v4().to_string(),
            rng_seed: self.rng_seed,
            days,
            totals: self.totals.clone(),
            events: self.event_log.events().to_vec(),
        })
    }
}

// Manual Debug implementation (policies don't implement Debug)
impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("current_day", &self.current_day())
            .field("num_rooms", &self.hotel.num_rooms())
            .field("num_orders", &self.hotel.num_orders())
            .field("event_count", &self.event_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
