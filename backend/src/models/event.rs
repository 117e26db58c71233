//! Event logging for simulation replay and auditing.
//!
//! Every state change of a run is recorded as an `Event`. The log is the
//! complete history of a run: which guests left, which orders were settled,
//! declined or turned away, and how each day closed.
//!
//! # Event Types
//!
//! Events follow the phases of a simulated day:
//! - **Departure**: Guest leaves a room
//! - **Settlement**: Order placed in a room
//! - **Declined**: Guest turned down the room found for them
//! - **NoSuitableRoom**: No room passed the allocation rules
//! - **EndOfDay**: Daily totals
//!
//! # Example
//!
//! ```rust
//! use hotel_simulator_core_rs::models::Event;
//! use hotel_simulator_core_rs::Guest;
//!
//! let event = Event::NoSuitableRoom {
//!     day: 4,
//!     order_id: "order_00012".to_string(),
//!     guest: Guest::new("Ivanov", "Ivan", "Ivanovich"),
//!     quantity: 3,
//!     lost_revenue: 9000,
//! };
//!
//! assert_eq!(event.day(), 4);
//! assert_eq!(event.event_type(), "NoSuitableRoom");
//! ```

use crate::models::order::Guest;
use crate::tariffs::MealPlan;
use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// Events are logged in the order they occur within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Head guest left the room
    Departure {
        day: u32,
        order_id: String,
        guest: Guest,
        room_number: String,
    },

    /// Order appended to a room's bookings
    Settlement {
        day: u32,
        order_id: String,
        guest: Guest,
        quantity: u32,
        room_number: String,
        meal: MealPlan,
        profit: i64,
        discounted: bool,
    },

    /// Room found but the guest cancelled
    Declined {
        day: u32,
        order_id: String,
        guest: Guest,
        quantity: u32,
        room_number: String,
        lost_revenue: i64,
    },

    /// No room satisfied the order in either pass
    NoSuitableRoom {
        day: u32,
        order_id: String,
        guest: Guest,
        quantity: u32,
        lost_revenue: i64,
    },

    /// Day closed
    EndOfDay {
        day: u32,
        occupied: usize,
        available: usize,
        revenue: i64,
        lost_revenue: i64,
    },
}

impl Event {
    /// Day the event occurred
    pub fn day(&self) -> u32 {
        match self {
            Event::Departure { day, .. } => *day,
            Event::Settlement { day, .. } => *day,
            Event::Declined { day, .. } => *day,
            Event::NoSuitableRoom { day, .. } => *day,
            Event::EndOfDay { day, .. } => *day,
        }
    }

    /// Short name of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Departure { .. } => "Departure",
            Event::Settlement { .. } => "Settlement",
            Event::Declined { .. } => "Declined",
            Event::NoSuitableRoom { .. } => "NoSuitableRoom",
            Event::EndOfDay { .. } => "EndOfDay",
        }
    }

    /// Order ID if the event concerns an order
    pub fn order_id(&self) -> Option<&str> {
        match self {
            Event::Departure { order_id, .. } => Some(order_id),
            Event::Settlement { order_id, .. } => Some(order_id),
            Event::Declined { order_id, .. } => Some(order_id),
            Event::NoSuitableRoom { order_id, .. } => Some(order_id),
            Event::EndOfDay { .. } => None,
        }
    }

    /// Guest if the event concerns an order
    pub fn guest(&self) -> Option<&Guest> {
        match self {
            Event::Departure { guest, .. } => Some(guest),
            Event::Settlement { guest, .. } => Some(guest),
            Event::Declined { guest, .. } => Some(guest),
            Event::NoSuitableRoom { guest, .. } => Some(guest),
            Event::EndOfDay { .. } => None,
        }
    }
}

/// Event log for storing and querying simulation events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events of a single day
    pub fn events_on_day(&self, day: u32) -> Vec<&Event> {
        self.events.iter().filter(|e| e.day() == day).collect()
    }

    /// Events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Events concerning one order
    pub fn events_for_order(&self, order_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.order_id() == Some(order_id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
