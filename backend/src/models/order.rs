//! Order model
//!
//! A guest's reservation request. Each order has:
//! - Booking date (the day the hotel processes it)
//! - Guest identity
//! - Party size and budget
//! - Arrival date and number of nights
//! - Departure date, derived once at construction
//!
//! Orders are never mutated after construction.

use crate::core::calendar::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Guest identity as it appears on the booking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guest {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

impl Guest {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        patronymic: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            patronymic: patronymic.into(),
        }
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.surname, self.name, self.patronymic)
    }
}

/// A reservation request
///
/// # Example
/// ```
/// use hotel_simulator_core_rs::{Date, Guest, Order};
///
/// let order = Order::new(
///     "order_00001".to_string(),
///     Date::new(1, 3, 2020),
///     Guest::new("Ivanov", "Ivan", "Ivanovich"),
///     2,                      // quantity
///     Date::new(3, 3, 2020),  // arrival
///     4,                      // nights
///     3500,                   // budget
/// );
///
/// assert_eq!(order.departure_date(), Date::new(7, 3, 2020));
/// assert_eq!(order.lost_revenue(), 7000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Stable identifier assigned at load time
    id: String,

    /// Day the order is handed to the allocator
    booking_date: Date,

    guest: Guest,

    /// Number of people to accommodate
    quantity: u32,

    arrival_date: Date,

    nights: u32,

    /// Budget the guest is willing to pay per night
    budget: i64,

    /// `arrival_date` plus `nights`, day field only
    departure_date: Date,
}

impl Order {
    pub fn new(
        id: String,
        booking_date: Date,
        guest: Guest,
        quantity: u32,
        arrival_date: Date,
        nights: u32,
        budget: i64,
    ) -> Self {
        Self {
            id,
            booking_date,
            guest,
            quantity,
            arrival_date,
            nights,
            budget,
            departure_date: arrival_date.plus_days(nights),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn booking_date(&self) -> Date {
        self.booking_date
    }

    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn arrival_date(&self) -> Date {
        self.arrival_date
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    pub fn departure_date(&self) -> Date {
        self.departure_date
    }

    /// Revenue forfeited when this order is not settled
    ///
    /// Saturates at `i64::MAX`; the loader rejects orders that would.
    pub fn lost_revenue(&self) -> i64 {
        self.budget.saturating_mul(i64::from(self.quantity))
    }
}
