//! Calendar management for the simulation
//!
//! The simulation advances one calendar day at a time over a fixed window
//! of a single month. Dates carry no validation: day arithmetic is plain
//! field addition, so a departure day may run past the end of the month.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a `DD.MM.YYYY` string cannot be parsed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected a DD.MM.YYYY date, got {0:?}")]
pub struct DateParseError(pub String);

/// Calendar date as a plain (day, month, year) triple
///
/// # Example
/// ```
/// use hotel_simulator_core_rs::Date;
///
/// let arrival: Date = "28.03.2020".parse().unwrap();
/// let departure = arrival.plus_days(5);
///
/// // No month rollover: day 33 of March
/// assert_eq!(departure.day, 33);
/// assert_eq!(departure.month, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl Date {
    /// Create a date from its parts
    pub fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }

    /// Date `days` later, adding to the day field only
    ///
    /// Month and year are copied unchanged. The day saturates at `u32::MAX`;
    /// use [`Date::checked_plus_days`] to detect that.
    pub fn plus_days(&self, days: u32) -> Self {
        Self {
            day: self.day.saturating_add(days),
            month: self.month,
            year: self.year,
        }
    }

    /// Date `days` later, or `None` if the day field would overflow
    pub fn checked_plus_days(&self, days: u32) -> Option<Self> {
        Some(Self {
            day: self.day.checked_add(days)?,
            month: self.month,
            year: self.year,
        })
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut field = || {
            parts
                .next()
                .and_then(|p| p.parse::<u32>().ok())
                .ok_or_else(|| DateParseError(s.to_string()))
        };

        let day = field()?;
        let month = field()?;
        let year = field()?;

        if parts.next().is_some() {
            return Err(DateParseError(s.to_string()));
        }

        Ok(Self { day, month, year })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// Day cursor over the simulated window
///
/// # Example
/// ```
/// use hotel_simulator_core_rs::SimulationCalendar;
///
/// let mut calendar = SimulationCalendar::new(1, 30, 3, 2020);
/// assert_eq!(calendar.current_day(), 1);
///
/// calendar.advance_day();
/// assert_eq!(calendar.current_day(), 2);
/// assert_eq!(calendar.current_date().to_string(), "02.03.2020");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationCalendar {
    current_day: u32,
    last_day: u32,
    month: u32,
    year: u32,
}

impl SimulationCalendar {
    /// Create a calendar positioned at `first_day`
    ///
    /// # Panics
    /// Panics if `first_day` is zero or after `last_day`
    pub fn new(first_day: u32, last_day: u32, month: u32, year: u32) -> Self {
        assert!(first_day > 0, "first_day must be positive");
        assert!(first_day <= last_day, "first_day must not be after last_day");
        Self {
            current_day: first_day,
            last_day,
            month,
            year,
        }
    }

    /// Move to the next day
    pub fn advance_day(&mut self) {
        self.current_day += 1;
    }

    /// Day of month currently being simulated
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Full date currently being simulated
    pub fn current_date(&self) -> Date {
        Date::new(self.current_day, self.month, self.year)
    }

    /// Last day of the window (inclusive)
    pub fn last_day(&self) -> u32 {
        self.last_day
    }

    /// True once every day of the window has been simulated
    pub fn is_finished(&self) -> bool {
        self.current_day > self.last_day
    }
}
