//! Calendar and date handling

pub mod calendar;

pub use calendar::{Date, DateParseError, SimulationCalendar};
