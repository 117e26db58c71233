//! Room model
//!
//! A physical room with a fixed type, capacity and comfort level. The price
//! is derived from the tariffs once at construction.
//!
//! # Booking queue
//!
//! Bookings are kept oldest first. The head is the earliest booking (the
//! current guest or the next one to arrive); the tail is the most recently
//! queued booking and bounds when the room is free for a new arrival.
//! Departure always removes the head.

use crate::models::order::Order;
use crate::tariffs::Tariffs;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing room labels
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("Unknown room type {0:?}")]
    UnknownRoomType(String),

    #[error("Unknown comfort level {0:?}")]
    UnknownComfort(String),
}

/// Room type, which sets the base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    HalfLuxury,
    Luxury,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::HalfLuxury,
        RoomType::Luxury,
    ];
}

impl FromStr for RoomType {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "одноместный" => Ok(RoomType::Single),
            "double" | "двухместный" => Ok(RoomType::Double),
            "half_luxury" | "half-luxury" | "junior_suite" | "полулюкс" => {
                Ok(RoomType::HalfLuxury)
            }
            "luxury" | "suite" | "люкс" => Ok(RoomType::Luxury),
            _ => Err(RoomError::UnknownRoomType(s.to_string())),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::HalfLuxury => "half-luxury",
            RoomType::Luxury => "luxury",
        };
        f.write_str(label)
    }
}

/// Comfort level, which scales the base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comfort {
    Standard,
    Improved,
    Apartment,
}

impl Comfort {
    pub const ALL: [Comfort; 3] = [Comfort::Standard, Comfort::Improved, Comfort::Apartment];
}

impl FromStr for Comfort {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "стандарт" => Ok(Comfort::Standard),
            "improved" | "improved_standard" | "стандарт_улучшенный" => {
                Ok(Comfort::Improved)
            }
            "apartment" | "апартамент" => Ok(Comfort::Apartment),
            _ => Err(RoomError::UnknownComfort(s.to_string())),
        }
    }
}

impl fmt::Display for Comfort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Comfort::Standard => "standard",
            Comfort::Improved => "improved",
            Comfort::Apartment => "apartment",
        };
        f.write_str(label)
    }
}

/// Statistics bucket: every room belongs to one type and one comfort category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Type(RoomType),
    Comfort(Comfort),
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 7] = [
        Category::Type(RoomType::Single),
        Category::Type(RoomType::Double),
        Category::Type(RoomType::HalfLuxury),
        Category::Type(RoomType::Luxury),
        Category::Comfort(Comfort::Standard),
        Category::Comfort(Comfort::Improved),
        Category::Comfort(Comfort::Apartment),
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Type(room_type) => room_type.fmt(f),
            Category::Comfort(comfort) => comfort.fmt(f),
        }
    }
}

/// A hotel room and its booking queue
///
/// # Example
/// ```
/// use hotel_simulator_core_rs::{Comfort, Room, RoomType, Tariffs};
///
/// let room = Room::new("101".to_string(), RoomType::Single, 1, Comfort::Improved, &Tariffs::default());
/// assert_eq!(room.price(), 3480);
/// assert!(room.is_vacant());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room number from the inventory (informational)
    number: String,

    room_type: RoomType,

    /// Party size the room is built for
    capacity: u32,

    comfort: Comfort,

    /// Nightly price, fixed at construction
    price: i64,

    /// Bookings, oldest first
    bookings: VecDeque<Order>,
}

impl Room {
    pub fn new(
        number: String,
        room_type: RoomType,
        capacity: u32,
        comfort: Comfort,
        tariffs: &Tariffs,
    ) -> Self {
        Self {
            number,
            room_type,
            capacity,
            comfort,
            price: tariffs.room_price(room_type, comfort),
            bookings: VecDeque::new(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn comfort(&self) -> Comfort {
        self.comfort
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    /// The two statistics buckets this room counts towards
    pub fn categories(&self) -> [Category; 2] {
        [Category::Type(self.room_type), Category::Comfort(self.comfort)]
    }

    pub fn bookings(&self) -> &VecDeque<Order> {
        &self.bookings
    }

    pub fn is_vacant(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Earliest booking (current or next guest)
    pub fn head_booking(&self) -> Option<&Order> {
        self.bookings.front()
    }

    /// Most recently queued booking
    pub fn last_booking(&self) -> Option<&Order> {
        self.bookings.back()
    }

    /// True if the head guest leaves on `day`
    pub fn check_departure(&self, day: u32) -> bool {
        self.head_booking()
            .is_some_and(|order| order.departure_date().day == day)
    }

    /// Remove the head guest
    pub fn departure(&mut self) -> Option<Order> {
        self.bookings.pop_front()
    }

    /// True if a guest arriving on `arrival_day` does not overlap the last booking
    pub fn accepts_arrival(&self, arrival_day: u32) -> bool {
        self.last_booking()
            .is_none_or(|order| arrival_day >= order.departure_date().day)
    }

    /// True if nobody occupies the room on `day`
    ///
    /// A head booking whose guest has not arrived yet leaves the room available.
    pub fn is_available_on(&self, day: u32) -> bool {
        self.head_booking()
            .is_none_or(|order| order.arrival_date().day > day)
    }

    /// Append a booking to the queue
    pub fn book(&mut self, order: Order) {
        self.bookings.push_back(order);
    }
}
