//! Hotel State
//!
//! Holds the room inventory and every loaded order, and implements the
//! per-day operations the orchestrator drives: eviction, order intake,
//! availability and category load statistics.
//!
//! # Critical Invariants
//!
//! 1. **Occupancy Conservation**: `available + non_available == num_rooms()` every day
//! 2. **Fresh Category Totals**: Category sizes are recomputed from the rooms on
//!    every call; nothing is carried between runs
//! 3. **Fatal Empty Buckets**: A load percentage over a zero-room category is an
//!    error, never a silent default

use crate::allocation::{self, RoomMatch};
use crate::models::order::Order;
use crate::models::room::{Category, Room};
use crate::tariffs::Tariffs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by hotel operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    #[error("Category {0} has no rooms; load percentage is undefined")]
    EmptyCategory(Category),

    #[error("Hotel has no rooms")]
    EmptyHotel,

    #[error("Room index {0} out of range")]
    RoomNotFound(usize),
}

/// Availability counts for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available: usize,
    pub non_available: usize,
}

/// Occupancy of one category on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLoad {
    pub category: Category,
    pub occupied: usize,
    pub total: usize,
    /// `occupied / total × 100`
    pub percent: f64,
}

/// Guest leaving a room
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub room_number: String,
    pub order: Order,
}

/// Complete hotel state
///
/// # Example
///
/// ```rust
/// use hotel_simulator_core_rs::{Comfort, Hotel, Room, RoomType, Tariffs};
///
/// let tariffs = Tariffs::default();
/// let mut hotel = Hotel::new();
/// hotel.add_room(Room::new("1".to_string(), RoomType::Single, 1, Comfort::Standard, &tariffs));
/// hotel.add_room(Room::new("2".to_string(), RoomType::Double, 2, Comfort::Apartment, &tariffs));
///
/// let availability = hotel.check_general_available(1);
/// assert_eq!(availability.available, 2);
/// assert_eq!(availability.non_available, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hotel {
    /// Rooms in inventory order (the allocator's tie-break order)
    rooms: Vec<Room>,

    /// Every loaded order, pending or not, in load order
    orders: Vec<Order>,
}

impl Hotel {
    /// Create an empty hotel
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hotel from loaded rooms and orders
    pub fn with_inventory(rooms: Vec<Room>, orders: Vec<Order>) -> Self {
        Self { rooms, orders }
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    /// Total number of bookings across all room queues
    pub fn num_bookings(&self) -> usize {
        self.rooms.iter().map(|room| room.bookings().len()).sum()
    }

    // ========================================================================
    // Daily operations
    // ========================================================================

    /// Evict every head guest whose departure day is `day`
    ///
    /// Returns the departures in room order.
    pub fn departation_from_all_rooms(&mut self, day: u32) -> Vec<Departure> {
        let mut departures = Vec::new();

        for room in &mut self.rooms {
            if room.check_departure(day) {
                if let Some(order) = room.departure() {
                    departures.push(Departure {
                        room_number: room.number().to_string(),
                        order,
                    });
                }
            }
        }

        departures
    }

    /// Orders to be processed on `day`, in load order
    ///
    /// Selection is by booking day, not arrival day.
    pub fn daily_check_orders(&self, day: u32) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|order| order.booking_date().day == day)
            .cloned()
            .collect()
    }

    /// Most profitable room for `order`, see [`allocation::find_suitable_room`]
    pub fn find_suitable_room(
        &self,
        order: &Order,
        discount: bool,
        tariffs: &Tariffs,
    ) -> Option<RoomMatch> {
        allocation::find_suitable_room(&self.rooms, order, discount, tariffs)
    }

    /// Append `order` to the booking queue of the room at `room_index`
    pub fn book(&mut self, room_index: usize, order: Order) -> Result<(), HotelError> {
        let room = self
            .rooms
            .get_mut(room_index)
            .ok_or(HotelError::RoomNotFound(room_index))?;
        room.book(order);
        Ok(())
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Count available and occupied rooms on `day`
    pub fn check_general_available(&self, day: u32) -> Availability {
        let available = self
            .rooms
            .iter()
            .filter(|room| room.is_available_on(day))
            .count();

        Availability {
            available,
            non_available: self.rooms.len() - available,
        }
    }

    /// Number of rooms in each category, zero entries included
    pub fn count_every_category(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|category| (*category, 0)).collect();

        for room in &self.rooms {
            for category in room.categories() {
                *counts.entry(category).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Check that every statistic of a day is defined
    ///
    /// # Errors
    ///
    /// - `HotelError::EmptyHotel` if there are no rooms
    /// - `HotelError::EmptyCategory` for the first category with no rooms
    pub fn check_statistics_defined(&self) -> Result<(), HotelError> {
        if self.rooms.is_empty() {
            return Err(HotelError::EmptyHotel);
        }

        match self.count_every_category().into_iter().find(|(_, total)| *total == 0) {
            Some((category, _)) => Err(HotelError::EmptyCategory(category)),
            None => Ok(()),
        }
    }

    /// Occupancy percentage of every category on `day`
    ///
    /// # Errors
    ///
    /// `HotelError::EmptyCategory` if any category has no rooms.
    pub fn check_general_category_load(&self, day: u32) -> Result<Vec<CategoryLoad>, HotelError> {
        let totals = self.count_every_category();

        let mut occupied: BTreeMap<Category, usize> = BTreeMap::new();
        for room in self.rooms.iter().filter(|room| !room.is_available_on(day)) {
            for category in room.categories() {
                *occupied.entry(category).or_insert(0) += 1;
            }
        }

        Category::ALL
            .iter()
            .map(|category| {
                let total = totals.get(category).copied().unwrap_or(0);
                if total == 0 {
                    return Err(HotelError::EmptyCategory(*category));
                }
                let occupied = occupied.get(category).copied().unwrap_or(0);
                Ok(CategoryLoad {
                    category: *category,
                    occupied,
                    total,
                    percent: occupied as f64 / total as f64 * 100.0,
                })
            })
            .collect()
    }

    /// Occupancy percentage of the whole hotel on `day`
    pub fn total_load_percent(&self, day: u32) -> Result<f64, HotelError> {
        if self.rooms.is_empty() {
            return Err(HotelError::EmptyHotel);
        }
        let availability = self.check_general_available(day);
        Ok(availability.non_available as f64 / self.rooms.len() as f64 * 100.0)
    }
}
