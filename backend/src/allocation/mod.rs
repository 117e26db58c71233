//! Allocation Module
//!
//! Matches orders to rooms:
//! - Greedy single pass choosing the most profitable candidate room
//! - Meal upsell from budget left over after the room price
//! - Two-pass protocol: exact capacity at full price, then any capacity at a
//!   lowered budget floor
//!
//! # Example
//!
//! ```rust
//! use hotel_simulator_core_rs::allocation;
//! use hotel_simulator_core_rs::{Comfort, Date, Guest, Order, Room, RoomType, Tariffs};
//!
//! let tariffs = Tariffs::default();
//! let rooms = vec![Room::new("7".to_string(), RoomType::Single, 1, Comfort::Standard, &tariffs)];
//!
//! // Party of two, no double room: only the discount pass can place them
//! let order = Order::new(
//!     "order_00001".to_string(),
//!     Date::new(1, 3, 2020),
//!     Guest::new("Sidorov", "Sidor", "Sidorovich"),
//!     2,
//!     Date::new(2, 3, 2020),
//!     3,
//!     2500,
//! );
//!
//! assert!(allocation::find_suitable_room(&rooms, &order, false, &tariffs).is_none());
//! let found = allocation::allocate(&rooms, &order, &tariffs).unwrap();
//! assert!(found.discounted);
//! assert_eq!(found.profit, 2900 * 2);
//! ```

pub mod greedy;

// Re-export public API
pub use greedy::{
    allocate, find_suitable_room, is_candidate, meal_upsell, meets_budget_floor, RoomMatch,
    DISCOUNT_FLOOR_PCT,
};
