//! Domain models for the hotel simulator

pub mod event;
pub mod hotel;
pub mod order;
pub mod room;

// Re-exports
pub use event::{Event, EventLog};
pub use hotel::{Availability, CategoryLoad, Departure, Hotel, HotelError};
pub use order::{Guest, Order};
pub use room::{Category, Comfort, Room, RoomError, RoomType};
