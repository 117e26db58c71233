//! Greedy Room Allocation
//!
//! One pass over the room inventory picks the room that earns the most from
//! an order.
//!
//! # Candidate Rules
//!
//! A room is a candidate only if all of these hold:
//! 1. **No overlap**: the room has no bookings, or the order arrives on or
//!    after the departure day of the room's most recent booking
//! 2. **Capacity**: party size equals room capacity (skipped in the discount pass)
//! 3. **Budget floor**: budget covers the room price (70% of it in the discount pass)
//!
//! # Profit
//!
//! Meals are upsold from the budget left over after the room price, always at
//! full room and meal prices (the discount only lowers the budget floor):
//!
//! ```text
//! budget >= price + half_board  →  (price + half_board) × quantity
//! budget >= price + breakfast   →  (price + breakfast)  × quantity
//! otherwise                     →   price               × quantity
//! ```
//!
//! A room replaces the current best only with strictly greater profit, so
//! ties go to the earliest room in inventory order.

use crate::models::order::Order;
use crate::models::room::Room;
use crate::tariffs::{MealPlan, Tariffs};
use serde::{Deserialize, Serialize};

/// Share of the room price a discounted order must cover, in percent
pub const DISCOUNT_FLOOR_PCT: i64 = 70;

/// Room chosen for an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMatch {
    /// Index into the hotel's room list
    pub room_index: usize,

    pub room_number: String,

    /// Revenue from settling the order in this room
    pub profit: i64,

    /// Meal plan included in `profit`
    pub meal: MealPlan,

    /// True if found by the discount pass
    pub discounted: bool,
}

/// Find the most profitable room for `order`
///
/// Returns `None` when no room passes the candidate rules.
///
/// # Example
///
/// ```rust
/// use hotel_simulator_core_rs::allocation::find_suitable_room;
/// use hotel_simulator_core_rs::{Comfort, Date, Guest, MealPlan, Order, Room, RoomType, Tariffs};
///
/// let tariffs = Tariffs::default();
/// let rooms = vec![Room::new("1".to_string(), RoomType::Single, 1, Comfort::Standard, &tariffs)];
/// let order = Order::new(
///     "order_00001".to_string(),
///     Date::new(1, 3, 2020),
///     Guest::new("Ivanov", "Ivan", "Ivanovich"),
///     1,
///     Date::new(1, 3, 2020),
///     2,
///     3500,
/// );
///
/// let found = find_suitable_room(&rooms, &order, false, &tariffs).unwrap();
/// assert_eq!(found.meal, MealPlan::Breakfast);
/// assert_eq!(found.profit, 3180);
/// ```
pub fn find_suitable_room(
    rooms: &[Room],
    order: &Order,
    discount: bool,
    tariffs: &Tariffs,
) -> Option<RoomMatch> {
    let mut max_profit = 0;
    let mut best = None;

    for (room_index, room) in rooms.iter().enumerate() {
        if !is_candidate(room, order, discount) {
            continue;
        }

        let Some((meal, profit)) = meal_upsell(room.price(), order, tariffs) else {
            continue;
        };

        if profit > max_profit {
            max_profit = profit;
            best = Some(RoomMatch {
                room_index,
                room_number: room.number().to_string(),
                profit,
                meal,
                discounted: discount,
            });
        }
    }

    best
}

/// Full-price pass first, discount pass only if it finds nothing
pub fn allocate(rooms: &[Room], order: &Order, tariffs: &Tariffs) -> Option<RoomMatch> {
    find_suitable_room(rooms, order, false, tariffs)
        .or_else(|| find_suitable_room(rooms, order, true, tariffs))
}

/// Check the three candidate rules
pub fn is_candidate(room: &Room, order: &Order, discount: bool) -> bool {
    room.accepts_arrival(order.arrival_date().day)
        && (discount || order.quantity() == room.capacity())
        && meets_budget_floor(order.budget(), room.price(), discount)
}

/// `budget >= price`, or `budget >= 70% of price` when discounted
pub fn meets_budget_floor(budget: i64, price: i64, discount: bool) -> bool {
    if discount {
        // Widened so budgets near i64::MAX compare exactly
        i128::from(budget) * 100 >= i128::from(price) * i128::from(DISCOUNT_FLOOR_PCT)
    } else {
        budget >= price
    }
}

/// Richest meal plan the budget covers and the resulting profit
///
/// `None` if that profit does not fit in an `i64`.
pub fn meal_upsell(price: i64, order: &Order, tariffs: &Tariffs) -> Option<(MealPlan, i64)> {
    let quantity = i64::from(order.quantity());

    for meal in [MealPlan::HalfBoard, MealPlan::Breakfast] {
        let Some(per_person) = price.checked_add(tariffs.meal_price(meal)) else {
            continue;
        };
        if order.budget() >= per_person {
            return per_person.checked_mul(quantity).map(|profit| (meal, profit));
        }
    }

    price
        .checked_mul(quantity)
        .map(|profit| (MealPlan::Without, profit))
}
