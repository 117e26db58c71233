//! Price tables
//!
//! Room price = base price of the room type × comfort multiplier.
//! Multipliers are integer percentages so every price stays an exact `i64`.
//!
//! CRITICAL: All money values are i64 (whole currency units)

use crate::models::room::{Comfort, RoomType};
use serde::{Deserialize, Serialize};

/// Meal plan sold on top of the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealPlan {
    Without,
    Breakfast,
    HalfBoard,
}

/// Nightly base price per room type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasePrices {
    pub single: i64,
    pub double: i64,
    pub half_luxury: i64,
    pub luxury: i64,
}

impl Default for BasePrices {
    fn default() -> Self {
        Self {
            single: 2900,
            double: 2300,
            half_luxury: 3200,
            luxury: 4100,
        }
    }
}

/// Comfort multipliers in percent (100 = ×1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortMultipliers {
    pub standard: i64,
    pub improved: i64,
    pub apartment: i64,
}

impl Default for ComfortMultipliers {
    fn default() -> Self {
        Self {
            standard: 100,
            improved: 120,
            apartment: 150,
        }
    }
}

/// Per-person meal prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealPrices {
    pub breakfast: i64,
    pub half_board: i64,
}

impl Default for MealPrices {
    fn default() -> Self {
        Self {
            breakfast: 280,
            half_board: 1000,
        }
    }
}

/// Complete tariff configuration
///
/// # Example
/// ```
/// use hotel_simulator_core_rs::{Comfort, RoomType, Tariffs};
///
/// let tariffs = Tariffs::default();
/// assert_eq!(tariffs.room_price(RoomType::Single, Comfort::Standard), 2900);
/// assert_eq!(tariffs.room_price(RoomType::Double, Comfort::Improved), 2760);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariffs {
    pub base_prices: BasePrices,
    pub comfort_multipliers: ComfortMultipliers,
    pub meals: MealPrices,
}

impl Tariffs {
    pub fn base_price(&self, room_type: RoomType) -> i64 {
        match room_type {
            RoomType::Single => self.base_prices.single,
            RoomType::Double => self.base_prices.double,
            RoomType::HalfLuxury => self.base_prices.half_luxury,
            RoomType::Luxury => self.base_prices.luxury,
        }
    }

    pub fn comfort_multiplier_pct(&self, comfort: Comfort) -> i64 {
        match comfort {
            Comfort::Standard => self.comfort_multipliers.standard,
            Comfort::Improved => self.comfort_multipliers.improved,
            Comfort::Apartment => self.comfort_multipliers.apartment,
        }
    }

    pub fn meal_price(&self, meal: MealPlan) -> i64 {
        match meal {
            MealPlan::Without => 0,
            MealPlan::Breakfast => self.meals.breakfast,
            MealPlan::HalfBoard => self.meals.half_board,
        }
    }

    /// Nightly price of a room with the given type and comfort
    ///
    /// Integer division truncates any fractional remainder.
    pub fn room_price(&self, room_type: RoomType, comfort: Comfort) -> i64 {
        self.base_price(room_type) * self.comfort_multiplier_pct(comfort) / 100
    }

    /// Check that every price and multiplier is usable
    pub fn validate(&self) -> Result<(), String> {
        for room_type in RoomType::ALL {
            if self.base_price(room_type) <= 0 {
                return Err(format!("base price for {} must be > 0", room_type));
            }
        }
        for comfort in Comfort::ALL {
            if self.comfort_multiplier_pct(comfort) <= 0 {
                return Err(format!("multiplier for {} must be > 0", comfort));
            }
        }
        if self.meals.breakfast < 0 || self.meals.half_board < 0 {
            return Err("meal prices must not be negative".to_string());
        }
        Ok(())
    }
}
