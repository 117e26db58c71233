//! Input loaders
//!
//! Parse the two whitespace-separated inventory files into domain types.
//!
//! ```text
//! rooms:   <number> <type> <capacity> <comfort>
//! orders:  <booking DD.MM.YYYY> <surname> <name> <patronymic> <quantity> <arrival DD.MM.YYYY> <nights> <budget>
//! ```
//!
//! Blank lines are skipped. Any other malformed line aborts loading with an
//! `InputError` naming the 1-based line number.

use crate::core::calendar::{Date, DateParseError};
use crate::models::hotel::Hotel;
use crate::models::order::{Guest, Order};
use crate::models::room::{Comfort, Room, RoomError, RoomType};
use crate::tariffs::Tariffs;
use std::str::FromStr;
use thiserror::Error;

const ROOM_FIELDS: usize = 4;
const ORDER_FIELDS: usize = 8;

/// Malformed input data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {field} is not a valid number: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {source}")]
    InvalidDate {
        line: usize,
        #[source]
        source: DateParseError,
    },

    #[error("line {line}: {field} is out of range")]
    OutOfRange { line: usize, field: &'static str },

    #[error("line {line}: {source}")]
    UnknownLabel {
        line: usize,
        #[source]
        source: RoomError,
    },
}

/// Parse the room inventory
///
/// Prices are fixed from `tariffs` as each room is built.
///
/// # Example
///
/// ```
/// use hotel_simulator_core_rs::loader::parse_rooms;
/// use hotel_simulator_core_rs::{RoomType, Tariffs};
///
/// let rooms = parse_rooms("1 single 1 standard\n2 double 2 apartment\n", &Tariffs::default()).unwrap();
/// assert_eq!(rooms.len(), 2);
/// assert_eq!(rooms[1].room_type(), RoomType::Double);
/// assert_eq!(rooms[1].price(), 3450);
/// ```
pub fn parse_rooms(text: &str, tariffs: &Tariffs) -> Result<Vec<Room>, InputError> {
    rows(text, ROOM_FIELDS)
        .map(|row| {
            let (line, fields) = row?;
            let room_type = parse_label::<RoomType>(line, fields[1])?;
            let capacity = parse_number(line, "capacity", fields[2])?;
            let comfort = parse_label::<Comfort>(line, fields[3])?;
            Ok(Room::new(
                fields[0].to_string(),
                room_type,
                capacity,
                comfort,
                tariffs,
            ))
        })
        .collect()
}

/// Parse guest orders
///
/// Orders get sequential IDs (`order_00001`, ...) in file order.
///
/// The departure day and `budget × quantity` must fit their integer types,
/// and the budget must not be negative.
pub fn parse_orders(text: &str) -> Result<Vec<Order>, InputError> {
    rows(text, ORDER_FIELDS)
        .enumerate()
        .map(|(index, row)| {
            let (line, fields) = row?;
            let booking_date = parse_date(line, fields[0])?;
            let quantity: u32 = parse_number(line, "quantity", fields[4])?;
            let arrival_date = parse_date(line, fields[5])?;
            let nights = parse_number(line, "nights", fields[6])?;
            let budget: i64 = parse_number(line, "budget", fields[7])?;

            if arrival_date.checked_plus_days(nights).is_none() {
                return Err(InputError::OutOfRange {
                    line,
                    field: "nights",
                });
            }
            if budget < 0 || budget.checked_mul(i64::from(quantity)).is_none() {
                return Err(InputError::OutOfRange {
                    line,
                    field: "budget",
                });
            }

            Ok(Order::new(
                format!("order_{:05}", index + 1),
                booking_date,
                Guest::new(fields[1], fields[2], fields[3]),
                quantity,
                arrival_date,
                nights,
                budget,
            ))
        })
        .collect()
}

/// Build a hotel from the text of both input files
pub fn load_hotel(rooms_text: &str, orders_text: &str, tariffs: &Tariffs) -> Result<Hotel, InputError> {
    let rooms = parse_rooms(rooms_text, tariffs)?;
    let orders = parse_orders(orders_text)?;
    Ok(Hotel::with_inventory(rooms, orders))
}

/// Non-blank lines split on whitespace, checked for field count
fn rows<'a>(
    text: &'a str,
    expected: usize,
) -> impl Iterator<Item = Result<(usize, Vec<&'a str>), InputError>> + 'a {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(move |(index, raw)| {
            let line = index + 1;
            let fields: Vec<&str> = raw.split_whitespace().collect();
            if fields.len() != expected {
                return Err(InputError::FieldCount {
                    line,
                    expected,
                    found: fields.len(),
                });
            }
            Ok((line, fields))
        })
}

fn parse_number<T: FromStr>(line: usize, field: &'static str, value: &str) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_date(line: usize, value: &str) -> Result<Date, InputError> {
    value
        .parse()
        .map_err(|source| InputError::InvalidDate { line, source })
}

fn parse_label<T: FromStr<Err = RoomError>>(line: usize, value: &str) -> Result<T, InputError> {
    value
        .parse()
        .map_err(|source| InputError::UnknownLabel { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let err = parse_rooms("1 single 1 standard\n\n3 single x standard\n", &Tariffs::default())
            .unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                line: 3,
                field: "capacity",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let text = "01.03.2020 A B C 1 02.03.2020 2 3000\n\
                    02.03.2020 D E F 2 05.03.2020 1 4000\n";
        let orders = parse_orders(text).unwrap();
        assert_eq!(orders[0].id(), "order_00001");
        assert_eq!(orders[1].id(), "order_00002");
    }
}
