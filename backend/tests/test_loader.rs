//! Tests for room and order file parsing

use hotel_simulator_core_rs::loader::{parse_orders, parse_rooms};
use hotel_simulator_core_rs::{
    load_hotel, Comfort, Date, InputError, RoomError, RoomType, Tariffs,
};

const ROOMS: &str = "\
101 single 1 standard
102 double 2 improved

201 half_luxury 2 apartment
301 luxury 3 standard
";

const ORDERS: &str = "\
01.03.2020 Ivanov Ivan Ivanovich 1 02.03.2020 3 3500
01.03.2020 Petrova Anna Sergeevna 2 01.03.2020 1 2400
04.03.2020 Sidorov Petr Nikolaevich 3 05.03.2020 2 6000
";

#[test]
fn test_parse_rooms() {
    let rooms = parse_rooms(ROOMS, &Tariffs::default()).unwrap();

    assert_eq!(rooms.len(), 4);
    assert_eq!(rooms[0].number(), "101");
    assert_eq!(rooms[2].room_type(), RoomType::HalfLuxury);
    assert_eq!(rooms[2].comfort(), Comfort::Apartment);
    assert_eq!(rooms[2].capacity(), 2);
    assert_eq!(rooms[2].price(), 4800);
    assert!(rooms.iter().all(|room| room.is_vacant()));
}

#[test]
fn test_parse_rooms_with_russian_labels() {
    let rooms = parse_rooms("7 люкс 3 апартамент\n", &Tariffs::default()).unwrap();
    assert_eq!(rooms[0].room_type(), RoomType::Luxury);
    assert_eq!(rooms[0].price(), 6150);
}

#[test]
fn test_parse_orders() {
    let orders = parse_orders(ORDERS).unwrap();

    assert_eq!(orders.len(), 3);

    let first = &orders[0];
    assert_eq!(first.id(), "order_00001");
    assert_eq!(first.booking_date(), Date::new(1, 3, 2020));
    assert_eq!(first.guest().to_string(), "Ivanov Ivan Ivanovich");
    assert_eq!(first.quantity(), 1);
    assert_eq!(first.arrival_date(), Date::new(2, 3, 2020));
    assert_eq!(first.nights(), 3);
    assert_eq!(first.budget(), 3500);
    assert_eq!(first.departure_date(), Date::new(5, 3, 2020));

    assert_eq!(orders[2].id(), "order_00003");
}

#[test]
fn test_load_hotel() {
    let hotel = load_hotel(ROOMS, ORDERS, &Tariffs::default()).unwrap();
    assert_eq!(hotel.num_rooms(), 4);
    assert_eq!(hotel.num_orders(), 3);
    assert_eq!(hotel.daily_check_orders(1).len(), 2);
    assert_eq!(hotel.daily_check_orders(4).len(), 1);
}

#[test]
fn test_wrong_field_count() {
    let err = parse_rooms("101 single 1\n", &Tariffs::default()).unwrap_err();
    assert_eq!(
        err,
        InputError::FieldCount {
            line: 1,
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn test_unknown_room_type() {
    let err = parse_rooms("101 single 1 standard\n102 penthouse 2 standard\n", &Tariffs::default())
        .unwrap_err();
    assert_eq!(
        err,
        InputError::UnknownLabel {
            line: 2,
            source: RoomError::UnknownRoomType("penthouse".to_string())
        }
    );
}

#[test]
fn test_invalid_order_date() {
    let err = parse_orders("1.3.2020 A B C 1 2020-03-02 3 3500\n").unwrap_err();
    assert!(matches!(err, InputError::InvalidDate { line: 1, .. }));
}

#[test]
fn test_invalid_budget() {
    let err = parse_orders("01.03.2020 A B C 1 02.03.2020 3 lots\n").unwrap_err();
    assert_eq!(
        err,
        InputError::InvalidNumber {
            line: 1,
            field: "budget",
            value: "lots".to_string()
        }
    );
}

#[test]
fn test_negative_quantity_rejected() {
    let err = parse_orders("01.03.2020 A B C -1 02.03.2020 3 3500\n").unwrap_err();
    assert!(matches!(
        err,
        InputError::InvalidNumber {
            field: "quantity",
            ..
        }
    ));
}

#[test]
fn test_error_message_names_line() {
    let err = parse_rooms("\n\n101 single x standard\n", &Tariffs::default()).unwrap_err();
    assert!(err.to_string().starts_with("line 3:"));
}

#[test]
fn test_departure_day_overflow_rejected() {
    let err = parse_orders("01.03.2020 A B C 1 02.03.2020 4294967295 3000\n").unwrap_err();
    assert_eq!(
        err,
        InputError::OutOfRange {
            line: 1,
            field: "nights"
        }
    );
}

#[test]
fn test_budget_times_quantity_overflow_rejected() {
    let err = parse_orders("01.03.2020 A B C 5 02.03.2020 1 9223372036854775807\n").unwrap_err();
    assert_eq!(
        err,
        InputError::OutOfRange {
            line: 1,
            field: "budget"
        }
    );
}

#[test]
fn test_largest_single_guest_budget_accepted() {
    let orders = parse_orders("01.03.2020 A B C 1 02.03.2020 1 9223372036854775807\n").unwrap();
    assert_eq!(orders[0].lost_revenue(), i64::MAX);
}

#[test]
fn test_negative_budget_rejected() {
    let err = parse_orders("01.03.2020 A B C 1 02.03.2020 1 -3000\n").unwrap_err();
    assert_eq!(
        err,
        InputError::OutOfRange {
            line: 1,
            field: "budget"
        }
    );
}
