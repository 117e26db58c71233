//! Integration tests for the Orchestrator daily loop
//!
//! These tests drive complete days: departures, order intake, allocation,
//! guest decline and statistics.

use hotel_simulator_core_rs::{
    loader, policy::DeclinePolicy, Category, Comfort, Date, DeclineConfig, Event, Guest, Hotel,
    InputError, Order, Orchestrator, RngManager, Room, RoomType, SimulationConfig, SimulationError,
    Tariffs,
};

/// One room of every type, covering every comfort level
const ROOMS: &str = "\
1 single 1 standard
2 double 2 standard
3 half_luxury 2 improved
4 luxury 3 apartment
";

fn config(decline: DeclineConfig, last_day: u32) -> SimulationConfig {
    SimulationConfig {
        rng_seed: 42,
        first_day: 1,
        last_day,
        decline,
        ..SimulationConfig::default()
    }
}

fn orchestrator(orders: &str, decline: DeclineConfig, last_day: u32) -> Orchestrator {
    let config = config(decline, last_day);
    let hotel = loader::load_hotel(ROOMS, orders, &config.tariffs).unwrap();
    Orchestrator::new(config, hotel).unwrap()
}

#[test]
fn test_single_settlement() {
    let mut orchestrator = orchestrator(
        "01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 2 3500\n",
        DeclineConfig::Never,
        1,
    );

    let report = orchestrator.tick().unwrap();

    assert_eq!(report.day, 1);
    assert_eq!(report.date, Date::new(1, 3, 2020));
    assert_eq!(report.settled, 1);
    assert_eq!(report.revenue, 3180);
    assert_eq!(report.lost_revenue, 0);
    assert_eq!(report.availability.non_available, 1);
    assert!((report.total_load_percent - 25.0).abs() < 1e-9);

    let room = orchestrator.hotel().room(0).unwrap();
    assert_eq!(room.bookings().len(), 1);

    let settlements = orchestrator.event_log().events_of_type("Settlement");
    assert_eq!(settlements.len(), 1);
    match settlements[0] {
        Event::Settlement {
            room_number,
            profit,
            discounted,
            ..
        } => {
            assert_eq!(room_number, "1");
            assert_eq!(*profit, 3180);
            assert!(!discounted);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_declined_order_loses_revenue() {
    let mut orchestrator = orchestrator(
        "01.03.2020 Ivanov Ivan Ivanovich 2 01.03.2020 2 3000\n",
        DeclineConfig::Always,
        1,
    );

    let report = orchestrator.tick().unwrap();

    assert_eq!(report.declined, 1);
    assert_eq!(report.revenue, 0);
    assert_eq!(report.lost_revenue, 6000);
    assert_eq!(orchestrator.hotel().num_bookings(), 0);
    assert_eq!(orchestrator.event_log().events_of_type("Declined").len(), 1);
}

#[test]
fn test_unmatched_order_loses_revenue() {
    let mut orchestrator = orchestrator(
        "01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 2 1000\n",
        DeclineConfig::Never,
        1,
    );

    let report = orchestrator.tick().unwrap();

    assert_eq!(report.unmatched, 1);
    assert_eq!(report.lost_revenue, 1000);
    assert_eq!(
        orchestrator.event_log().events_of_type("NoSuitableRoom").len(),
        1
    );
}

#[test]
fn test_orders_processed_on_booking_day() {
    let mut orchestrator = orchestrator(
        "02.03.2020 Ivanov Ivan Ivanovich 1 05.03.2020 2 3500\n",
        DeclineConfig::Never,
        6,
    );

    let day1 = orchestrator.tick().unwrap();
    assert_eq!(day1.settled, 0);

    let day2 = orchestrator.tick().unwrap();
    assert_eq!(day2.settled, 1);
    // Booked but not yet arrived
    assert_eq!(day2.availability.non_available, 0);

    for _ in 3..5 {
        orchestrator.tick().unwrap();
    }
    let day5 = orchestrator.tick().unwrap();
    assert_eq!(day5.day, 5);
    assert_eq!(day5.availability.non_available, 1);
}

#[test]
fn test_guest_departs_and_room_is_reused() {
    let orders = "\
01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 2 3000
03.03.2020 Petrov Petr Petrovich 1 03.03.2020 1 3000
";
    let mut orchestrator = orchestrator(orders, DeclineConfig::Never, 4);

    orchestrator.tick().unwrap();
    orchestrator.tick().unwrap();
    let day3 = orchestrator.tick().unwrap();

    assert_eq!(day3.departures, 1);
    assert_eq!(day3.settled, 1);
    assert_eq!(day3.availability.non_available, 1);

    let departures = orchestrator.event_log().events_of_type("Departure");
    assert_eq!(departures.len(), 1);
    assert_eq!(departures[0].day(), 3);
    assert_eq!(departures[0].order_id(), Some("order_00001"));

    let day4 = orchestrator.tick().unwrap();
    assert_eq!(day4.departures, 1);
    assert_eq!(orchestrator.hotel().num_bookings(), 0);
}

#[test]
fn test_second_order_uses_discount_when_exact_room_taken() {
    let orders = "\
01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 3 3000
01.03.2020 Petrov Petr Petrovich 1 01.03.2020 3 3000
";
    let mut orchestrator = orchestrator(orders, DeclineConfig::Never, 1);

    let report = orchestrator.tick().unwrap();
    assert_eq!(report.settled, 2);

    let discounted: Vec<bool> = orchestrator
        .event_log()
        .events_of_type("Settlement")
        .iter()
        .map(|event| match event {
            Event::Settlement { discounted, .. } => *discounted,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(discounted, vec![false, true]);
}

#[test]
fn test_end_of_day_event_every_day() {
    let mut orchestrator = orchestrator("", DeclineConfig::Never, 5);

    let report = orchestrator.run().unwrap();

    assert_eq!(report.days.len(), 5);
    assert_eq!(orchestrator.event_log().events_of_type("EndOfDay").len(), 5);
    assert!(orchestrator.is_finished());
}

#[test]
fn test_run_totals_match_days() {
    let orders = "\
01.03.2020 A A A 1 01.03.2020 2 3500
01.03.2020 B B B 2 02.03.2020 2 2500
02.03.2020 C C C 3 04.03.2020 1 5000
03.03.2020 D D D 1 03.03.2020 1 500
";
    let mut orchestrator = orchestrator(orders, DeclineConfig::default(), 5);

    let report = orchestrator.run().unwrap();

    let revenue: i64 = report.days.iter().map(|day| day.revenue).sum();
    let lost: i64 = report.days.iter().map(|day| day.lost_revenue).sum();
    assert_eq!(report.totals.total_revenue, revenue);
    assert_eq!(report.totals.total_lost_revenue, lost);
    assert_eq!(report.totals.total_orders(), 4);
    assert_eq!(report.events.len(), orchestrator.event_count());
    assert!(!report.run_id.is_empty());
}

#[test]
fn test_same_seed_same_run() {
    let mut orders = String::new();
    for day in 1..=10 {
        for guest in 0..4 {
            orders.push_str(&format!(
                "{:02}.03.2020 G{} N P {} {:02}.03.2020 {} {}\n",
                day,
                guest,
                1 + guest % 3,
                day + guest % 2,
                1 + guest,
                2500 + 600 * guest
            ));
        }
    }

    let run = |seed: u64| {
        let config = SimulationConfig {
            rng_seed: seed,
            last_day: 12,
            ..SimulationConfig::default()
        };
        let hotel = loader::load_hotel(ROOMS, &orders, &config.tariffs).unwrap();
        Orchestrator::new(config, hotel).unwrap().run().unwrap()
    };

    let a = run(7);
    let b = run(7);

    assert_eq!(a.days, b.days);
    assert_eq!(a.events, b.events);
    assert_eq!(a.totals, b.totals);
    assert_ne!(a.run_id, b.run_id);
}

#[test]
fn test_missing_category_is_fatal() {
    let config = config(DeclineConfig::Never, 3);
    let hotel = loader::load_hotel("1 single 1 standard\n", "", &config.tariffs).unwrap();
    let mut orchestrator = Orchestrator::new(config, hotel).unwrap();

    assert_eq!(
        orchestrator.tick(),
        Err(SimulationError::EmptyCategory(Category::Type(RoomType::Double)))
    );
}

#[test]
fn test_failed_day_changes_nothing() {
    let orders = "01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 2 3500\n";
    let mut orchestrator = Orchestrator::from_text(
        config(DeclineConfig::Never, 3),
        "1 single 1 standard\n",
        orders,
    )
    .unwrap();

    for _ in 0..2 {
        assert_eq!(
            orchestrator.tick(),
            Err(SimulationError::EmptyCategory(Category::Type(RoomType::Double)))
        );
        assert_eq!(orchestrator.current_day(), 1);
        assert_eq!(orchestrator.hotel().num_bookings(), 0);
        assert_eq!(orchestrator.event_count(), 0);
        assert_eq!(orchestrator.totals().total_orders(), 0);
    }
}

#[test]
fn test_from_text_reports_malformed_input() {
    let result = Orchestrator::from_text(
        config(DeclineConfig::Never, 1),
        ROOMS,
        "01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 2\n",
    );

    assert_eq!(
        result.unwrap_err(),
        SimulationError::MalformedInput(InputError::FieldCount {
            line: 1,
            expected: 8,
            found: 7
        })
    );
}

#[test]
fn test_from_text_reports_out_of_range_budget() {
    let result = Orchestrator::from_text(
        config(DeclineConfig::Never, 1),
        ROOMS,
        "01.03.2020 Ivanov Ivan Ivanovich 5 01.03.2020 2 9223372036854775807\n",
    );

    assert!(matches!(
        result,
        Err(SimulationError::MalformedInput(InputError::OutOfRange {
            field: "budget",
            ..
        }))
    ));
}

#[test]
fn test_extreme_budget_day_settles() {
    let tariffs = Tariffs::default();
    let mut hotel = loader::load_hotel(ROOMS, "", &tariffs).unwrap();
    hotel.add_order(Order::new(
        "rich".to_string(),
        Date::new(1, 3, 2020),
        Guest::new("Morozov", "Ivan", "Petrovich"),
        5,
        Date::new(1, 3, 2020),
        2,
        i64::MAX,
    ));

    let mut orchestrator = Orchestrator::new(config(DeclineConfig::Never, 1), hotel).unwrap();
    let report = orchestrator.tick().unwrap();

    // No room sleeps five, so the discount pass picks the luxury apartment
    assert_eq!(report.settled, 1);
    assert_eq!(report.revenue, (6150 + 1000) * 5);
    assert_eq!(report.lost_revenue, 0);
}

#[test]
fn test_custom_decline_policy() {
    /// Declines parties larger than one
    struct GroupsDecline;

    impl DeclinePolicy for GroupsDecline {
        fn declines(&mut self, order: &Order, _rng: &mut RngManager) -> bool {
            order.quantity() > 1
        }
    }

    let tariffs = Tariffs::default();
    let mut hotel = loader::load_hotel(ROOMS, "", &tariffs).unwrap();
    for (id, quantity) in [("solo", 1), ("pair", 2)] {
        hotel.add_order(Order::new(
            id.to_string(),
            Date::new(1, 3, 2020),
            Guest::new("Kuznetsov", "Ilya", "Olegovich"),
            quantity,
            Date::new(1, 3, 2020),
            1,
            5000,
        ));
    }

    let mut orchestrator = Orchestrator::with_decline_policy(
        config(DeclineConfig::Never, 1),
        hotel,
        Box::new(GroupsDecline),
    )
    .unwrap();

    let report = orchestrator.tick().unwrap();
    assert_eq!(report.settled, 1);
    assert_eq!(report.declined, 1);
    assert_eq!(orchestrator.event_log().events_for_order("pair")[0].event_type(), "Declined");
}

#[test]
fn test_hotel_built_by_hand() {
    let tariffs = Tariffs::default();
    let mut hotel = Hotel::new();
    for (number, room_type, capacity, comfort) in [
        ("A", RoomType::Single, 1, Comfort::Apartment),
        ("B", RoomType::Double, 2, Comfort::Improved),
        ("C", RoomType::HalfLuxury, 2, Comfort::Standard),
        ("D", RoomType::Luxury, 4, Comfort::Standard),
    ] {
        hotel.add_room(Room::new(number.to_string(), room_type, capacity, comfort, &tariffs));
    }

    let mut orchestrator = Orchestrator::new(config(DeclineConfig::Never, 2), hotel).unwrap();
    let report = orchestrator.run().unwrap();

    assert_eq!(report.totals.total_orders(), 0);
    assert!(report.days.iter().all(|day| day.category_load.len() == 7));
}

#[test]
fn test_report_serializes_to_json() {
    let mut orchestrator = orchestrator(
        "01.03.2020 Ivanov Ivan Ivanovich 1 01.03.2020 2 3500\n",
        DeclineConfig::Never,
        2,
    );

    let report = orchestrator.run().unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["days"][0]["revenue"], 3180);
    assert_eq!(json["events"][0]["type"], "Settlement");
    assert_eq!(json["totals"]["total_settled"], 1);
}

#[test]
fn test_sample_data_full_month() {
    let config: SimulationConfig =
        serde_json::from_str(include_str!("../../data/sim.json")).unwrap();
    let hotel = loader::load_hotel(
        include_str!("../../data/fund.txt"),
        include_str!("../../data/booking.txt"),
        &config.tariffs,
    )
    .unwrap();
    let num_orders = hotel.num_orders();

    let mut orchestrator = Orchestrator::new(config, hotel).unwrap();
    let report = orchestrator.run().unwrap();

    assert_eq!(report.days.len(), 30);
    assert_eq!(report.totals.total_orders(), num_orders);
    assert!(report.totals.total_revenue > 0);
}
