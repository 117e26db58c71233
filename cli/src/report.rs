//! Plain-text rendering of a simulation report

use hotel_simulator_core_rs::{DailyReport, Event, SimulationReport};
use std::fmt;

/// Daily statistics and run totals, rendered through `Display`
pub struct TextReport<'a>(pub &'a SimulationReport);

/// Render the daily statistics and run totals
pub fn render(report: &SimulationReport) -> String {
    TextReport(report).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "run {} (seed {})", report.run_id, report.rng_seed)?;

        for day in &report.days {
            write_day(f, day, &report.events)?;
        }

        let totals = &report.totals;
        writeln!(f)?;
        writeln!(f, "=== TOTALS ===")?;
        writeln!(
            f,
            "orders: {} settled, {} declined, {} without room",
            totals.total_settled, totals.total_declined, totals.total_unmatched
        )?;
        writeln!(f, "departures: {}", totals.total_departures)?;
        writeln!(f, "peak occupancy: {} rooms", totals.peak_occupied)?;
        writeln!(f, "revenue: {}", totals.total_revenue)?;
        writeln!(f, "lost revenue: {}", totals.total_lost_revenue)
    }
}

fn write_day(f: &mut fmt::Formatter<'_>, day: &DailyReport, events: &[Event]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "--- {} ---", day.date)?;
    for event in events.iter().filter(|event| event.day() == day.day) {
        write_event(f, event)?;
    }
    writeln!(
        f,
        "settled {}, declined {}, without room {}, departed {}",
        day.settled, day.declined, day.unmatched, day.departures
    )?;
    writeln!(
        f,
        "rooms: {} occupied, {} free ({:.1}% load)",
        day.availability.non_available, day.availability.available, day.total_load_percent
    )?;
    for load in &day.category_load {
        writeln!(
            f,
            "  {:<12} {:>3}/{:<3} {:>5.1}%",
            load.category.to_string(),
            load.occupied,
            load.total,
            load.percent
        )?;
    }
    writeln!(f, "revenue {}, lost {}", day.revenue, day.lost_revenue)
}

fn write_event(f: &mut fmt::Formatter<'_>, event: &Event) -> fmt::Result {
    match event {
        Event::Departure {
            guest, room_number, ..
        } => writeln!(f, "{} left room {}", guest, room_number),
        Event::Settlement {
            guest,
            quantity,
            room_number,
            meal,
            discounted,
            ..
        } => writeln!(
            f,
            "settled {} (party of {}) in room {}, meals {:?}{}",
            guest,
            quantity,
            room_number,
            meal,
            if *discounted { ", discounted" } else { "" }
        ),
        Event::Declined { guest, quantity, .. } => {
            writeln!(f, "{} (party of {}) declined the room", guest, quantity)
        }
        Event::NoSuitableRoom { guest, quantity, .. } => {
            writeln!(f, "no suitable room for {} (party of {})", guest, quantity)
        }
        Event::EndOfDay { .. } => Ok(()),
    }
}
