use super::*;
use crate::model::{Booking, Hotel, Key, Night, Room};

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> Night {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hotel(id: &str, rooms: &[&str]) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: String::new(),
        room_types: None,
        rooms: Some(
            rooms
                .iter()
                .enumerate()
                .map(|(i, rt)| Room {
                    room_type: rt.to_string(),
                    room_id: format!("{}", 100 + i),
                })
                .collect(),
        ),
    }
}

fn booking(hotel: &str, room_type: &str, arrival: &str, departure: &str) -> Booking {
    Booking {
        hotel_id: hotel.to_string(),
        arrival: arrival.to_string(),
        departure: departure.to_string(),
        room_type: room_type.to_string(),
        room_rate: String::new(),
    }
}

/// Hotel H1 with 2 DBL rooms and one booking covering the nights of
/// Jan 1–3 2024 (departure Jan 4, exclusive).
fn two_dbl_engine() -> Engine {
    Engine::build(
        &[hotel("H1", &["DBL", "DBL"])],
        &[booking("H1", "DBL", "20240101", "20240104")],
    )
}

// ── availability ─────────────────────────────────────────

#[test]
fn no_bookings_reports_full_inventory() {
    let engine = Engine::build(&[hotel("H1", &["SGL", "SGL", "DBL"])], &[]);
    let got = engine
        .availability("H1", "SGL", date(2024, 1, 1), date(2024, 2, 1))
        .unwrap();
    assert_eq!(got, 2);
}

#[test]
fn single_night_availability() {
    let engine = two_dbl_engine();
    let got = engine
        .availability("H1", "DBL", date(2024, 1, 2), date(2024, 1, 3))
        .unwrap();
    assert_eq!(got, 1);
}

#[test]
fn range_availability_is_minimum_not_sum() {
    let engine = two_dbl_engine();
    // Nights Jan 1–5: three booked nights at 1 available, two free at 2.
    let got = engine
        .availability("H1", "DBL", date(2024, 1, 1), date(2024, 1, 6))
        .unwrap();
    assert_eq!(got, 1);
}

#[test]
fn night_after_departure_is_free() {
    let engine = two_dbl_engine();
    let got = engine
        .availability("H1", "DBL", date(2024, 1, 4), date(2024, 1, 5))
        .unwrap();
    assert_eq!(got, 2);
}

#[test]
fn degenerate_range_reports_inventory_even_when_fully_booked() {
    let engine = Engine::build(
        &[hotel("H1", &["DBL"])],
        &[booking("H1", "DBL", "20240101", "20240110")],
    );
    // Zero-length range inside a fully-booked stretch still reports capacity.
    let got = engine
        .availability("H1", "DBL", date(2024, 1, 5), date(2024, 1, 5))
        .unwrap();
    assert_eq!(got, 1);
}

#[test]
fn availability_goes_negative_on_overbooking() {
    let engine = Engine::build(
        &[hotel("H1", &["DBL"])],
        &[
            booking("H1", "DBL", "20240101", "20240102"),
            booking("H1", "DBL", "20240101", "20240102"),
            booking("H1", "DBL", "20240101", "20240102"),
        ],
    );
    let got = engine
        .availability("H1", "DBL", date(2024, 1, 1), date(2024, 1, 2))
        .unwrap();
    assert_eq!(got, -2);
}

#[test]
fn unseen_room_type_has_zero_capacity() {
    let engine = two_dbl_engine();
    let got = engine
        .availability("H1", "SUITE", date(2024, 6, 1), date(2024, 6, 2))
        .unwrap();
    assert_eq!(got, 0);
}

#[test]
fn unknown_hotel_is_an_error() {
    let engine = two_dbl_engine();
    let err = engine
        .availability("H9", "DBL", date(2024, 1, 1), date(2024, 1, 2))
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownHotel("H9".to_string()));
}

#[test]
fn query_keys_are_case_insensitive() {
    let engine = two_dbl_engine();
    let got = engine
        .availability("h1", "dbl", date(2024, 1, 2), date(2024, 1, 3))
        .unwrap();
    assert_eq!(got, 1);
}

#[test]
fn bookings_for_other_types_do_not_interfere() {
    let engine = Engine::build(
        &[hotel("H1", &["SGL", "DBL"])],
        &[booking("H1", "DBL", "20240101", "20240105")],
    );
    let got = engine
        .availability("H1", "SGL", date(2024, 1, 1), date(2024, 1, 5))
        .unwrap();
    assert_eq!(got, 1);
}

// ── search ───────────────────────────────────────────────

#[test]
fn search_whole_horizon_positive_is_one_run() {
    let engine = two_dbl_engine();
    // Availability over the 5 nights from Jan 1: 1,1,1,2,2 — all positive.
    let runs = engine.search("H1", "DBL", 5, date(2024, 1, 1)).unwrap();
    assert_eq!(
        runs,
        vec![Run {
            start: date(2024, 1, 1),
            end: date(2024, 1, 5),
            min_available: 1,
        }]
    );
}

#[test]
fn search_splits_at_fully_booked_nights() {
    let engine = Engine::build(
        &[hotel("H1", &["DBL", "DBL"])],
        &[
            booking("H1", "DBL", "20240101", "20240104"),
            booking("H1", "DBL", "20240102", "20240103"), // Jan 2 saturated
        ],
    );
    let runs = engine.search("H1", "DBL", 5, date(2024, 1, 1)).unwrap();
    assert_eq!(
        runs,
        vec![
            Run {
                start: date(2024, 1, 1),
                end: date(2024, 1, 1),
                min_available: 1,
            },
            Run {
                start: date(2024, 1, 3),
                end: date(2024, 1, 5),
                min_available: 1,
            },
        ]
    );
}

#[test]
fn search_omits_overbooked_stretches() {
    let engine = Engine::build(
        &[hotel("H1", &["SGL"])],
        &[
            booking("H1", "SGL", "20240102", "20240104"),
            booking("H1", "SGL", "20240102", "20240104"), // nights 2–3 at -1
        ],
    );
    let runs = engine.search("H1", "SGL", 4, date(2024, 1, 1)).unwrap();
    assert_eq!(
        runs,
        vec![
            Run {
                start: date(2024, 1, 1),
                end: date(2024, 1, 1),
                min_available: 1,
            },
            Run {
                start: date(2024, 1, 4),
                end: date(2024, 1, 4),
                min_available: 1,
            },
        ]
    );
}

#[test]
fn search_zero_horizon_is_empty() {
    let engine = two_dbl_engine();
    assert!(
        engine
            .search("H1", "DBL", 0, date(2024, 1, 1))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn search_no_positive_night_is_empty() {
    let engine = Engine::build(
        &[hotel("H1", &["SGL"])],
        &[booking("H1", "SGL", "20240101", "20240111")],
    );
    assert!(
        engine
            .search("H1", "SGL", 10, date(2024, 1, 1))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn search_unknown_hotel_is_an_error() {
    let engine = two_dbl_engine();
    let err = engine.search("nope", "DBL", 5, date(2024, 1, 1)).unwrap_err();
    assert_eq!(err, EngineError::UnknownHotel("nope".to_string()));
}

#[test]
fn search_crosses_year_boundary() {
    let engine = Engine::build(
        &[hotel("H1", &["DBL"])],
        &[booking("H1", "DBL", "20231231", "20240101")],
    );
    let runs = engine.search("H1", "DBL", 3, date(2023, 12, 30)).unwrap();
    assert_eq!(
        runs,
        vec![
            Run {
                start: date(2023, 12, 30),
                end: date(2023, 12, 30),
                min_available: 1,
            },
            Run {
                start: date(2024, 1, 1),
                end: date(2024, 1, 1),
                min_available: 1,
            },
        ]
    );
}

#[test]
fn search_for_zero_capacity_type_is_empty() {
    let engine = two_dbl_engine();
    assert!(
        engine
            .search("H1", "SUITE", 5, date(2024, 1, 1))
            .unwrap()
            .is_empty()
    );
}

// ── construction ─────────────────────────────────────────

#[test]
fn construction_is_deterministic() {
    let hotels = [hotel("H1", &["SGL", "DBL", "DBL"]), hotel("H2", &["SGL"])];
    let bookings = [
        booking("H1", "DBL", "20240101", "20240110"),
        booking("h1", "dbl", "2024-01-05", "2024-01-07"),
        booking("H2", "SGL", "20240201", "20240203"),
    ];
    let a = Engine::build(&hotels, &bookings);
    let b = Engine::build(&hotels, &bookings);

    for d in nights_ahead(date(2024, 1, 1), 60) {
        for (h, rt) in [("H1", "SGL"), ("H1", "DBL"), ("H2", "SGL")] {
            assert_eq!(
                a.calendar.booked(&Key::new(h), &Key::new(rt), d),
                b.calendar.booked(&Key::new(h), &Key::new(rt), d),
            );
            assert_eq!(
                a.inventory.room_count(&Key::new(h), &Key::new(rt)),
                b.inventory.room_count(&Key::new(h), &Key::new(rt)),
            );
        }
    }
}
