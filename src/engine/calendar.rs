use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use crate::model::{Booking, Key, Night};

/// Per-hotel, per-room-type, per-night booked-unit counts, expanded once
/// from the booking records.
///
/// Overlapping bookings are summed, never rejected — the booked count for a
/// night is simply how many valid stays cover it.
#[derive(Debug, Default)]
pub struct BookingCalendar {
    booked: HashMap<Key, HashMap<Key, BTreeMap<Night, u32>>>,
    skipped: u64,
}

impl BookingCalendar {
    /// Expand every valid booking into its constituent nights. Malformed
    /// records (blank field, unparseable date) are expected noise: they are
    /// dropped with a diagnostic, never surfaced as errors.
    pub fn build(bookings: &[Booking]) -> Self {
        let mut calendar = Self::default();
        for booking in bookings {
            if !calendar.apply(booking) {
                calendar.skipped += 1;
                debug!(
                    hotel = %booking.hotel_id,
                    room_type = %booking.room_type,
                    arrival = %booking.arrival,
                    departure = %booking.departure,
                    "skipping malformed booking"
                );
            }
        }
        calendar
    }

    /// Returns false when the record is malformed and must be skipped.
    fn apply(&mut self, booking: &Booking) -> bool {
        let hotel = booking.hotel_id.trim();
        let room_type = booking.room_type.trim();
        if hotel.is_empty()
            || room_type.is_empty()
            || booking.arrival.trim().is_empty()
            || booking.departure.trim().is_empty()
        {
            return false;
        }
        let (Some(arrival), Some(departure)) = (
            parse_stay_date(&booking.arrival),
            parse_stay_date(&booking.departure),
        ) else {
            return false;
        };

        // arrival >= departure expands to zero nights: a same-day
        // arrival/departure is a valid record with no occupancy.
        let nights = self
            .booked
            .entry(Key::new(hotel))
            .or_default()
            .entry(Key::new(room_type))
            .or_default();
        let mut night = arrival;
        while night < departure {
            *nights.entry(night).or_insert(0) += 1;
            match night.succ_opt() {
                Some(next) => night = next,
                None => break, // end of the representable calendar
            }
        }
        true
    }

    /// Booked-unit count for one night; absent triples have implicit count 0.
    pub fn booked(&self, hotel: &Key, room_type: &Key, night: Night) -> u32 {
        self.booked
            .get(hotel)
            .and_then(|types| types.get(room_type))
            .and_then(|nights| nights.get(&night))
            .copied()
            .unwrap_or(0)
    }

    /// Number of malformed booking records dropped during construction.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

/// Parse a stay date: compact `YYYYMMDD` first, then dashed `YYYY-MM-DD`,
/// then permissive fallbacks (slashed `YYYY/MM/DD`, ISO-8601 datetime with
/// the time part discarded).
pub fn parse_stay_date(raw: &str) -> Option<Night> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
        .ok()
        .or_else(|| {
            trimmed
                .parse::<chrono::NaiveDateTime>()
                .ok()
                .map(|dt| dt.date())
        })
}
