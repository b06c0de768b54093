mod availability;
mod calendar;
mod error;
mod inventory;
mod queries;
#[cfg(test)]
mod tests;

pub use availability::{Run, nights, nights_ahead, positive_runs};
pub use calendar::{BookingCalendar, parse_stay_date};
pub use error::EngineError;
pub use inventory::InventoryIndex;

use tracing::info;

use crate::model::{Booking, Hotel};

/// The two read-only indexes behind every query.
///
/// Both are built exactly once, before the first command is read, and are
/// never mutated afterwards — queries take `&self` and nothing else.
pub struct Engine {
    pub inventory: InventoryIndex,
    pub calendar: BookingCalendar,
}

impl Engine {
    pub fn build(hotels: &[Hotel], bookings: &[Booking]) -> Self {
        let inventory = InventoryIndex::build(hotels);
        let calendar = BookingCalendar::build(bookings);
        info!(
            hotels = inventory.hotel_count(),
            bookings = bookings.len(),
            skipped_bookings = calendar.skipped(),
            "indexes built"
        );
        Self {
            inventory,
            calendar,
        }
    }
}
