use crate::model::{Key, Night};

use super::availability::{Run, nights, nights_ahead, positive_runs};
use super::{Engine, EngineError};

impl Engine {
    /// Minimum available-unit count across the nights `[start, end_exclusive)`.
    ///
    /// A range is only as available as its tightest night. A degenerate range
    /// (zero nights) reports the bare inventory count: a zero-length stay
    /// occupies nothing, so full capacity is the honest answer. The result is
    /// never clamped — overbooked nights go negative.
    pub fn availability(
        &self,
        hotel_id: &str,
        room_type: &str,
        start: Night,
        end_exclusive: Night,
    ) -> Result<i64, EngineError> {
        let (hotel, room_type, total) = self.lookup(hotel_id, room_type)?;

        Ok(nights(start, end_exclusive)
            .map(|night| total - i64::from(self.calendar.booked(&hotel, &room_type, night)))
            .min()
            .unwrap_or(total))
    }

    /// Maximal contiguous runs of strictly positive availability within the
    /// horizon `[today, today + horizon_nights)`.
    pub fn search(
        &self,
        hotel_id: &str,
        room_type: &str,
        horizon_nights: u32,
        today: Night,
    ) -> Result<Vec<Run>, EngineError> {
        let (hotel, room_type, total) = self.lookup(hotel_id, room_type)?;

        let per_night = nights_ahead(today, horizon_nights).map(|night| {
            (
                night,
                total - i64::from(self.calendar.booked(&hotel, &room_type, night)),
            )
        });
        Ok(positive_runs(per_night))
    }

    /// Resolve query keys and the room-type's total inventory. An unknown
    /// hotel id is the only query-time error; an unseen room type just has
    /// zero capacity.
    fn lookup(&self, hotel_id: &str, room_type: &str) -> Result<(Key, Key, i64), EngineError> {
        let hotel = Key::new(hotel_id);
        if !self.inventory.contains_hotel(&hotel) {
            return Err(EngineError::UnknownHotel(hotel_id.trim().to_string()));
        }
        let room_type = Key::new(room_type);
        let total = i64::from(self.inventory.room_count(&hotel, &room_type));
        Ok((hotel, room_type, total))
    }
}
