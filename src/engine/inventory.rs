use std::collections::HashMap;

use crate::model::{Hotel, Key};

/// Per-hotel, per-room-type unit counts, derived once from the hotel records.
#[derive(Debug, Default)]
pub struct InventoryIndex {
    hotels: HashMap<Key, HashMap<Key, u32>>,
}

impl InventoryIndex {
    /// Count rooms per (hotel, room type). A hotel with no rooms still gets
    /// an entry — its id is a known key with zero capacity for every type.
    pub fn build(hotels: &[Hotel]) -> Self {
        let mut index: HashMap<Key, HashMap<Key, u32>> = HashMap::new();
        for hotel in hotels {
            let types = index.entry(Key::new(&hotel.id)).or_default();
            for room in hotel.rooms.as_deref().unwrap_or(&[]) {
                *types.entry(Key::new(&room.room_type)).or_insert(0) += 1;
            }
        }
        Self { hotels: index }
    }

    pub fn contains_hotel(&self, hotel: &Key) -> bool {
        self.hotels.contains_key(hotel)
    }

    /// Unit count for a (hotel, room type) pair; unseen pairs have capacity 0.
    pub fn room_count(&self, hotel: &Key, room_type: &Key) -> u32 {
        self.hotels
            .get(hotel)
            .and_then(|types| types.get(room_type))
            .copied()
            .unwrap_or(0)
    }

    pub fn hotel_count(&self) -> usize {
        self.hotels.len()
    }
}
