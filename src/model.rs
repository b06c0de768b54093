use serde::{Deserialize, Serialize};

/// A calendar night of stay. Date only — no time-of-day, no timezone.
pub type Night = chrono::NaiveDate;

/// Case-insensitive lookup key for hotel ids and room-type codes.
///
/// Input records and operator commands disagree freely on casing, so every
/// map in the engine is keyed on the trimmed, lowercased form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room-type definition as it appears in the hotels file. Only `code`
/// matters to the engine; the rest is carried for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A concrete room under a hotel. The count of rooms sharing a room-type
/// code is that type's unit capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, rename = "roomType")]
    pub room_type: String,
    #[serde(default, rename = "roomId")]
    pub room_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Absent and `null` both mean "no room types listed".
    #[serde(default, rename = "roomTypes")]
    pub room_types: Option<Vec<RoomType>>,
    /// Absent and `null` both mean "no rooms listed".
    #[serde(default)]
    pub rooms: Option<Vec<Room>>,
}

/// A raw booking record. Dates stay as strings here — parsing them is part
/// of the calendar builder's contract, and malformed records are expected
/// noise, so nothing is rejected at decode time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, rename = "hotelId")]
    pub hotel_id: String,
    #[serde(default)]
    pub arrival: String,
    #[serde(default)]
    pub departure: String,
    #[serde(default, rename = "roomType")]
    pub room_type: String,
    /// Unused by the engine.
    #[serde(default, rename = "roomRate")]
    pub room_rate: String,
}
