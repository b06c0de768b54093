use std::fs;
use std::path::Path;

use crate::model::{Booking, Hotel};

/// Failure to load a required input file. The only fatal error in the
/// program — raised before the query loop starts, never after.
#[derive(Debug)]
pub enum InputError {
    Io(String, std::io::Error),
    Json(String, serde_json::Error),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(path, e) => write!(f, "cannot read {path}: {e}"),
            InputError::Json(path, e) => write!(f, "invalid JSON in {path}: {e}"),
        }
    }
}

impl std::error::Error for InputError {}

pub fn load_hotels(path: &Path) -> Result<Vec<Hotel>, InputError> {
    load(path)
}

pub fn load_bookings(path: &Path) -> Result<Vec<Booking>, InputError> {
    load(path)
}

fn load<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, InputError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| InputError::Io(path.display().to_string(), e))?;
    serde_json::from_str(&raw).map_err(|e| InputError::Json(path.display().to_string(), e))
}
