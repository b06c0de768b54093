#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    UnknownHotel(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownHotel(id) => write!(f, "hotel not found: {id}"),
        }
    }
}

impl std::error::Error for EngineError {}
