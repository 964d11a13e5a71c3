// crates/sumbu-core/src/error.rs
use thiserror::Error;

/// Errors raised while building or loading a [`crate::PoiDb`].
///
/// Query operations (filtering, ranking, search) never fail; only the
/// construction side of the crate returns this type.
#[derive(Debug, Error)]
pub enum SumbuError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid coordinates: lat={lat}, lng={lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("Unsupported locale: {0:?} (expected \"id\" or \"en\")")]
    UnknownLocale(String),

    #[error("Unknown category tag: {0:?}")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for SumbuError {
    fn from(e: figment::Error) -> Self {
        SumbuError::Config(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, SumbuError>;
