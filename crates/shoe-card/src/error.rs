//! Card error types.

use thiserror::Error;

/// Errors raised while loading catalog data or configuration.
#[derive(Error, Debug)]
pub enum CardError {
    /// Release date could not be parsed.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    /// Currency code not recognised.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CardError {
    fn from(e: serde_json::Error) -> Self {
        CardError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CardError {
    fn from(e: toml::de::Error) -> Self {
        CardError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CardError {
    fn from(e: toml::ser::Error) -> Self {
        CardError::Config(e.to_string())
    }
}
