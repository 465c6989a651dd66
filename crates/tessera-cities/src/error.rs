//! Error types for city loading

use thiserror::Error;

/// Errors that can occur while loading city records
#[derive(Error, Debug)]
pub enum CityError {
    /// Failed to read the city file
    #[error("Failed to read city file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse city TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A record is unusable
    #[error("Invalid city record: {0}")]
    InvalidRecord(String),

    /// Two records share a slug
    #[error("Duplicate city slug: {0}")]
    DuplicateSlug(String),

    /// Error reported by a custom city source
    #[error("City source error: {0}")]
    Source(String),
}

impl From<String> for CityError {
    fn from(message: String) -> Self {
        CityError::Source(message)
    }
}
