//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Budget configuration error
    #[error(transparent)]
    Budget(#[from] tessera_budget::BudgetError),

    /// City loading error
    #[error(transparent)]
    City(#[from] tessera_cities::CityError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested city does not exist
    #[error("City not found: {0}")]
    CityNotFound(String),
}
