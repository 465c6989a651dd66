//! Budget error types

use thiserror::Error;

/// Errors raised while loading or validating budget configuration.
///
/// The derivation functions themselves never fail.
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
