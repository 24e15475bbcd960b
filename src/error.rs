//! Error types for configuration and settings input.

use thiserror::Error;

/// Errors raised while turning user input into settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The requested pattern is not in the built-in table.
    #[error("unknown breathing pattern '{0}' (see --list-patterns)")]
    UnknownPattern(String),

    /// Manual entry could not be parsed as a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Manual entry parsed to NaN or infinity.
    #[error("value must be a finite number")]
    NotFinite,
}
