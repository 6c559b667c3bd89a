//! Error types for the Accrue core library.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core date and convention operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Unparsable or out-of-range date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unknown day-count, compounding, or roll convention name.
    ///
    /// Conventions form a closed set; unsupported names fail here rather
    /// than silently defaulting.
    #[error("Unsupported convention: '{name}'")]
    UnsupportedConvention {
        /// The offending convention name.
        name: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported_convention(name: impl Into<String>) -> Self {
        Self::UnsupportedConvention { name: name.into() }
    }
}
