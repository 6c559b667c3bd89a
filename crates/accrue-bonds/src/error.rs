//! Error types for bond analytics.

use thiserror::Error;

use accrue_core::error::CoreError;

/// Result type alias for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur in bond analytics.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Instrument terms are inconsistent
    #[error("Invalid instrument terms: {reason}")]
    InvalidTerms {
        /// What is wrong with the terms
        reason: String,
    },

    /// Schedule generation would exceed the period safety cap
    #[error("Schedule exceeds the {cap}-period cap")]
    ScheduleTooLong {
        /// The period cap
        cap: u32,
    },

    /// Target price is not a finite number
    #[error("Invalid target price: {value}")]
    InvalidTargetPrice {
        /// The rejected value
        value: f64,
    },

    /// An explicit cash flow sequence was empty
    #[error("Cash flow sequence is empty")]
    EmptyCashflowSet,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid terms error.
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        BondError::InvalidTerms {
            reason: reason.into(),
        }
    }

    /// Creates a schedule-too-long error.
    #[must_use]
    pub fn schedule_too_long(cap: u32) -> Self {
        BondError::ScheduleTooLong { cap }
    }

    /// Creates an invalid target price error.
    #[must_use]
    pub fn invalid_target_price(value: f64) -> Self {
        BondError::InvalidTargetPrice { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_terms("maturity precedes issue");
        assert_eq!(
            err.to_string(),
            "Invalid instrument terms: maturity precedes issue"
        );

        let err = BondError::schedule_too_long(600);
        assert_eq!(err.to_string(), "Schedule exceeds the 600-period cap");

        let err = BondError::invalid_target_price(f64::NAN);
        assert!(err.to_string().starts_with("Invalid target price"));

        let err = BondError::EmptyCashflowSet;
        assert_eq!(err.to_string(), "Cash flow sequence is empty");
    }

    #[test]
    fn test_core_error_conversion() {
        let core = CoreError::invalid_date("2025-13-40");
        let bond: BondError = core.into();
        assert!(matches!(bond, BondError::Core(_)));
    }
}
