//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how a date span converts into a fraction
//! of a year for accrual and discounting.
//!
//! # Supported Conventions
//!
//! - [`Act365Fixed`]: ACT/365-Fixed - actual days over a fixed 365 basis
//! - [`Act360`]: ACT/360 - money market convention
//! - [`Thirty360US`]: 30/360-US (bond basis) - assumes 30-day months
//!
//! The set is closed: parsing any other convention name fails with
//! [`CoreError::UnsupportedConvention`] rather than silently defaulting.
//!
//! # Usage
//!
//! ```rust
//! use accrue_core::daycounts::{DayCount, DayCountConvention};
//! use accrue_core::types::Date;
//!
//! let dc = DayCountConvention::Thirty360US.to_day_count();
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use thirty360::Thirty360US;

use crate::error::CoreError;
use crate::types::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the wire name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Returns zero when `end <= start`: the engine never produces negative
    /// accrual.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the signed day count between two dates according to the
    /// convention's numerator rule.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// Provides runtime convention selection and conversion to boxed trait
/// objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// ACT/365-Fixed - actual days over 365
    #[default]
    Act365Fixed,

    /// ACT/360 - actual days over 360
    Act360,

    /// 30/360 US (Bond Basis) with the 31st-day adjustment rules
    Thirty360US,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Thirty360US => Box::new(Thirty360US),
        }
    }

    /// Returns the wire name of the convention.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365-Fixed",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Thirty360US => "30/360-US",
        }
    }

    /// Returns all supported day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act360,
            DayCountConvention::Thirty360US,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a day count convention from a string.
    ///
    /// Accepts the wire names (`ACT/365-Fixed`, `ACT/360`, `30/360-US`) and a
    /// handful of common spellings of those same three conventions. Anything
    /// else fails with [`CoreError::UnsupportedConvention`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "ACT/365-FIXED" | "ACT/365F" | "ACT/365 FIXED" | "ACT/365" | "ACT365FIXED" => {
                Ok(DayCountConvention::Act365Fixed)
            }

            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "30/360-US" | "30/360 US" | "30/360" | "THIRTY360US" | "BOND" => {
                Ok(DayCountConvention::Thirty360US)
            }

            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}
