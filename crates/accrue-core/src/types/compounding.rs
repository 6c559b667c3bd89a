//! Compounding modes for discounting and yield calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Compounding mode for discount factor calculations.
///
/// The engine supports annual and semi-annual periodic compounding. `Street`
/// is accepted as an alias of `Annual` pending clarification of its intended
/// semantics; it is kept as a distinct variant so a true street-convention
/// model can be introduced later without an API break.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::Compounding;
///
/// assert_eq!(Compounding::SemiAnnual.frequency(), 2);
/// assert_eq!(Compounding::Street.frequency(), 1);
///
/// // 5% yield, 1 year, semi-annual: (1 + 0.025)^-2
/// let df = Compounding::SemiAnnual.discount_factor(0.05, 1.0);
/// assert!((df - 0.951814).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Annual compounding (1x per year)
    #[default]
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Street convention - currently an alias of `Annual`
    Street,
}

impl Compounding {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        match self {
            Compounding::Annual | Compounding::Street => 1,
            Compounding::SemiAnnual => 2,
        }
    }

    /// Calculates the discount factor for a yield and a time in years.
    ///
    /// Uses periodic compounding: `(1 + y/freq)^(-t * freq)`. A non-positive
    /// time returns exactly 1 - a same-day payment is undiscounted.
    #[must_use]
    pub fn discount_factor(&self, yield_rate: f64, time: f64) -> f64 {
        if time <= 0.0 {
            return 1.0;
        }
        let freq = f64::from(self.frequency());
        (1.0 + yield_rate / freq).powf(-time * freq)
    }

    /// Returns the wire name of the mode.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Compounding::Annual => "ANNUAL",
            Compounding::SemiAnnual => "SEMI-ANNUAL",
            Compounding::Street => "STREET",
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Compounding {
    type Err = CoreError;

    /// Parses a compounding mode from its wire name.
    ///
    /// Accepts `ANNUAL`, `SEMI-ANNUAL` (and `SEMIANNUAL`), and `STREET`,
    /// case-insensitively. Unknown names fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ANNUAL" => Ok(Compounding::Annual),
            "SEMI-ANNUAL" | "SEMIANNUAL" | "SEMI_ANNUAL" => Ok(Compounding::SemiAnnual),
            "STREET" => Ok(Compounding::Street),
            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}
