//! Cash flow value type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A dated cash flow.
///
/// The engine treats cash flow sequences as opaque dated amounts: duplicates
/// are kept as supplied and ordering is not assumed from callers, so sequences
/// are sorted by date (see [`sort_cashflows`]) before pricing.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::new(Date::from_ymd(2025, 6, 15).unwrap(), dec!(3.75));
/// assert_eq!(cf.amount(), dec!(3.75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Cash flow amount (per 100 face or absolute, caller's choice)
    amount: Decimal,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: Decimal) -> Self {
        Self { date, amount }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.amount, self.date)
    }
}

/// Sorts a cash flow sequence ascending by date.
///
/// The sort is stable: same-date flows keep their supplied order and are
/// never merged.
pub fn sort_cashflows(cashflows: &mut [CashFlow]) {
    cashflows.sort_by_key(CashFlow::date);
}
