//! # Accrue Core
//!
//! Core types and conventions for the Accrue fixed income valuation engine.
//!
//! This crate provides the foundational building blocks used throughout Accrue:
//!
//! - **Types**: `Date`, `CashFlow`, `Compounding`
//! - **Day Count Conventions**: ACT/365-Fixed, ACT/360, and 30/360-US year fractions
//! - **Business Day Rolling**: weekend-aware FOLLOWING / PRECEDING / MODIFIED-FOLLOWING
//!
//! Every date entering the engine is normalized to a plain calendar day before
//! any arithmetic; all types here are immutable value objects and safe to share
//! across threads.
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::prelude::*;
//!
//! let start = Date::parse("2024-01-31").unwrap();
//! let end = start.add_months(1, None).unwrap();
//! assert_eq!(end, Date::from_ymd(2024, 2, 29).unwrap());
//!
//! let dc = DayCountConvention::Act365Fixed.to_day_count();
//! let yf = dc.year_fraction(start, end);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{roll_business_day, BusinessDayRoll};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{sort_cashflows, CashFlow, Compounding, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, Compounding, Date};
