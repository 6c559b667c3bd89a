//! # Accrue Bonds
//!
//! Bond analytics for the Accrue fixed income valuation engine: coupon
//! schedule construction, accrued interest, present value and risk
//! statistics, and yield solving.
//!
//! The four functions in [`engine`] are the top-level operations: price or
//! yield, from either full instrument terms or an explicit cash flow
//! sequence. Everything they need is also public for finer-grained use.
//!
//! ## Example
//!
//! ```rust
//! use accrue_bonds::prelude::*;
//! use accrue_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let terms = InstrumentTerms::builder(
//!     Date::from_ymd(2020, 1, 15).unwrap(),
//!     Date::from_ymd(2025, 1, 15).unwrap(),
//! )
//! .with_coupon_rate(dec!(0.075))
//! .build()
//! .unwrap();
//!
//! let settlement = SettlementSpec::on(Date::from_ymd(2022, 7, 15).unwrap());
//! let valuation = price_from_schedule(&terms, &settlement, 0.072).unwrap();
//! assert_eq!(valuation.clean_price, valuation.dirty_price - valuation.accrued);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]

pub mod accrued;
pub mod engine;
pub mod error;
pub mod pricing;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrued::{accrued_interest, adjacent_coupons};
    pub use crate::engine::{
        price_from_cashflows, price_from_schedule, yield_from_cashflows, yield_from_schedule,
    };
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{
        current_yield, estimate_price_change, normalize_yield, price_from_yield, risk_stats,
        ytm_from_price, YieldResult,
    };
    pub use crate::schedule::{build_schedule, BondSchedule, MAX_PERIODS};
    pub use crate::types::{
        InstrumentTerms, InstrumentTermsBuilder, Period, RiskStats, SettlementSpec,
        SolverDiagnostics, Valuation,
    };
}

// Re-export commonly used types at crate root
pub use error::{BondError, BondResult};
pub use types::{InstrumentTerms, RiskStats, SettlementSpec, Valuation};
