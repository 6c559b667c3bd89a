//! Core value types.

mod cashflow;
mod compounding;
mod date;

pub use cashflow::{sort_cashflows, CashFlow};
pub use compounding::Compounding;
pub use date::Date;
