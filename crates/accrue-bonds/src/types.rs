//! Instrument terms, schedule periods, and valuation result types.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use accrue_core::calendars::{roll_business_day, BusinessDayRoll};
use accrue_core::daycounts::DayCountConvention;
use accrue_core::types::{CashFlow, Compounding, Date};
use accrue_math::SolverStatus;

use crate::error::{BondError, BondResult};

/// Contractual terms of a fixed-coupon bullet bond.
///
/// Built via [`InstrumentTerms::builder`], which validates the terms. All
/// amounts are per 100 face unless the face is changed.
///
/// # Example
///
/// ```rust
/// use accrue_bonds::types::InstrumentTerms;
/// use accrue_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let terms = InstrumentTerms::builder(
///     Date::from_ymd(2020, 1, 15).unwrap(),
///     Date::from_ymd(2025, 1, 15).unwrap(),
/// )
/// .with_coupon_rate(dec!(0.075))
/// .with_frequency_months(6)
/// .build()
/// .unwrap();
///
/// assert_eq!(terms.face(), dec!(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentTerms {
    face: Decimal,
    coupon_rate: Decimal,
    frequency_months: u32,
    issue: Date,
    maturity: Date,
    redemption_percent: Decimal,
    day_count: DayCountConvention,
    compounding: Compounding,
    business_roll: BusinessDayRoll,
    anchor_to_month_end: bool,
}

impl InstrumentTerms {
    /// Creates a builder with the two required dates.
    #[must_use]
    pub fn builder(issue: Date, maturity: Date) -> InstrumentTermsBuilder {
        InstrumentTermsBuilder::new(issue, maturity)
    }

    /// Face amount.
    #[must_use]
    pub fn face(&self) -> Decimal {
        self.face
    }

    /// Annual coupon rate as a decimal fraction (0.075 = 7.5%).
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Months between coupon payments.
    #[must_use]
    pub fn frequency_months(&self) -> u32 {
        self.frequency_months
    }

    /// Issue date.
    #[must_use]
    pub fn issue(&self) -> Date {
        self.issue
    }

    /// Maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Redemption amount as a percentage of face (100 = par).
    #[must_use]
    pub fn redemption_percent(&self) -> Decimal {
        self.redemption_percent
    }

    /// Day count convention for accrual factors.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Compounding mode for discounting.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Business day roll applied to settlement dates.
    #[must_use]
    pub fn business_roll(&self) -> BusinessDayRoll {
        self.business_roll
    }

    /// Whether coupon dates snap to the end of their month.
    #[must_use]
    pub fn anchor_to_month_end(&self) -> bool {
        self.anchor_to_month_end
    }

    /// Annual coupon amount per face.
    #[must_use]
    pub fn annual_coupon(&self) -> Decimal {
        self.face * self.coupon_rate
    }
}

/// Builder for [`InstrumentTerms`].
#[derive(Debug, Clone)]
pub struct InstrumentTermsBuilder {
    face: Decimal,
    coupon_rate: Decimal,
    frequency_months: u32,
    issue: Date,
    maturity: Date,
    redemption_percent: Decimal,
    day_count: DayCountConvention,
    compounding: Compounding,
    business_roll: BusinessDayRoll,
    anchor_to_month_end: bool,
}

impl InstrumentTermsBuilder {
    /// Creates a builder with default terms: 100 face, zero coupon,
    /// semi-annual periods, par redemption, month-end anchoring on.
    #[must_use]
    pub fn new(issue: Date, maturity: Date) -> Self {
        Self {
            face: dec!(100),
            coupon_rate: Decimal::ZERO,
            frequency_months: 6,
            issue,
            maturity,
            redemption_percent: dec!(100),
            day_count: DayCountConvention::default(),
            compounding: Compounding::SemiAnnual,
            business_roll: BusinessDayRoll::default(),
            anchor_to_month_end: true,
        }
    }

    /// Sets the face amount.
    #[must_use]
    pub fn with_face(mut self, face: Decimal) -> Self {
        self.face = face;
        self
    }

    /// Sets the annual coupon rate (decimal fraction).
    #[must_use]
    pub fn with_coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = rate;
        self
    }

    /// Sets the months between coupons.
    #[must_use]
    pub fn with_frequency_months(mut self, months: u32) -> Self {
        self.frequency_months = months;
        self
    }

    /// Sets the redemption percentage of face.
    #[must_use]
    pub fn with_redemption_percent(mut self, percent: Decimal) -> Self {
        self.redemption_percent = percent;
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the compounding mode.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    /// Sets the business day roll.
    #[must_use]
    pub fn with_business_roll(mut self, roll: BusinessDayRoll) -> Self {
        self.business_roll = roll;
        self
    }

    /// Enables or disables month-end anchoring of coupon dates.
    #[must_use]
    pub fn with_anchor_to_month_end(mut self, anchor: bool) -> Self {
        self.anchor_to_month_end = anchor;
        self
    }

    /// Validates and builds the terms.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` when maturity is not after issue or
    /// the coupon frequency is zero months.
    pub fn build(self) -> BondResult<InstrumentTerms> {
        if self.maturity <= self.issue {
            return Err(BondError::invalid_terms(format!(
                "maturity {} must be after issue {}",
                self.maturity, self.issue
            )));
        }
        if self.frequency_months == 0 {
            return Err(BondError::invalid_terms(
                "coupon frequency must be at least one month",
            ));
        }

        Ok(InstrumentTerms {
            face: self.face,
            coupon_rate: self.coupon_rate,
            frequency_months: self.frequency_months,
            issue: self.issue,
            maturity: self.maturity,
            redemption_percent: self.redemption_percent,
            day_count: self.day_count,
            compounding: self.compounding,
            business_roll: self.business_roll,
            anchor_to_month_end: self.anchor_to_month_end,
        })
    }
}

/// One accrual period of a coupon schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Period start (previous coupon date, or issue for the first period)
    pub start: Date,
    /// Period end (coupon payment date)
    pub end: Date,
    /// Year fraction of the period under the instrument's day count
    pub accrual_factor: Decimal,
    /// Coupon paid at period end
    pub coupon_amount: Decimal,
    /// Redemption paid at period end (zero except the final period)
    pub redemption_amount: Decimal,
    /// Total amount paid at period end
    pub total_amount: Decimal,
}

/// Price sensitivity statistics.
///
/// All values are rounded to 8 decimal places. A zero price yields all-zero
/// statistics rather than a division error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskStats {
    /// Present value of the eligible cash flows
    pub price: Decimal,
    /// Macaulay duration in years
    pub macaulay_duration: Decimal,
    /// Modified duration in years
    pub modified_duration: Decimal,
    /// Price change for a one basis point yield move
    pub dv01: Decimal,
    /// Convexity
    pub convexity: Decimal,
}

impl RiskStats {
    /// All-zero statistics, used when there is nothing left to discount.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            price: Decimal::ZERO,
            macaulay_duration: Decimal::ZERO,
            modified_duration: Decimal::ZERO,
            dv01: Decimal::ZERO,
            convexity: Decimal::ZERO,
        }
    }
}

/// Settlement inputs: an optional explicit date plus a lag in calendar days.
///
/// An absent date means "today". The resolved settlement is the date plus the
/// lag, rolled to a business day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SettlementSpec {
    /// Explicit settlement base date; `None` means today
    pub date: Option<Date>,
    /// Calendar days added before rolling
    pub lag_days: i64,
}

impl SettlementSpec {
    /// Settlement on an explicit date with no lag.
    #[must_use]
    pub fn on(date: Date) -> Self {
        Self {
            date: Some(date),
            lag_days: 0,
        }
    }

    /// Settlement today plus a lag in calendar days.
    #[must_use]
    pub fn lagged(lag_days: i64) -> Self {
        Self {
            date: None,
            lag_days,
        }
    }

    /// Resolves the spec to a concrete settlement date.
    #[must_use]
    pub fn resolve(&self, roll: BusinessDayRoll) -> Date {
        let base = self.date.unwrap_or_else(Date::today);
        roll_business_day(base.add_days(self.lag_days), roll)
    }
}

/// Diagnostics from a yield solve.
#[derive(Debug, Clone, Copy)]
pub struct SolverDiagnostics {
    /// Iterations performed
    pub iterations: u32,
    /// Final objective residual (price gap)
    pub residual: f64,
    /// Whether the solve converged or hit the iteration cap
    pub status: SolverStatus,
}

/// Full valuation of an instrument at a settlement date.
#[derive(Debug, Clone)]
pub struct Valuation {
    /// Resolved settlement date
    pub settlement: Date,
    /// Present value including accrued interest
    pub dirty_price: Decimal,
    /// Dirty price less accrued interest
    pub clean_price: Decimal,
    /// Accrued interest at settlement
    pub accrued: Decimal,
    /// Yield used for (or solved from) the valuation, as a decimal fraction
    pub yield_value: f64,
    /// Duration, convexity, and DV01 at the valuation yield
    pub risk: RiskStats,
    /// The cash flows that were valued, sorted by date
    pub cashflows: Vec<CashFlow>,
    /// Solver diagnostics when the yield was solved from a target price
    pub solver: Option<SolverDiagnostics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let terms = InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
            .build()
            .unwrap();

        assert_eq!(terms.face(), dec!(100));
        assert_eq!(terms.coupon_rate(), Decimal::ZERO);
        assert_eq!(terms.frequency_months(), 6);
        assert_eq!(terms.redemption_percent(), dec!(100));
        assert!(terms.anchor_to_month_end());
        assert_eq!(terms.compounding(), Compounding::SemiAnnual);
    }

    #[test]
    fn test_builder_rejects_inverted_dates() {
        let result = InstrumentTerms::builder(date(2025, 1, 15), date(2020, 1, 15)).build();
        assert!(matches!(result, Err(BondError::InvalidTerms { .. })));

        // Equal dates are also rejected
        let result = InstrumentTerms::builder(date(2025, 1, 15), date(2025, 1, 15)).build();
        assert!(matches!(result, Err(BondError::InvalidTerms { .. })));
    }

    #[test]
    fn test_builder_rejects_zero_frequency() {
        let result = InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
            .with_frequency_months(0)
            .build();
        assert!(matches!(result, Err(BondError::InvalidTerms { .. })));
    }

    #[test]
    fn test_annual_coupon() {
        let terms = InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
            .with_coupon_rate(dec!(0.075))
            .build()
            .unwrap();
        assert_eq!(terms.annual_coupon(), dec!(7.5));
    }

    #[test]
    fn test_settlement_spec_resolves_with_lag_and_roll() {
        // 2025-07-03 Thursday + 2 days = Saturday, FOLLOWING rolls to Monday
        let spec = SettlementSpec {
            date: Some(date(2025, 7, 3)),
            lag_days: 2,
        };
        let settled = spec.resolve(BusinessDayRoll::Following);
        assert_eq!(settled, date(2025, 7, 7));
    }

    #[test]
    fn test_settlement_spec_on_weekday_is_unchanged() {
        let spec = SettlementSpec::on(date(2025, 7, 2));
        assert_eq!(spec.resolve(BusinessDayRoll::Following), date(2025, 7, 2));
    }

    #[test]
    fn test_risk_stats_zero() {
        let zero = RiskStats::zero();
        assert_eq!(zero.price, Decimal::ZERO);
        assert_eq!(zero.dv01, Decimal::ZERO);
    }

    #[test]
    fn test_terms_serde_roundtrip() {
        let terms = InstrumentTerms::builder(date(2020, 1, 15), date(2025, 1, 15))
            .with_coupon_rate(dec!(0.05))
            .build()
            .unwrap();
        let json = serde_json::to_string(&terms).unwrap();
        let parsed: InstrumentTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(terms, parsed);
    }
}
