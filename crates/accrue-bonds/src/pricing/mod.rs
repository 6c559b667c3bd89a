//! Present value and risk statistics.
//!
//! Pricing works in `f64` (yields and discount factors are solver territory)
//! and converts back to `Decimal` at the 8-decimal-place boundary where
//! amounts are reported.

mod yield_solver;

pub use yield_solver::{ytm_from_price, YieldResult};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use accrue_core::daycounts::DayCountConvention;
use accrue_core::types::{CashFlow, Compounding, Date};

use crate::types::RiskStats;

/// Yields with an absolute value above this are treated as percent quotes.
pub const PERCENT_YIELD_THRESHOLD: f64 = 1.5;

/// Normalizes a yield quote to a decimal fraction.
///
/// A quote whose absolute value exceeds 1.5 is assumed to be in percent and
/// divided by 100, so `7.25` and `0.0725` both mean 7.25%. Applied at every
/// yield-accepting entry point, exactly once.
#[must_use]
pub fn normalize_yield(quote: f64) -> f64 {
    if quote.abs() > PERCENT_YIELD_THRESHOLD {
        quote / 100.0
    } else {
        quote
    }
}

/// A cash flow reduced to its time in years from settlement and its amount.
pub(crate) type TimedFlow = (f64, f64);

/// Keeps the flows on or after settlement and converts them to
/// (time-in-years, amount) pairs under the given day count.
pub(crate) fn eligible_flows(
    settlement: Date,
    cashflows: &[CashFlow],
    day_count: DayCountConvention,
) -> Vec<TimedFlow> {
    let dc = day_count.to_day_count();
    cashflows
        .iter()
        .filter(|cf| cf.date() >= settlement)
        .map(|cf| {
            let t = dc.year_fraction(settlement, cf.date()).to_f64().unwrap_or(0.0);
            let amount = cf.amount().to_f64().unwrap_or(0.0);
            (t, amount)
        })
        .collect()
}

/// Present value of timed flows at a (already normalized) yield.
pub(crate) fn present_value(flows: &[TimedFlow], yield_rate: f64, compounding: Compounding) -> f64 {
    flows
        .iter()
        .map(|&(t, amount)| amount * compounding.discount_factor(yield_rate, t))
        .sum()
}

fn to_money(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(8)
}

/// Dirty price at an already normalized yield fraction.
pub(crate) fn dirty_price_at(
    settlement: Date,
    cashflows: &[CashFlow],
    yield_rate: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
) -> Decimal {
    let flows = eligible_flows(settlement, cashflows, day_count);
    to_money(present_value(&flows, yield_rate, compounding))
}

/// Dirty price of a cash flow sequence at a yield.
///
/// Flows strictly before settlement are discarded; flows on the settlement
/// date count at full value. The yield quote is normalized before use and the
/// result is rounded to 8 decimal places.
#[must_use]
pub fn price_from_yield(
    settlement: Date,
    cashflows: &[CashFlow],
    yield_quote: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
) -> Decimal {
    dirty_price_at(
        settlement,
        cashflows,
        normalize_yield(yield_quote),
        day_count,
        compounding,
    )
}

/// Price, duration, convexity, and DV01 in one pass over the flows.
///
/// Macaulay duration is the present-value-weighted mean time to payment;
/// modified duration divides by one period's growth factor; DV01 is the
/// modified-duration price change for one basis point. When nothing remains
/// to discount (or the price nets to zero) every statistic is zero.
#[must_use]
pub fn risk_stats(
    settlement: Date,
    cashflows: &[CashFlow],
    yield_quote: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
) -> RiskStats {
    risk_stats_at(
        settlement,
        cashflows,
        normalize_yield(yield_quote),
        day_count,
        compounding,
    )
}

/// Risk statistics at an already normalized yield fraction.
pub(crate) fn risk_stats_at(
    settlement: Date,
    cashflows: &[CashFlow],
    y: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
) -> RiskStats {
    let flows = eligible_flows(settlement, cashflows, day_count);
    let freq = f64::from(compounding.frequency());

    let mut price = 0.0;
    let mut weighted_time = 0.0;
    let mut convexity_sum = 0.0;
    for &(t, amount) in &flows {
        let pv = amount * compounding.discount_factor(y, t);
        price += pv;
        weighted_time += t * pv;
        convexity_sum += pv * t * (t + 1.0 / freq);
    }

    if flows.is_empty() || price == 0.0 {
        return RiskStats::zero();
    }

    let growth = 1.0 + y / freq;
    let macaulay = weighted_time / price;
    let modified = macaulay / growth;
    let convexity = convexity_sum / (price * growth * growth);
    let dv01 = modified * price * 0.0001;

    RiskStats {
        price: to_money(price),
        macaulay_duration: to_money(macaulay),
        modified_duration: to_money(modified),
        dv01: to_money(dv01),
        convexity: to_money(convexity),
    }
}

/// Current yield: annual coupon income over clean price.
///
/// Zero when the clean price is zero.
#[must_use]
pub fn current_yield(annual_coupon: Decimal, clean_price: Decimal) -> Decimal {
    if clean_price == Decimal::ZERO {
        return Decimal::ZERO;
    }
    (annual_coupon / clean_price).round_dp(8)
}

/// Second-order price change estimate for a yield move.
///
/// Uses the duration/convexity expansion
/// `dP = -D_mod * P * dy + 0.5 * C * P * dy^2`.
#[must_use]
pub fn estimate_price_change(risk: &RiskStats, yield_change: f64) -> Decimal {
    let price = risk.price.to_f64().unwrap_or(0.0);
    let modified = risk.modified_duration.to_f64().unwrap_or(0.0);
    let convexity = risk.convexity.to_f64().unwrap_or(0.0);

    let change =
        -modified * price * yield_change + 0.5 * convexity * price * yield_change * yield_change;
    to_money(change)
}
