//! Top-level valuation operations.
//!
//! Four entry points cover the price/yield directions for both schedule-based
//! instruments and explicit cash flow sequences. Each one resolves the
//! settlement date (explicit date or today, plus lag, rolled to a business
//! day), normalizes any yield quote exactly once, and returns a full
//! [`Valuation`].

use log::debug;
use rust_decimal::Decimal;

use accrue_core::calendars::BusinessDayRoll;
use accrue_core::daycounts::DayCountConvention;
use accrue_core::types::{sort_cashflows, CashFlow, Compounding, Date};

use crate::accrued::{accrued_interest, adjacent_coupons};
use crate::error::{BondError, BondResult};
use crate::pricing::{dirty_price_at, normalize_yield, risk_stats_at, ytm_from_price};
use crate::schedule::{build_schedule, BondSchedule};
use crate::types::{InstrumentTerms, SettlementSpec, SolverDiagnostics, Valuation};

/// Prices a scheduled instrument at a yield.
///
/// Generates the coupon schedule, resolves settlement, and values the flows
/// on or after settlement. The dirty price is the discounted sum; accrued
/// interest prorates the current period's coupon; clean is dirty less
/// accrued.
///
/// # Errors
///
/// Propagates schedule generation failures.
pub fn price_from_schedule(
    terms: &InstrumentTerms,
    settlement: &SettlementSpec,
    yield_quote: f64,
) -> BondResult<Valuation> {
    let schedule = build_schedule(terms)?;
    let settle = settlement.resolve(terms.business_roll());
    let y = normalize_yield(yield_quote);

    debug!("pricing {}..{} at y = {y}, settlement {settle}", terms.issue(), terms.maturity());
    Ok(value_schedule(terms, &schedule, settle, y, None))
}

/// Solves the yield of a scheduled instrument from a target dirty price.
///
/// The valuation is then computed at the solved yield, with the solver's
/// iteration count, residual, and convergence status attached.
///
/// # Errors
///
/// Propagates schedule generation failures and rejects non-finite target
/// prices.
pub fn yield_from_schedule(
    terms: &InstrumentTerms,
    settlement: &SettlementSpec,
    target_price: f64,
) -> BondResult<Valuation> {
    let schedule = build_schedule(terms)?;
    let settle = settlement.resolve(terms.business_roll());

    let solved = ytm_from_price(
        settle,
        &schedule.cashflows,
        target_price,
        terms.day_count(),
        terms.compounding(),
    )?;
    let diagnostics = SolverDiagnostics {
        iterations: solved.iterations,
        residual: solved.residual,
        status: solved.status,
    };

    Ok(value_schedule(
        terms,
        &schedule,
        settle,
        solved.yield_value,
        Some(diagnostics),
    ))
}

/// Prices an explicit cash flow sequence at a yield.
///
/// The sequence is sorted by date before valuation; flows strictly before
/// the resolved settlement are discarded. Explicit sequences carry no coupon
/// structure, so accrued interest is zero and clean equals dirty.
///
/// # Errors
///
/// Returns `BondError::EmptyCashflowSet` when the sequence is empty.
pub fn price_from_cashflows(
    settlement: &SettlementSpec,
    roll: BusinessDayRoll,
    cashflows: &[CashFlow],
    yield_quote: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
) -> BondResult<Valuation> {
    let flows = sorted_flows(cashflows)?;
    let settle = settlement.resolve(roll);
    let y = normalize_yield(yield_quote);

    Ok(value_flows(flows, settle, y, day_count, compounding, None))
}

/// Solves the yield of an explicit cash flow sequence from a target price.
///
/// A sequence whose flows are all in the past is valid: the valuation is
/// all-zero with a trivially converged solve.
///
/// # Errors
///
/// Returns `BondError::EmptyCashflowSet` when the sequence is empty and
/// rejects non-finite target prices.
pub fn yield_from_cashflows(
    settlement: &SettlementSpec,
    roll: BusinessDayRoll,
    cashflows: &[CashFlow],
    target_price: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
) -> BondResult<Valuation> {
    let flows = sorted_flows(cashflows)?;
    let settle = settlement.resolve(roll);

    let solved = ytm_from_price(settle, &flows, target_price, day_count, compounding)?;
    let diagnostics = SolverDiagnostics {
        iterations: solved.iterations,
        residual: solved.residual,
        status: solved.status,
    };

    Ok(value_flows(
        flows,
        settle,
        solved.yield_value,
        day_count,
        compounding,
        Some(diagnostics),
    ))
}

fn sorted_flows(cashflows: &[CashFlow]) -> BondResult<Vec<CashFlow>> {
    if cashflows.is_empty() {
        return Err(BondError::EmptyCashflowSet);
    }
    let mut flows = cashflows.to_vec();
    sort_cashflows(&mut flows);
    Ok(flows)
}

fn value_schedule(
    terms: &InstrumentTerms,
    schedule: &BondSchedule,
    settlement: Date,
    y: f64,
    solver: Option<SolverDiagnostics>,
) -> Valuation {
    let dirty_price = dirty_price_at(
        settlement,
        &schedule.cashflows,
        y,
        terms.day_count(),
        terms.compounding(),
    );

    // Period boundaries are the issue date plus every coupon date; the
    // current period's coupon is the one paid at the next boundary.
    let mut boundaries = Vec::with_capacity(schedule.coupon_dates.len() + 1);
    boundaries.push(terms.issue());
    boundaries.extend_from_slice(&schedule.coupon_dates);
    let (last, next) = adjacent_coupons(&boundaries, settlement);
    let period_coupon = next
        .and_then(|end| schedule.periods.iter().find(|p| p.end == end))
        .map_or(Decimal::ZERO, |p| p.coupon_amount);
    let accrued = accrued_interest(terms.day_count(), last, settlement, next, period_coupon);

    let risk = risk_stats_at(
        settlement,
        &schedule.cashflows,
        y,
        terms.day_count(),
        terms.compounding(),
    );

    Valuation {
        settlement,
        dirty_price,
        clean_price: dirty_price - accrued,
        accrued,
        yield_value: y,
        risk,
        cashflows: schedule.cashflows.clone(),
        solver,
    }
}

fn value_flows(
    flows: Vec<CashFlow>,
    settlement: Date,
    y: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
    solver: Option<SolverDiagnostics>,
) -> Valuation {
    let dirty_price = dirty_price_at(settlement, &flows, y, day_count, compounding);
    let risk = risk_stats_at(settlement, &flows, y, day_count, compounding);

    Valuation {
        settlement,
        dirty_price,
        clean_price: dirty_price,
        accrued: Decimal::ZERO,
        yield_value: y,
        risk,
        cashflows: flows,
        solver,
    }
}
