//! Yield-from-price inversion.

use log::debug;

use accrue_core::daycounts::DayCountConvention;
use accrue_core::types::{CashFlow, Compounding, Date};
use accrue_math::{newton_guarded, DomainGuard, SolverConfig, SolverStatus};

use crate::error::{BondError, BondResult};
use crate::pricing::{eligible_flows, present_value};

/// Seed used when the target price is at or above par.
const SEED_AT_OR_ABOVE_PAR: f64 = 0.05;

/// Seed used when the target price is below par.
const SEED_BELOW_PAR: f64 = 0.02;

/// Result of a yield solve.
#[derive(Debug, Clone, Copy)]
pub struct YieldResult {
    /// Solved yield as a decimal fraction
    pub yield_value: f64,
    /// Iterations the solver performed
    pub iterations: u32,
    /// Final price gap at the solved yield
    pub residual: f64,
    /// Whether the solve converged or hit the iteration cap
    pub status: SolverStatus,
}

impl YieldResult {
    /// Returns true if the solve converged within tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }
}

/// Solves for the yield that reproduces a target dirty price.
///
/// The objective is the price gap `pv(y) - target` over the flows on or
/// after settlement, inverted by the guarded Newton solver. The seed is 5%
/// for targets at or above 100 and 2% below. Hitting the iteration cap is
/// not an error: the best estimate comes back with its status so callers can
/// surface non-convergence.
///
/// A sequence with no eligible flows solves trivially to a zero yield.
///
/// # Errors
///
/// Returns `BondError::InvalidTargetPrice` when the target is NaN or
/// infinite.
pub fn ytm_from_price(
    settlement: Date,
    cashflows: &[CashFlow],
    target_price: f64,
    day_count: DayCountConvention,
    compounding: Compounding,
) -> BondResult<YieldResult> {
    if !target_price.is_finite() {
        return Err(BondError::invalid_target_price(target_price));
    }

    let flows = eligible_flows(settlement, cashflows, day_count);
    if flows.is_empty() {
        debug!("no flows on or after {settlement}, yield solve is trivial");
        return Ok(YieldResult {
            yield_value: 0.0,
            iterations: 0,
            residual: 0.0,
            status: SolverStatus::Converged,
        });
    }

    let seed = if target_price >= 100.0 {
        SEED_AT_OR_ABOVE_PAR
    } else {
        SEED_BELOW_PAR
    };

    let objective = |y: f64| present_value(&flows, y, compounding) - target_price;
    let result = newton_guarded(objective, seed, DomainGuard::default(), &SolverConfig::default());

    debug!(
        "yield solve for target {target_price}: y = {} after {} iterations ({:?})",
        result.root, result.iterations, result.status
    );

    Ok(YieldResult {
        yield_value: result.root,
        iterations: result.iterations,
        residual: result.residual,
        status: result.status,
    })
}
