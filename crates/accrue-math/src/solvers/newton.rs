//! Guarded Newton iteration with a numerical derivative.

use log::{debug, trace};

use crate::solvers::{DomainGuard, SolverConfig, SolverResult, SolverStatus};

/// Derivative magnitudes below this are treated as a flat region.
const FLAT_DERIVATIVE: f64 = 1e-10;

/// Fixed step taken when the derivative is too flat to divide by.
const FLAT_STEP: f64 = 0.01;

/// Newton's method with a symmetric-difference derivative and domain guards.
///
/// The derivative is estimated by central difference with step
/// `config.fd_step`. Three guards keep the iteration well-behaved on
/// pathological objectives:
///
/// - **Convergence**: stops as soon as `|f(x)| < config.tolerance`.
/// - **Flat region**: when the estimated derivative magnitude is below
///   `1e-10`, takes a fixed step of ±0.01 in whichever direction reduces
///   `|f|` instead of dividing by a near-zero derivative.
/// - **Domain floor**: an iterate that becomes non-finite or falls at or
///   below `guard.floor` is reset to `guard.reset` before continuing.
///
/// Exhausting `config.max_iterations` is not an error: the last iterate is
/// returned with [`SolverStatus::CapExceeded`] so the caller can tell a best
/// effort from an exact root.
pub fn newton_guarded<F>(f: F, initial_guess: f64, guard: DomainGuard, config: &SolverConfig) -> SolverResult
where
    F: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let h = config.fd_step;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if fx.abs() < config.tolerance {
            trace!("converged at x = {x} after {iteration} iterations");
            return SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
                status: SolverStatus::Converged,
            };
        }

        let dfx = (f(x + h) - f(x - h)) / (2.0 * h);

        if dfx.abs() < FLAT_DERIVATIVE {
            // Flat region: probe both directions and step toward the
            // smaller gap instead of dividing by the derivative.
            let up = f(x + FLAT_STEP).abs();
            let down = f(x - FLAT_STEP).abs();
            x = if up <= down { x + FLAT_STEP } else { x - FLAT_STEP };
            trace!("flat derivative at iteration {iteration}, stepped to x = {x}");
        } else {
            x -= fx / dfx;
        }

        if !x.is_finite() || x <= guard.floor {
            trace!("iterate out of domain at iteration {iteration}, reset to {}", guard.reset);
            x = guard.reset;
        }
    }

    let residual = f(x);
    debug!(
        "iteration cap {} reached, returning best estimate x = {x} (residual {residual})",
        config.max_iterations
    );
    SolverResult {
        root: x,
        iterations: config.max_iterations,
        residual,
        status: SolverStatus::CapExceeded,
    }
}
