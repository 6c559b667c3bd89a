//! Root-finding algorithms.
//!
//! This module provides the guarded Newton solver used for yield inversion.
//! Unlike a bare Newton-Raphson, the solver carries domain guards (a floor
//! below which iterates are reset, a fallback step for flat regions) and an
//! explicit convergence state machine: the result always includes a
//! [`SolverStatus`] rather than conflating "root found" and "ran out of
//! iterations" into one return value.
//!
//! # Example
//!
//! ```rust
//! use accrue_math::solvers::{newton_guarded, DomainGuard, SolverConfig, SolverStatus};
//!
//! // Find the root of x^2 - 2
//! let f = |x: f64| x * x - 2.0;
//! let result = newton_guarded(f, 1.5, DomainGuard::default(), &SolverConfig::default());
//!
//! assert_eq!(result.status, SolverStatus::Converged);
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-7);
//! ```

mod newton;

pub use newton::newton_guarded;

/// Default convergence tolerance on the objective value.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default maximum iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default step for the symmetric-difference derivative estimate.
pub const DEFAULT_FD_STEP: f64 = 1e-5;

/// Configuration for the root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance on `|f(x)|` for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations; the cap is a hard invariant, not tuning.
    pub max_iterations: u32,
    /// Step for the central-difference derivative.
    pub fd_step: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            fd_step: DEFAULT_FD_STEP,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            fd_step: DEFAULT_FD_STEP,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Domain guard for iterates.
///
/// Iterates that become non-finite or fall at or below `floor` are reset to
/// `reset` before continuing, preventing divergence into an invalid domain
/// (for yield solving, the zero-discount-factor region below -1 per period).
#[derive(Debug, Clone, Copy)]
pub struct DomainGuard {
    /// Lowest admissible iterate (exclusive).
    pub floor: f64,
    /// Value an out-of-domain iterate is reset to.
    pub reset: f64,
}

impl Default for DomainGuard {
    fn default() -> Self {
        Self {
            floor: -0.99,
            reset: 1e-4,
        }
    }
}

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// `|f(root)|` fell below the tolerance.
    Converged,
    /// The iteration cap was reached; `root` is the best estimate, not an
    /// exact root.
    CapExceeded,
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root (or best estimate when `status` is `CapExceeded`).
    pub root: f64,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Final objective value at `root`.
    pub residual: f64,
    /// Whether the run converged or hit the cap.
    pub status: SolverStatus,
}

impl SolverResult {
    /// Returns true if the run converged within tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }
}
