//! # Accrue Math
//!
//! Numerical utilities for the Accrue fixed income valuation engine.
//!
//! Currently this crate provides the guarded Newton root-finder used for
//! yield-from-price inversion. The solver never fails on non-convergence:
//! it reports an explicit [`solvers::SolverStatus`] so callers can
//! distinguish an exact root from a best effort after the iteration cap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod solvers;

pub use solvers::{newton_guarded, DomainGuard, SolverConfig, SolverResult, SolverStatus};
