//! Validation helpers for the Newton mode finder.
//!
//! This module centralizes common consistency checks used across the
//! solver interface:
//!
//! - **Option checks**: [`verify_step_tol`], [`verify_divergence_bound`]
//!   ensure numeric settings are finite and strictly positive.
//! - **Input validation**: [`validate_initial_guess`] rejects non-finite
//!   starting points before any iteration runs.
//! - **Evaluation validation**: [`validate_score`], [`validate_slope`],
//!   and [`validate_precision_value`] enforce finiteness of model
//!   outputs at the point where they were produced.
//! - **Iterate validation**: [`validate_iterate`] rejects non-finite or
//!   out-of-bound Newton updates as divergence.
//! - **Mode estimates**: [`validate_mode`] ensures a returned mode is
//!   finite.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`SolveError`] variants, making higher-level code more uniform and
//! easier to debug.
use crate::optimization::{
    errors::{SolveError, SolveResult},
    mode_finder::types::{Point, Precision, Score, Slope},
};

/// Validate the step tolerance.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`SolveError::InvalidStepTol`] if the value is non-finite or ≤ 0.0.
pub fn verify_step_tol(tol: f64) -> SolveResult<()> {
    if !tol.is_finite() {
        return Err(SolveError::InvalidStepTol { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(SolveError::InvalidStepTol { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the divergence bound.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`SolveError::InvalidDivergenceBound`] if the value is
/// non-finite or ≤ 0.0.
pub fn verify_divergence_bound(bound: f64) -> SolveResult<()> {
    if !bound.is_finite() {
        return Err(SolveError::InvalidDivergenceBound {
            bound,
            reason: "Divergence bound must be finite.",
        });
    }
    if bound <= 0.0 {
        return Err(SolveError::InvalidDivergenceBound {
            bound,
            reason: "Divergence bound must be positive.",
        });
    }
    Ok(())
}

/// Validate the initial guess supplied to a solve.
///
/// # Errors
/// Returns [`SolveError::NonFiniteInitialGuess`] for NaN or ±∞.
pub fn validate_initial_guess(z0: Point) -> SolveResult<()> {
    if !z0.is_finite() {
        return Err(SolveError::NonFiniteInitialGuess { value: z0 });
    }
    Ok(())
}

/// Validate a score value produced at `at`.
///
/// # Errors
/// Returns [`SolveError::NonFiniteScore`] for NaN or ±∞.
pub fn validate_score(at: Point, value: Score) -> SolveResult<()> {
    if !value.is_finite() {
        return Err(SolveError::NonFiniteScore { at, value });
    }
    Ok(())
}

/// Validate a score slope produced at `at`.
///
/// # Errors
/// Returns [`SolveError::NonFiniteSlope`] for NaN or ±∞.
pub fn validate_slope(at: Point, value: Slope) -> SolveResult<()> {
    if !value.is_finite() {
        return Err(SolveError::NonFiniteSlope { at, value });
    }
    Ok(())
}

/// Validate an analytic precision value produced at `at`.
///
/// Non-positive precisions are accepted here; the mode finder does not
/// verify concavity. Sign checking is the Laplace layer's responsibility.
///
/// # Errors
/// Returns [`SolveError::NonFinitePrecision`] for NaN or ±∞.
pub fn validate_precision_value(at: Point, value: Precision) -> SolveResult<()> {
    if !value.is_finite() {
        return Err(SolveError::NonFinitePrecision { at, value });
    }
    Ok(())
}

/// Validate a Newton iterate against the divergence bound.
///
/// Non-finite iterates (overflow of the update) and iterates whose
/// magnitude exceeds `bound` are both reported as divergence, which is
/// distinct from exhausting the iteration cap.
///
/// # Errors
/// Returns [`SolveError::Diverged`] with the offending iterate and bound.
pub fn validate_iterate(iterate: Point, bound: f64) -> SolveResult<()> {
    if !iterate.is_finite() || iterate.abs() > bound {
        return Err(SolveError::Diverged { iterate, bound });
    }
    Ok(())
}

/// Validate a mode estimate before it is returned to the caller.
///
/// # Errors
/// Returns [`SolveError::InvalidMode`] if the value is non-finite.
pub fn validate_mode(mode: Point) -> SolveResult<()> {
    if !mode.is_finite() {
        return Err(SolveError::InvalidMode {
            value: mode,
            reason: "Mode estimates must be finite.",
        });
    }
    Ok(())
}
