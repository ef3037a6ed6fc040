//! mode_finder::finite_diff — finite-difference score-slope helpers.
//!
//! Purpose
//! -------
//! Provide finite-difference approximations to the score slope `y'(z)`
//! around an evaluation point, together with validation and a
//! central-to-forward fallback, so that the rest of the solver can
//! request curvature information from models that do not implement an
//! analytic precision.
//!
//! Key behaviors
//! -------------
//! - Compute central-difference score slopes with post-hoc validation
//!   via [`central_score_slope`].
//! - Fall back to a forward-difference slope when the central
//!   approximation fails validation, via [`forward_score_slope`].
//! - Scale the step size with the magnitude of the evaluation point so
//!   accuracy degrades gracefully away from the origin.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scores are evaluated through [`LogDensity::score`], so any model
//!   error raised during differencing propagates as a [`SolveError`]
//!   rather than being silently absorbed.
//! - Slopes returned from this module are guaranteed to satisfy
//!   [`validate_slope`] on the chosen finite-difference path.
//!
//! Conventions
//! -----------
//! - Central differences are preferred; forward differences are used
//!   only as a fallback when the central approximation fails
//!   validation.
//! - The step size is `ε^{1/3} · (1 + |z|)` with `ε = f64::EPSILON`,
//!   the standard choice balancing truncation and rounding error for
//!   first-derivative central differences.
//!
//! Downstream usage
//! ----------------
//! - The Newton runner requests a slope here when a [`LogDensity`]
//!   implementation reports [`SolveError::PrecisionNotImplemented`].
//! - The Laplace layer obtains fallback precisions through the same
//!   path via `precision_at`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover agreement with analytic slopes on smooth scores,
//!   the central→forward fallback, and error propagation from failing
//!   score evaluations.
//! - Integration tests exercise these helpers implicitly whenever a
//!   model without an analytic precision is solved.
use crate::optimization::{
    errors::SolveResult,
    mode_finder::{
        traits::LogDensity,
        types::{Point, Slope},
        validation::validate_slope,
    },
};

/// central_score_slope — central-difference slope with validation and fallback.
///
/// Purpose
/// -------
/// Approximate `y'(z)` as `(y(z + h) - y(z - h)) / (2h)` with a
/// magnitude-scaled step `h`. If the central approximation fails
/// validation (non-finite), retry once with a forward difference.
///
/// Parameters
/// ----------
/// - `f`: `&F`
///   Model implementing [`LogDensity`]; only `score` is evaluated.
/// - `z`: [`Point`]
///   Point at which the slope is approximated.
/// - `data`: `&F::Data`
///   Model data passed through to `score`.
///
/// Returns
/// -------
/// `SolveResult<Slope>`
///   - `Ok(slope)` containing a finite slope approximation.
///   - `Err(e)` when a score evaluation fails or both difference
///     schemes produce non-finite values.
///
/// Errors
/// ------
/// - Propagates any `SolveError` raised by `f.score` at the stencil
///   points.
/// - `SolveError::NonFiniteSlope`
///   Returned when the forward-difference fallback also fails
///   validation.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - The central-difference validation error is intentionally discarded
///   to avoid coupling callers to the two-stage strategy; only the
///   forward-difference validation result is surfaced.
///
/// Examples
/// --------
/// ```ignore
/// let slope = central_score_slope(&model, z, &data)?;
/// let precision = -slope;
/// ```
pub fn central_score_slope<F: LogDensity>(
    f: &F, z: Point, data: &F::Data,
) -> SolveResult<Slope> {
    let h = fd_step(z);
    let fwd = f.score(z + h, data)?;
    let bwd = f.score(z - h, data)?;
    let slope = (fwd - bwd) / (2.0 * h);
    match validate_slope(z, slope) {
        Ok(()) => Ok(slope),
        Err(_) => forward_score_slope(f, z, data),
    }
}

/// forward_score_slope — forward-difference slope with validation.
///
/// Purpose
/// -------
/// Approximate `y'(z)` as `(y(z + h) - y(z)) / h`, used as the fallback
/// scheme when the central difference fails validation.
///
/// Parameters
/// ----------
/// - `f`: `&F`
///   Model implementing [`LogDensity`]; only `score` is evaluated.
/// - `z`: [`Point`]
///   Point at which the slope is approximated.
/// - `data`: `&F::Data`
///   Model data passed through to `score`.
///
/// Returns
/// -------
/// `SolveResult<Slope>`
///   - `Ok(slope)` containing a finite slope approximation.
///   - `Err(e)` when a score evaluation fails or the slope is
///     non-finite.
///
/// Errors
/// ------
/// - Propagates any `SolveError` raised by `f.score`.
/// - `SolveError::NonFiniteSlope` when the result fails validation.
///
/// Panics
/// ------
/// - Never panics.
pub fn forward_score_slope<F: LogDensity>(
    f: &F, z: Point, data: &F::Data,
) -> SolveResult<Slope> {
    let h = fd_step(z);
    let base = f.score(z, data)?;
    let fwd = f.score(z + h, data)?;
    let slope = (fwd - base) / h;
    validate_slope(z, slope)?;
    Ok(slope)
}

// ---- Helper methods ----

/// Magnitude-scaled finite-difference step: `ε^{1/3} · (1 + |z|)`.
fn fd_step(z: Point) -> f64 {
    f64::EPSILON.cbrt() * (1.0 + z.abs())
}
