//! High-level entry points for locating the mode of a user-provided
//! [`LogDensity`].
//!
//! `find_mode` validates the initial guess, runs the model's `check`
//! hook, and delegates to the Newton runner. `precision_at` exposes the
//! curvature evaluation (analytic or finite-difference) used by the
//! Laplace layer.
use crate::optimization::{
    errors::SolveResult,
    mode_finder::{
        run::{run_newton, score_slope},
        traits::{LogDensity, NewtonOptions, SolveOutcome},
        types::{Point, Precision},
        validation::validate_initial_guess,
    },
};

/// Locate the mode of `p̃(z)` by Newton's method on its score.
///
/// # Behavior
/// - Validates that `z0_init` is finite.
/// - Validates the initial guess via `f.check(z0_init, data)`.
/// - Runs the Newton iteration `z_{k+1} = z_k - y(z_k) / y'(z_k)` with
///   the configured tolerances, divergence bound, and cap policy.
///
/// The solver assumes a single, locally unique root in the basin of
/// attraction of `z0_init`; with multiple modes, the caller must choose
/// an initial guess near the desired one.
///
/// # Parameters
/// - `f`: Your model implementing [`LogDensity`].
/// - `z0_init`: Initial guess; any finite real.
/// - `data`: Model data passed through to `score`/`precision`.
/// - `opts`: Solver options (tolerances, cap policy, divergence bound,
///   verbosity).
///
/// # Errors
/// - [`crate::optimization::errors::SolveError::NonFiniteInitialGuess`]
///   for a NaN or infinite starting point.
/// - Propagates any error from `f.check`.
/// - Propagates runtime errors from the runner (singular derivative,
///   divergence, cap escalation, model evaluation failures).
///
/// # Returns
/// A [`SolveOutcome`] containing the mode estimate, convergence flag,
/// termination status, iteration count, final step size, and score
/// magnitude at the estimate.
///
/// # Example
/// ```rust
/// use laplace_fit::densities::gaussian::GaussianDensity;
/// use laplace_fit::optimization::mode_finder::{find_mode, NewtonOptions};
///
/// let f = GaussianDensity::new(1.0, 2.0).unwrap();
/// let out = find_mode(&f, -7.5, &(), &NewtonOptions::default()).unwrap();
/// assert!(out.converged);
/// assert!((out.mode - 1.0).abs() < 1e-6);
/// ```
pub fn find_mode<F: LogDensity>(
    f: &F, z0_init: Point, data: &F::Data, opts: &NewtonOptions,
) -> SolveResult<SolveOutcome> {
    validate_initial_guess(z0_init)?;
    f.check(z0_init, data)?;
    run_newton(f, z0_init, data, opts)
}

/// Evaluate the precision `A(z) = -(log p̃)''(z)` of a model at `z`.
///
/// Uses the model's analytic `precision` when implemented, otherwise a
/// validated finite-difference slope of the score. The sign of the
/// result is **not** checked here: non-positive precisions are returned
/// as-is so the Laplace layer can reject non-concave candidates with a
/// dedicated error.
///
/// # Errors
/// - Propagates model evaluation errors and finite-difference
///   validation errors.
pub fn precision_at<F: LogDensity>(f: &F, z: Point, data: &F::Data) -> SolveResult<Precision> {
    let slope = score_slope(f, z, data)?;
    Ok(-slope)
}
