//! laplace::gaussian — Gaussian approximation built from mode and curvature.
//!
//! Purpose
//! -------
//! Provide a thin wrapper around a `statrs` Normal distribution that
//! converts a located mode and a positive precision into a Gaussian
//! approximation of the underlying density. This module enforces the
//! concavity contract (`A > 0`) and exposes density evaluation on scalar
//! points and `ndarray` grids for comparison against the true density.
//!
//! Key behaviors
//! -------------
//! - Construct a [`LaplaceApprox`] from `(mode, precision)` with
//!   `mean = mode` and `std = 1/sqrt(precision)` via
//!   [`LaplaceApprox::from_mode`].
//! - Run the full pipeline — mode search, curvature evaluation at the
//!   mode, Gaussian construction — via [`LaplaceApprox::fit`].
//! - Evaluate the approximating density at arbitrary points
//!   (`pdf`/`ln_pdf`) and on grids (`pdf_grid`).
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed [`LaplaceApprox`] always satisfies
//!   `precision > 0`, `std_dev = 1/sqrt(precision)`, and finite `mode`;
//!   these are checked at construction, never after.
//! - The approximation is immutable once constructed; refitting means
//!   constructing a new value.
//!
//! Conventions
//! -----------
//! - The precision is the curvature of the **negative** log-density at
//!   the mode; implementors of `LogDensity` supply it directly or let
//!   finite differences of the score derive it.
//! - Errors are reported via [`LaplaceResult<T>`]; solver failures
//!   inside `fit` are wrapped as `ModeSearchFailed`.
//!
//! Downstream usage
//! ----------------
//! - Callers compare `pdf_grid` output against the unnormalized density
//!   (rescaled) to judge approximation quality.
//! - The `(mean, std_dev)` pair composes with downstream inference that
//!   expects Gaussian messages.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the concavity rejection paths, the
//!   mean/std/variance arithmetic, and agreement of `pdf` with the
//!   closed-form Gaussian density.
//! - The end-to-end `fit` path on the shipped densities is covered by
//!   the integration suite.
use crate::{
    laplace::errors::{LaplaceError, LaplaceResult},
    optimization::mode_finder::{
        api::{find_mode, precision_at},
        traits::{LogDensity, NewtonOptions, SolveOutcome},
        types::{Point, Precision},
    },
};
use ndarray::Array1;
use statrs::distribution::{Continuous, Normal};

/// Gaussian approximation `N(mode, 1/precision)` to a density at its mode.
///
/// Immutable once constructed; all accessors are O(1).
#[derive(Debug, Clone, PartialEq)]
pub struct LaplaceApprox {
    mode: f64,
    precision: f64,
    std_dev: f64,
    gaussian: Normal,
}

impl LaplaceApprox {
    /// from_mode — build the approximation from a located mode and its precision.
    ///
    /// Purpose
    /// -------
    /// Validate the `(mode, precision)` pair and construct the Gaussian
    /// with `mean = mode` and `std = 1/sqrt(precision)`.
    ///
    /// Parameters
    /// ----------
    /// - `mode`: `f64`
    ///   Candidate mode; must be finite.
    /// - `precision`: `f64`
    ///   Curvature `A = -(log p̃)''(mode)`; must be finite and strictly
    ///   positive for the point to be a proper local maximum.
    ///
    /// Returns
    /// -------
    /// `LaplaceResult<LaplaceApprox>`
    ///   The validated approximation, or an error describing which
    ///   contract was violated.
    ///
    /// Errors
    /// ------
    /// - [`LaplaceError::NonFiniteMode`] for a NaN or infinite mode.
    /// - [`LaplaceError::NonConcaveMode`] for `precision <= 0` or a
    ///   non-finite precision.
    /// - [`LaplaceError::InvalidGaussianParams`] if the underlying
    ///   Normal construction rejects the derived parameters.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - The mode finder does not verify concavity; this constructor is
    ///   the single place where `A > 0` is enforced.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use laplace_fit::laplace::gaussian::LaplaceApprox;
    ///
    /// let approx = LaplaceApprox::from_mode(0.0, 4.0).unwrap();
    /// assert!((approx.std_dev() - 0.5).abs() < 1e-12);
    /// assert!(LaplaceApprox::from_mode(0.0, -1.0).is_err());
    /// ```
    pub fn from_mode(mode: f64, precision: f64) -> LaplaceResult<Self> {
        if !mode.is_finite() {
            return Err(LaplaceError::NonFiniteMode { value: mode });
        }
        if !precision.is_finite() || precision <= 0.0 {
            return Err(LaplaceError::NonConcaveMode { precision });
        }
        let std_dev = 1.0 / precision.sqrt();
        let gaussian = Normal::new(mode, std_dev)?;
        Ok(Self { mode, precision, std_dev, gaussian })
    }

    /// fit — full pipeline: mode search, curvature at the mode, Gaussian.
    ///
    /// Purpose
    /// -------
    /// Run [`find_mode`] on the model, evaluate the precision at the
    /// returned mode via [`precision_at`] (analytic or
    /// finite-difference), and construct the approximation. The solve
    /// outcome is returned alongside the approximation so callers can
    /// inspect convergence diagnostics.
    ///
    /// Parameters
    /// ----------
    /// - `f`: `&F`
    ///   Model implementing [`LogDensity`].
    /// - `z0_init`: [`Point`]
    ///   Initial guess for the mode search; any finite real in the basin
    ///   of attraction of the desired mode.
    /// - `data`: `&F::Data`
    ///   Model data passed through to the solver.
    /// - `opts`: `&NewtonOptions`
    ///   Solver options for the embedded mode search.
    ///
    /// Returns
    /// -------
    /// `LaplaceResult<(SolveOutcome, LaplaceApprox)>`
    ///   The solve diagnostics and the constructed approximation.
    ///
    /// Errors
    /// ------
    /// - [`LaplaceError::ModeSearchFailed`] wrapping any solver error
    ///   (singular derivative, divergence, cap escalation, evaluation
    ///   failures).
    /// - [`LaplaceError::NonConcaveMode`] when the curvature at the
    ///   located point is not strictly positive.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - Under the best-effort cap policy the returned outcome may have
    ///   `converged == false`; the approximation is still built at the
    ///   last iterate. Callers who require convergence should use
    ///   `MaxIterPolicy::Escalate` or inspect the outcome.
    pub fn fit<F: LogDensity>(
        f: &F, z0_init: Point, data: &F::Data, opts: &NewtonOptions,
    ) -> LaplaceResult<(SolveOutcome, Self)> {
        let outcome = find_mode(f, z0_init, data, opts)?;
        let precision: Precision = precision_at(f, outcome.mode, data)?;
        let approx = Self::from_mode(outcome.mode, precision)?;
        Ok((outcome, approx))
    }

    /// Mean of the approximating Gaussian (the located mode).
    pub fn mean(&self) -> f64 {
        self.mode
    }

    /// Standard deviation `1/sqrt(precision)`.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Variance `1/precision`.
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Precision (inverse variance) at the mode.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Normalized density of the approximation at `z`.
    pub fn pdf(&self, z: f64) -> f64 {
        self.gaussian.pdf(z)
    }

    /// Log-density of the approximation at `z`.
    pub fn ln_pdf(&self, z: f64) -> f64 {
        self.gaussian.ln_pdf(z)
    }

    /// Normalized density of the approximation on a grid of points.
    ///
    /// Intended for plotting and comparison against the (rescaled) true
    /// density.
    pub fn pdf_grid(&self, points: &Array1<f64>) -> Array1<f64> {
        points.mapv(|z| self.gaussian.pdf(z))
    }
}
