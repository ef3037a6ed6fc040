//! laplace_fit — 1-D mode finding and Laplace approximation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the mode-finding and Laplace-approximation pipeline to Python
//! via the `_laplace_fit` extension module. When the `python-bindings`
//! feature is enabled, this module defines the Python-facing classes for
//! the shipped densities and the Gaussian approximation.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`densities`, `laplace`, and
//!   `optimization`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for
//!   the `_laplace_fit` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror
//!   the invariants and signatures of their Rust counterparts (e.g.
//!   [`SigmoidGaussian`], [`LaplaceApprox`]).
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//! - Python-exposed methods accept numpy arrays, pandas Series, or plain
//!   sequences of float64 wherever a grid of points is expected.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - External users are expected to interact with either the safe Rust
//!   APIs or the Python classes; the PyO3 plumbing is considered
//!   internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by the integration suite under `tests/`.
//! - The Python classes are thin wrappers; their behavior is exercised
//!   through the Rust types they delegate to.

pub mod densities;
pub mod laplace;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    densities::sigmoid_gaussian::SigmoidGaussian,
    laplace::gaussian::LaplaceApprox,
    optimization::mode_finder::{api, traits::SolveOutcome},
    utils::{extract_f64_array, extract_newton_options},
};

/// SigmoidPosterior — Python-facing wrapper for the sigmoid-Gaussian density.
///
/// Purpose
/// -------
/// Expose the [`SigmoidGaussian`] posterior to Python callers, forwarding
/// mode finding and Laplace fitting to the core solver while caching the
/// latest solve diagnostics for inspection.
///
/// Parameters
/// ----------
/// Constructed from Python via `SigmoidPosterior(gain, shift)`:
/// - `gain`: `f64`
///   Gain of the logistic factor; finite, may be negative or zero.
/// - `shift`: `f64`
///   Shift of the logistic factor; finite.
///
/// Fields
/// ------
/// - `inner`: [`SigmoidGaussian`]
///   Validated density parameters.
/// - `outcome`: `Option<SolveOutcome>`
///   Diagnostics of the most recent solve, if any.
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer [`SigmoidGaussian`] and the solver API directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "laplace_fit")]
pub struct SigmoidPosterior {
    /// The underlying Rust density.
    inner: SigmoidGaussian,
    /// Diagnostics of the most recent solve.
    outcome: Option<SolveOutcome>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SigmoidPosterior {
    /// Unnormalized posterior `p(z) ∝ sigmoid(gain·z + shift) · exp(-z²/2)`.
    #[new]
    #[pyo3(text_signature = "(gain, shift, /)")]
    pub fn new(gain: f64, shift: f64) -> PyResult<Self> {
        let inner = SigmoidGaussian::new(gain, shift)?;
        Ok(Self { inner, outcome: None })
    }

    /// Locate the mode by Newton's method and return it.
    #[pyo3(
        signature = (z0, max_iter = None, tol = None, policy = None, divergence_bound = None, verbose = None),
        text_signature = "(self, z0, /, max_iter=25, tol=1e-6, policy='best_effort', \
                          divergence_bound=1e8, verbose=False)"
    )]
    pub fn find_mode(
        &mut self, z0: f64, max_iter: Option<usize>, tol: Option<f64>, policy: Option<&str>,
        divergence_bound: Option<f64>, verbose: Option<bool>,
    ) -> PyResult<f64> {
        let opts = extract_newton_options(tol, max_iter, policy, divergence_bound, verbose)?;
        let outcome = api::find_mode(&self.inner, z0, &(), &opts)?;
        let mode = outcome.mode;
        self.outcome = Some(outcome);
        Ok(mode)
    }

    /// Run the full pipeline and return the Gaussian approximation.
    #[pyo3(
        signature = (z0, max_iter = None, tol = None, policy = None, divergence_bound = None, verbose = None),
        text_signature = "(self, z0, /, max_iter=25, tol=1e-6, policy='best_effort', \
                          divergence_bound=1e8, verbose=False)"
    )]
    pub fn laplace(
        &mut self, z0: f64, max_iter: Option<usize>, tol: Option<f64>, policy: Option<&str>,
        divergence_bound: Option<f64>, verbose: Option<bool>,
    ) -> PyResult<LaplaceApproximation> {
        let opts = extract_newton_options(tol, max_iter, policy, divergence_bound, verbose)?;
        let (outcome, approx) = LaplaceApprox::fit(&self.inner, z0, &(), &opts)?;
        self.outcome = Some(outcome);
        Ok(LaplaceApproximation { inner: approx })
    }

    /// Evaluate the unnormalized density on a grid of points.
    pub fn unnorm_density<'py>(
        &self, py: Python<'py>, points: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let arr = extract_f64_array(py, points)?;
        let slice = arr.as_slice().map_err(|_| {
            PyValueError::new_err("points must be a 1-D contiguous float64 array or sequence")
        })?;
        Ok(slice.iter().map(|&z| self.inner.unnorm_density(z)).collect())
    }

    #[getter]
    pub fn gain(&self) -> f64 {
        self.inner.gain()
    }

    #[getter]
    pub fn shift(&self) -> f64 {
        self.inner.shift()
    }

    #[getter]
    pub fn results(&self) -> PyResult<ModeOutcome> {
        match &self.outcome {
            Some(outcome) => Ok(ModeOutcome { inner: outcome.clone() }),
            None => Err(PyValueError::new_err("mode has not been located yet")),
        }
    }
}

/// ModeOutcome — solve diagnostics exposed to Python.
///
/// Purpose
/// -------
/// Present the key solver diagnostics from [`SolveOutcome`] to Python
/// code in a lightweight, read-only wrapper.
///
/// Parameters
/// ----------
/// Instances are constructed internally by the `SigmoidPosterior.results`
/// getter and are not created directly by user code.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "laplace_fit")]
pub struct ModeOutcome {
    /// Underlying Rust SolveOutcome.
    pub inner: SolveOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ModeOutcome {
    #[getter]
    pub fn mode(&self) -> f64 {
        self.inner.mode
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn last_step(&self) -> Option<f64> {
        self.inner.last_step
    }

    #[getter]
    pub fn score_norm(&self) -> Option<f64> {
        self.inner.score_norm
    }
}

/// LaplaceApproximation — Gaussian approximation exposed to Python.
///
/// Purpose
/// -------
/// Expose the [`LaplaceApprox`] constructed from a `(mode, precision)`
/// pair (or by `SigmoidPosterior.laplace`) with its `(mean, std)` pair
/// and density evaluation for comparison/plotting.
///
/// Parameters
/// ----------
/// Constructed from Python via `LaplaceApproximation(mode, precision)`:
/// - `mode`: `f64`
///   Located mode; finite.
/// - `precision`: `f64`
///   Curvature of the negative log-density at the mode; finite and > 0.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "laplace_fit")]
pub struct LaplaceApproximation {
    /// Underlying Rust LaplaceApprox.
    pub inner: LaplaceApprox,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LaplaceApproximation {
    /// Gaussian `N(mode, 1/precision)` centered at a located mode.
    #[new]
    #[pyo3(text_signature = "(mode, precision, /)")]
    pub fn from_mode(mode: f64, precision: f64) -> PyResult<Self> {
        let inner = LaplaceApprox::from_mode(mode, precision)?;
        Ok(Self { inner })
    }

    /// Evaluate the approximating density on a grid of points.
    pub fn pdf<'py>(&self, py: Python<'py>, points: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
        let arr = extract_f64_array(py, points)?;
        let slice = arr.as_slice().map_err(|_| {
            PyValueError::new_err("points must be a 1-D contiguous float64 array or sequence")
        })?;
        Ok(slice.iter().map(|&z| self.inner.pdf(z)).collect())
    }

    #[getter]
    pub fn mean(&self) -> f64 {
        self.inner.mean()
    }

    #[getter]
    pub fn std_dev(&self) -> f64 {
        self.inner.std_dev()
    }

    #[getter]
    pub fn variance(&self) -> f64 {
        self.inner.variance()
    }

    #[getter]
    pub fn precision(&self) -> f64 {
        self.inner.precision()
    }
}

/// _laplace_fit — PyO3 module initializer for the Python extension.
///
/// Registers the density wrapper, the solve-diagnostics wrapper, and the
/// Gaussian approximation class. Invoked automatically by Python when
/// importing the compiled extension; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _laplace_fit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<SigmoidPosterior>()?;
    m.add_class::<ModeOutcome>()?;
    m.add_class::<LaplaceApproximation>()?;
    Ok(())
}
