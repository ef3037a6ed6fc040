//! Errors for the shipped density models (parameter validation and
//! evaluation-point checks).
//!
//! This module defines [`DensityError`], used by the concrete densities
//! and converted into the solver's `SolveError` (and into `PyErr` for
//! PyO3) at module boundaries.
//!
//! ## Conventions
//! - Density parameters must be **finite**; scale parameters must be
//!   **strictly positive**.
//! - Evaluation points must be finite; densities never clamp silently.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Result alias for density construction/validation paths that may
/// produce [`DensityError`].
pub type DensityResult<T> = Result<T, DensityError>;

/// Unified error type for the density model layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityError {
    /// Sigmoid gain is NaN/±inf.
    NonFiniteGain { value: f64 },

    /// Sigmoid shift is NaN/±inf.
    NonFiniteShift { value: f64 },

    /// Standard deviation is ≤ 0 or non-finite.
    InvalidStdDev { value: f64 },

    /// Mean is NaN/±inf.
    NonFiniteMean { value: f64 },

    /// Evaluation point is NaN/±inf.
    NonFiniteInput { value: f64 },
}

impl std::error::Error for DensityError {}

impl std::fmt::Display for DensityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityError::NonFiniteGain { value } => {
                write!(f, "Sigmoid gain must be finite; got: {value}")
            }
            DensityError::NonFiniteShift { value } => {
                write!(f, "Sigmoid shift must be finite; got: {value}")
            }
            DensityError::InvalidStdDev { value } => {
                write!(f, "Standard deviation must be finite and > 0; got: {value}")
            }
            DensityError::NonFiniteMean { value } => {
                write!(f, "Mean must be finite; got: {value}")
            }
            DensityError::NonFiniteInput { value } => {
                write!(f, "Evaluation point must be finite; got: {value}")
            }
        }
    }
}

/// Convert a [`DensityError`] into a Python `ValueError` with the error
/// message.
#[cfg(feature = "python-bindings")]
impl From<DensityError> for PyErr {
    fn from(err: DensityError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
