//! Errors for Laplace approximation (concavity checks, Gaussian
//! construction, and mode-search failures).
//!
//! This module defines [`LaplaceError`], used by the Laplace layer and
//! converted from solver and `statrs` errors at the boundary. Implements
//! `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - A candidate mode is only accepted with **strictly positive, finite
//!   precision**; anything else is reported as a non-concave mode.
//! - Solver failures during the embedded mode search are normalized to
//!   [`LaplaceError::ModeSearchFailed`] with a human-readable status.
use crate::optimization::errors::SolveError;
use statrs::StatsError;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Crate-wide result alias for Laplace operations that may produce
/// [`LaplaceError`].
pub type LaplaceResult<T> = Result<T, LaplaceError>;

/// Unified error type for Laplace approximation.
#[derive(Debug, Clone, PartialEq)]
pub enum LaplaceError {
    // ---- Concavity / inputs ----
    /// Precision at the candidate mode is ≤ 0 or non-finite, so the
    /// point is not a proper local maximum.
    NonConcaveMode { precision: f64 },

    /// Candidate mode is NaN/±inf.
    NonFiniteMode { value: f64 },

    // ---- Gaussian construction ----
    /// Wrapper for statrs::distribution::NormalError.
    InvalidGaussianParams,

    // ---- Embedded mode search ----
    /// Mode search failed; includes a human-readable status/reason.
    ModeSearchFailed { status: String },
}

impl std::error::Error for LaplaceError {}

impl std::fmt::Display for LaplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Concavity / inputs ----
            LaplaceError::NonConcaveMode { precision } => {
                write!(
                    f,
                    "Precision at the candidate mode must be finite and > 0; got: {precision}"
                )
            }
            LaplaceError::NonFiniteMode { value } => {
                write!(f, "Candidate mode must be finite; got: {value}")
            }

            // ---- Gaussian construction ----
            LaplaceError::InvalidGaussianParams => {
                write!(f, "Invalid Gaussian parameters")
            }

            // ---- Embedded mode search ----
            LaplaceError::ModeSearchFailed { status } => {
                write!(f, "Mode search failed: {status}")
            }
        }
    }
}

impl From<StatsError> for LaplaceError {
    fn from(_: StatsError) -> LaplaceError {
        LaplaceError::InvalidGaussianParams
    }
}

impl From<SolveError> for LaplaceError {
    fn from(err: SolveError) -> LaplaceError {
        LaplaceError::ModeSearchFailed { status: err.to_string() }
    }
}

/// Convert a [`LaplaceError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface domain errors
/// cleanly.
#[cfg(feature = "python-bindings")]
impl From<LaplaceError> for PyErr {
    fn from(err: LaplaceError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
