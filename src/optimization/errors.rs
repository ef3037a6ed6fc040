use crate::densities::errors::DensityError;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Crate-wide result alias for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    // ---- Curvature ----
    /// Implies that finite differences should be used.
    PrecisionNotImplemented,

    /// Precision returned by a model must be finite.
    NonFinitePrecision {
        at: f64,
        value: f64,
    },

    // ---- Score evaluation ----
    /// Score values need to be finite.
    NonFiniteScore {
        at: f64,
        value: f64,
    },

    /// Score slope values need to be finite.
    NonFiniteSlope {
        at: f64,
        value: f64,
    },

    // ---- Newton iteration ----
    /// Newton denominator is zero or numerically indistinguishable from zero.
    SingularDerivative {
        at: f64,
        slope: f64,
    },

    /// Iterate left the admissible region around the initial guess.
    Diverged {
        iterate: f64,
        bound: f64,
    },

    /// Iteration cap reached before the step tolerance, under the
    /// escalating max-iteration policy.
    MaxIterationsExceeded {
        max_iter: usize,
        last_step: f64,
    },

    // ---- NewtonOptions ----
    /// Step tolerance needs to be positive and finite.
    InvalidStepTol {
        tol: f64,
        reason: &'static str,
    },

    /// Divergence bound needs to be positive and finite.
    InvalidDivergenceBound {
        bound: f64,
        reason: &'static str,
    },

    /// Invalid max-iteration policy name.
    InvalidMaxIterPolicy {
        name: String,
        reason: &'static str,
    },

    // ---- Inputs / outcome ----
    /// Initial guess must be finite.
    NonFiniteInitialGuess {
        value: f64,
    },

    /// Estimated mode must be finite.
    InvalidMode {
        value: f64,
        reason: &'static str,
    },

    // ---- Density errors ----
    /// Sigmoid gain must be finite.
    NonFiniteGain {
        value: f64,
    },

    /// Sigmoid shift must be finite.
    NonFiniteShift {
        value: f64,
    },

    /// Standard deviation must be finite and > 0.
    InvalidStdDev {
        value: f64,
    },

    /// Mean must be finite.
    NonFiniteMean {
        value: f64,
    },

    /// Evaluation point must be finite.
    NonFiniteInput {
        value: f64,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for SolveError {}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Curvature ----
            SolveError::PrecisionNotImplemented => {
                write!(f, "Analytic precision not implemented")
            }
            SolveError::NonFinitePrecision { at, value } => {
                write!(f, "Non-finite precision at z = {at}: {value}")
            }

            // ---- Score evaluation ----
            SolveError::NonFiniteScore { at, value } => {
                write!(f, "Non-finite score at z = {at}: {value}")
            }
            SolveError::NonFiniteSlope { at, value } => {
                write!(f, "Non-finite score slope at z = {at}: {value}")
            }

            // ---- Newton iteration ----
            SolveError::SingularDerivative { at, slope } => {
                write!(f, "Singular derivative at z = {at}: slope {slope} is numerically zero")
            }
            SolveError::Diverged { iterate, bound } => {
                write!(f, "Newton iteration diverged: iterate {iterate} exceeds bound {bound}")
            }
            SolveError::MaxIterationsExceeded { max_iter, last_step } => {
                write!(
                    f,
                    "Iteration cap {max_iter} reached before step tolerance; last step {last_step}"
                )
            }

            // ---- NewtonOptions ----
            SolveError::InvalidStepTol { tol, reason } => {
                write!(f, "Invalid step tolerance {tol}: {reason}")
            }
            SolveError::InvalidDivergenceBound { bound, reason } => {
                write!(f, "Invalid divergence bound {bound}: {reason}")
            }
            SolveError::InvalidMaxIterPolicy { name, reason } => {
                write!(f, "Invalid max-iteration policy '{name}': {reason}")
            }

            // ---- Inputs / outcome ----
            SolveError::NonFiniteInitialGuess { value } => {
                write!(f, "Initial guess must be finite; got: {value}")
            }
            SolveError::InvalidMode { value, reason } => {
                write!(f, "Invalid mode estimate {value}: {reason}")
            }

            // ---- Density errors ----
            SolveError::NonFiniteGain { value } => {
                write!(f, "Sigmoid gain must be finite; got: {value}")
            }
            SolveError::NonFiniteShift { value } => {
                write!(f, "Sigmoid shift must be finite; got: {value}")
            }
            SolveError::InvalidStdDev { value } => {
                write!(f, "Standard deviation must be finite and > 0; got: {value}")
            }
            SolveError::NonFiniteMean { value } => {
                write!(f, "Mean must be finite; got: {value}")
            }
            SolveError::NonFiniteInput { value } => {
                write!(f, "Evaluation point must be finite; got: {value}")
            }

            // ---- Fallback ----
            SolveError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<DensityError> for SolveError {
    fn from(err: DensityError) -> Self {
        match err {
            DensityError::NonFiniteGain { value } => SolveError::NonFiniteGain { value },
            DensityError::NonFiniteShift { value } => SolveError::NonFiniteShift { value },
            DensityError::InvalidStdDev { value } => SolveError::InvalidStdDev { value },
            DensityError::NonFiniteMean { value } => SolveError::NonFiniteMean { value },
            DensityError::NonFiniteInput { value } => SolveError::NonFiniteInput { value },
        }
    }
}

/// Convert a [`SolveError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface solver errors cleanly.
#[cfg(feature = "python-bindings")]
impl From<SolveError> for PyErr {
    fn from(err: SolveError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
