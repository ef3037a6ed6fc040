#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::optimization::mode_finder::traits::{MaxIterPolicy, NewtonOptions, Tolerances};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use std::str::FromStr;

/// Coerce a Python object into a read-only 1-D float64 array.
///
/// Accepts, in order of preference:
/// - a contiguous 1-D `numpy.ndarray` of float64,
/// - anything with a `to_numpy` method (e.g. `pandas.Series`),
/// - a plain Python sequence of floats (copied into a fresh array).
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Build validated [`NewtonOptions`] from Python-friendly arguments.
///
/// `None` arguments fall back to the crate defaults; the policy string
/// is parsed case-insensitively ("best_effort" / "escalate" / "error").
#[cfg(feature = "python-bindings")]
pub fn extract_newton_options(
    tol: Option<f64>, max_iter: Option<usize>, policy: Option<&str>,
    divergence_bound: Option<f64>, verbose: Option<bool>,
) -> PyResult<NewtonOptions> {
    let tols = Tolerances::new(tol, max_iter)?;
    let policy = match policy {
        Some(name) => MaxIterPolicy::from_str(name)?,
        None => MaxIterPolicy::BestEffort,
    };
    let opts = NewtonOptions::new(tols, policy, divergence_bound, verbose.unwrap_or(false))?;
    Ok(opts)
}
