//! laplace — Gaussian approximation of a density at its mode.
//!
//! Purpose
//! -------
//! Provide the post-solve layer that converts a located mode and the
//! curvature there into a Gaussian approximation of the underlying
//! density: mean at the mode, variance equal to the inverse curvature
//! of the negative log-density.
//!
//! Key behaviors
//! -------------
//! - Define a unified error and result type, [`errors::LaplaceError`]
//!   and [`errors::LaplaceResult`], for approximation-specific failures
//!   (non-concave modes, Gaussian construction, embedded mode-search
//!   errors).
//! - Build validated approximations from `(mode, precision)` pairs via
//!   [`gaussian::LaplaceApprox::from_mode`].
//! - Run the full pipeline — mode search, curvature evaluation,
//!   Gaussian construction — via [`gaussian::LaplaceApprox::fit`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The precision handed to this layer is the curvature of the
//!   negative log-density at the candidate mode; it must be finite and
//!   strictly positive or the candidate is rejected.
//! - The mode finder itself never verifies concavity; all sign checking
//!   happens here.
//!
//! Conventions
//! -----------
//! - `std = 1/sqrt(precision)`; no covariance beyond the scalar case is
//!   modeled.
//! - Approximations are immutable; all accessors are O(1).
//!
//! Downstream usage
//! ----------------
//! - Plotting/reporting callers evaluate `pdf`/`pdf_grid` against the
//!   (rescaled) true density.
//! - Composition with downstream Gaussian inference uses the
//!   `(mean, std_dev)` pair.
//!
//! Testing notes
//! -------------
//! - Unit tests cover rejection paths and accessor arithmetic.
//! - The integration suite runs the full pipeline on the shipped
//!   densities, including the sigmoid-Gaussian worked example.

pub mod errors;
pub mod gaussian;

pub use self::errors::{LaplaceError, LaplaceResult};
pub use self::gaussian::LaplaceApprox;
