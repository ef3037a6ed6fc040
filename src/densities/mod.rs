//! densities — concrete log-density models for mode finding and
//! Laplace approximation.
//!
//! Purpose
//! -------
//! Provide ready-made implementations of the solver's `LogDensity`
//! interface: the sigmoid-Gaussian posterior (the canonical Laplace
//! worked example) and a Gaussian reference density with closed-form
//! mode. Problem-specific densities live with their callers; these two
//! exist so the crate's pipeline can be exercised, demonstrated, and
//! bound to Python without external code.
//!
//! Key behaviors
//! -------------
//! - Validate model parameters at construction and evaluation points at
//!   call time, reporting failures as [`errors::DensityError`].
//! - Supply analytic scores and precisions where closed forms exist, so
//!   solves avoid finite differencing.
//! - Expose unnormalized density evaluation on scalar points and
//!   `ndarray` grids for comparison and plotting callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - All shipped densities are unimodal and log-concave on their domain,
//!   so Newton solves from any finite starting point stay in the single
//!   basin of attraction.
//! - Construction returns validated values; evaluation methods may
//!   assume parameters are finite and scales strictly positive.
//!
//! Conventions
//! -----------
//! - Densities are unnormalized: `log_density` is defined up to an
//!   additive constant, which affects neither scores nor modes.
//! - Parameter errors use [`errors::DensityError`]; trait-surface
//!   methods convert them into the solver's `SolveError`.
//!
//! Downstream usage
//! ----------------
//! - The integration suite and the Python bindings drive the full
//!   pipeline through these models.
//! - New densities should follow the same shape: a validated
//!   constructor, closed-form `score`/`precision` where available, and
//!   a `check` hook rejecting invalid evaluation points.
//!
//! Testing notes
//! -------------
//! - Unit tests validate constructors and cross-check analytic
//!   derivatives against finite differences.
//! - End-to-end solves on these densities live in the integration suite.

pub mod errors;
pub mod gaussian;
pub mod sigmoid_gaussian;

pub use self::gaussian::GaussianDensity;
pub use self::sigmoid_gaussian::SigmoidGaussian;
