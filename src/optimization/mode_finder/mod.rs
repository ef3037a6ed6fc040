//! mode_finder — Newton's-method mode location for 1-D log-densities.
//!
//! Purpose
//! -------
//! Provide a high-level solver for **locating the mode** of an
//! unnormalized density `p̃(z)` from Rust or Python. Callers implement a
//! single trait, [`LogDensity`], and invoke [`find_mode`] to run the
//! Newton iteration with configurable tolerances, a divergence bound,
//! and finite-difference fallbacks for the curvature.
//!
//! Key behaviors
//! -------------
//! - Locate the mode as a root of the score `y(z) = d/dz log p̃(z)` via
//!   the update `z_{k+1} = z_k - y(z_k) / y'(z_k)` ([`run`]).
//! - Expose a single user-facing entrypoint [`find_mode`] that:
//!   - validates the initial guess with [`LogDensity::check`],
//!   - executes the runner with the configured [`NewtonOptions`], and
//!   - normalizes results into a [`SolveOutcome`].
//! - Provide robust finite-difference helpers in [`finite_diff`] for the
//!   score slope when an analytic precision is missing, with post-hoc
//!   validation.
//! - Centralize solver configuration ([`Tolerances`], [`NewtonOptions`])
//!   and validation logic ([`validation`]) so downstream code can assume
//!   sane, finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The solver assumes a single, locally unique root of the score in
//!   the basin of attraction of the initial guess; multimodal densities
//!   require a caller-chosen starting point near the desired mode.
//! - [`LogDensity::score`] and [`LogDensity::precision`] must treat
//!   invalid inputs as recoverable [`SolveError`] values, not panics.
//! - Slopes within [`types::SINGULAR_EPS`] of zero are a hard error;
//!   iterates beyond the configured divergence bound are a hard error
//!   distinct from the iteration cap.
//!
//! Conventions
//! -----------
//! - Implementors supply the precision `A(z) = -(log p̃)''(z)`; the
//!   runner flips the sign to obtain the Newton denominator
//!   `y'(z) = -A(z)`.
//! - Errors bubble up as [`SolveResult<T>`] / [`SolveError`]; this
//!   module and its children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - Density types implement [`LogDensity`], then call [`find_mode`]
//!   with an initial guess, a data payload, and [`NewtonOptions`].
//! - The Laplace layer consumes [`precision_at`] at the returned mode to
//!   build a Gaussian approximation.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns: validation
//!   rules, finite-difference accuracy, runner termination behavior, and
//!   API-level input checks.
//! - The integration suite under `tests/` exercises end-to-end solves on
//!   the shipped densities.
//!
//! [`SolveError`]: crate::optimization::errors::SolveError
//! [`SolveResult<T>`]: crate::optimization::errors::SolveResult
pub mod api;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

pub use self::api::{find_mode, precision_at};
pub use self::traits::{
    LogDensity, MaxIterPolicy, NewtonOptions, SolveOutcome, Termination, Tolerances,
};
pub use self::types::{
    Point, Precision, Score, Slope, DEFAULT_DIVERGENCE_BOUND, DEFAULT_MAX_ITER, DEFAULT_STEP_TOL,
};

/// Curated import surface for solver callers.
pub mod prelude {
    pub use super::api::{find_mode, precision_at};
    pub use super::traits::{LogDensity, MaxIterPolicy, NewtonOptions, SolveOutcome, Tolerances};
    pub use super::types::{Point, Precision, Score};
}
