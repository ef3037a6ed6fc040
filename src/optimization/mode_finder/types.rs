//! mode_finder::types — shared numeric aliases and solver constants.
//!
//! Purpose
//! -------
//! Centralize the scalar types and numeric constants used by the Newton
//! mode finder. Keeping these in one place lets the rest of the solver
//! code stay agnostic to the concrete representation and makes the
//! crate's default tolerances and guards easy to audit.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for evaluation points, scores, score
//!   slopes, and precisions (`Point`, `Score`, `Slope`, `Precision`).
//! - Provide the crate defaults for the iteration cap, step tolerance,
//!   and divergence bound.
//! - Define the singularity threshold used to reject Newton updates
//!   whose denominator is numerically indistinguishable from zero.
//!
//! Invariants & assumptions
//! ------------------------
//! - All solver scalars are `f64`; the aliases exist for readability and
//!   to keep signatures self-documenting, not to abstract the float
//!   width.
//! - `SINGULAR_EPS` is an absolute threshold on the magnitude of the
//!   score slope `y'(z)`; callers working with densities whose curvature
//!   is legitimately below this scale must rescale their problem.
//!
//! Conventions
//! -----------
//! - A `Score` is the derivative of the log unnormalized density,
//!   `y(z) = d/dz log p̃(z)`; its root is the mode.
//! - A `Slope` is `y'(z)`, the derivative of the score; a `Precision` is
//!   the negated slope `A(z) = -y'(z)` and is positive at a proper local
//!   maximum.
//! - This module defines no runtime behavior beyond what the solver
//!   requires when these types are instantiated elsewhere.
//!
//! Downstream usage
//! ----------------
//! - Solver modules import these aliases instead of spelling out `f64`
//!   in signatures.
//! - [`DEFAULT_MAX_ITER`] and [`DEFAULT_STEP_TOL`] back the `None`
//!   branches of `Tolerances::new`; [`DEFAULT_DIVERGENCE_BOUND`] backs
//!   `NewtonOptions::new`.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; there are no
//!   dedicated unit tests. Correctness is exercised indirectly by the
//!   solver and validation tests.

/// Evaluation point `z` on the real line.
///
/// Alias for `f64`, used as the canonical argument type throughout the
/// mode finder.
pub type Point = f64;

/// Score `y(z) = d/dz log p̃(z)` of the unnormalized density.
///
/// The mode of `p̃` is a root of the score.
pub type Score = f64;

/// Slope `y'(z)` of the score; the Newton update's denominator.
pub type Slope = f64;

/// Precision `A(z) = -y'(z)`, the curvature of the negative
/// log-density. Positive at a proper local maximum.
pub type Precision = f64;

/// Default iteration cap for Newton solves.
pub const DEFAULT_MAX_ITER: usize = 25;

/// Default step tolerance: terminate once `|z_{k+1} - z_k|` falls to or
/// below this value.
pub const DEFAULT_STEP_TOL: f64 = 1e-6;

/// Default bound on iterate magnitude; exceeding it is reported as
/// divergence rather than silently iterating toward infinity.
pub const DEFAULT_DIVERGENCE_BOUND: f64 = 1e8;

/// Magnitude threshold below which a score slope is treated as
/// numerically zero, making the Newton update undefined.
pub const SINGULAR_EPS: f64 = 1e-12;
