//! optimization — mode-finding stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide the solver layer for density approximation: a Newton-based
//! mode finder over a user-implemented log-density interface, and a
//! single error/result surface shared by solver, density, and Laplace
//! code. Callers implement a score (and optionally a precision), choose
//! tolerances, and obtain a mode estimate with diagnostics without
//! touching iteration details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **locating density modes**
//!   (`mode_finder`), including configuration of stopping criteria, a
//!   divergence bound, and an explicit iteration-cap policy.
//! - Normalize configuration issues, numerical failures, and model
//!   evaluation errors into a single enum (`errors::SolveError`) with a
//!   common result alias (`SolveResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The solver operates on scalar points and assumes inputs are finite
//!   once validation has passed; invalid states are reported as
//!   `SolveError`, not panics.
//! - Log-density implementations are expected to treat domain violations
//!   as recoverable errors surfaced through the solver layer.
//!
//! Conventions
//! -----------
//! - The mode is located as a root of the score `y(z) = d/dz log p̃(z)`;
//!   curvature is exchanged as the precision `A(z) = -(log p̃)''(z)`.
//! - Public solver entrypoints that can fail return `SolveResult<T>`;
//!   callers never see raw model-specific error enums.
//! - This module and its submodules avoid I/O beyond the optional
//!   stderr progress lines controlled by `NewtonOptions::verbose`.
//!
//! Downstream usage
//! ----------------
//! - Density types implement `LogDensity` for their parameters and call
//!   `find_mode` with an initial guess, data payload, and
//!   `NewtonOptions` to obtain a `SolveOutcome` (via `mode_finder`).
//! - The Laplace layer builds Gaussian approximations from the mode and
//!   the precision evaluated through `precision_at`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns: validation
//!   rules, finite-difference accuracy, and runner termination behavior.
//! - Higher-level integration tests exercise end-to-end mode finding and
//!   Laplace fitting, verifying that configuration mistakes and
//!   numerical problems surface as sensible `SolveError` values.

pub mod errors;
pub mod mode_finder;
