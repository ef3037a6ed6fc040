//! Public API surface for 1-D mode finding.
//!
//! - [`LogDensity`]: trait users implement for their unnormalized density.
//! - [`NewtonOptions`] and [`Tolerances`]: configuration for the solver.
//! - [`MaxIterPolicy`]: behavior when the iteration cap is reached.
//! - [`SolveOutcome`]: normalized result returned by the high-level
//!   `find_mode` API.
//!
//! Convention: the mode of `p̃(z)` is located as a root of the score
//! `y(z) = d/dz log p̃(z)`. If an analytic precision is provided, it is
//! `A(z) = -(log p̃)''(z)`; the runner flips the sign to obtain the Newton
//! denominator `y'(z) = -A(z)`.
use crate::optimization::{
    errors::{SolveError, SolveResult},
    mode_finder::{
        types::{
            Point, Precision, Score, DEFAULT_DIVERGENCE_BOUND, DEFAULT_MAX_ITER, DEFAULT_STEP_TOL,
        },
        validation::{validate_mode, verify_divergence_bound, verify_step_tol},
    },
};
use std::str::FromStr;

/// User-implemented unnormalized log-density interface.
///
/// The mode finder locates a root of the score `y(z)`; the Laplace layer
/// consumes the precision `A(z)` at that root. If you provide an analytic
/// precision, return `A(z) = -(log p̃)''(z)` (the runner flips the sign to
/// recover `y'(z)`).
///
/// - `type Data`: per-model data carried into `log_density`/`score`/
///   `precision`/`check`.
///
/// Required:
/// - `log_density(z, &Data) -> SolveResult<f64>`: evaluate `log p̃(z)` up
///   to an additive constant.
/// - `score(z, &Data) -> SolveResult<Score>`: evaluate `y(z)`.
///   - Errors: return a descriptive `SolveError` for invalid inputs.
/// - `check(z, &Data) -> SolveResult<()>`: validation hook to reject
///   obviously invalid `z`/`data` pairs. Called once before the solve.
///
/// Optional:
/// - `precision(z, &Data) -> SolveResult<Precision>`: analytic precision
///   `A(z)`. If not implemented, robust finite differences of the score
///   are used automatically.
pub trait LogDensity {
    type Data: 'static;

    // Required methods
    fn log_density(&self, z: Point, data: &Self::Data) -> SolveResult<f64>;
    fn score(&self, z: Point, data: &Self::Data) -> SolveResult<Score>;
    fn check(&self, z: Point, data: &Self::Data) -> SolveResult<()>;

    // Optional methods
    fn precision(&self, _z: Point, _data: &Self::Data) -> SolveResult<Precision> {
        Err(SolveError::PrecisionNotImplemented)
    }
}

/// Behavior when the iteration cap is reached before the step tolerance.
///
/// Variants:
/// - `BestEffort`: return the last iterate with `converged = false`.
/// - `Escalate`: return [`SolveError::MaxIterationsExceeded`] instead.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"BestEffort"`, `"Escalate"`, and the alias `"Error"`). Unknown names
/// return `SolveError::InvalidMaxIterPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxIterPolicy {
    BestEffort,
    Escalate,
}

impl FromStr for MaxIterPolicy {
    type Err = SolveError;

    /// Parse a max-iteration policy from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"BestEffort"` / `"best_effort"`
    /// - `"Escalate"` / `"Error"`
    /// - Any case variant (e.g., `"BESTEFFORT"`, `"escalate"`).
    ///
    /// Any other value returns `SolveError::InvalidMaxIterPolicy` with a
    /// helpful message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "besteffort" | "best_effort" => Ok(MaxIterPolicy::BestEffort),
            "escalate" | "error" => Ok(MaxIterPolicy::Escalate),
            _ => Err(SolveError::InvalidMaxIterPolicy {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'BestEffort' or 'Escalate'.",
            }),
        }
    }
}

/// Solver-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — step tolerance and iteration cap.
/// - `max_iter_policy: MaxIterPolicy` — cap behavior (best-effort vs error).
/// - `divergence_bound: f64` — iterates whose magnitude exceeds this bound
///   terminate the solve with [`SolveError::Diverged`].
/// - `verbose: bool` — if `true`, prints per-iteration progress to stderr.
///
/// Default:
/// - `tols`: `step_tol = 1e-6`, `max_iter = 25`
/// - `max_iter_policy`: `BestEffort`
/// - `divergence_bound`: `1e8`
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonOptions {
    pub tols: Tolerances,
    pub max_iter_policy: MaxIterPolicy,
    pub divergence_bound: f64,
    pub verbose: bool,
}

impl NewtonOptions {
    /// Create a new set of solver options.
    ///
    /// `divergence_bound` defaults to [`DEFAULT_DIVERGENCE_BOUND`] when
    /// `None`; when provided it must be finite and strictly positive.
    ///
    /// # Errors
    /// - [`SolveError::InvalidDivergenceBound`] for a non-finite or
    ///   non-positive bound.
    pub fn new(
        tols: Tolerances, max_iter_policy: MaxIterPolicy, divergence_bound: Option<f64>,
        verbose: bool,
    ) -> SolveResult<Self> {
        let divergence_bound = divergence_bound.unwrap_or(DEFAULT_DIVERGENCE_BOUND);
        verify_divergence_bound(divergence_bound)?;
        Ok(Self { tols, max_iter_policy, divergence_bound, verbose })
    }
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::default(),
            max_iter_policy: MaxIterPolicy::BestEffort,
            divergence_bound: DEFAULT_DIVERGENCE_BOUND,
            verbose: false,
        }
    }
}

/// Step tolerance and iteration cap used by the solver.
///
/// - `step_tol`: terminate once `|z_{k+1} - z_k|` falls to or below this
///   threshold.
/// - `max_iter`: hard cap on the number of Newton updates. A cap of `0`
///   is allowed and returns the initial guess unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub step_tol: f64,
    pub max_iter: usize,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - `step_tol` defaults to `1e-6` when `None`; if provided it must be
    ///   **finite and strictly positive**.
    /// - `max_iter` defaults to `25` when `None`; `0` is admissible and
    ///   means "perform no iterations".
    ///
    /// # Errors
    /// - [`SolveError::InvalidStepTol`] for non-finite or non-positive
    ///   tolerances.
    pub fn new(step_tol: Option<f64>, max_iter: Option<usize>) -> SolveResult<Self> {
        let step_tol = step_tol.unwrap_or(DEFAULT_STEP_TOL);
        verify_step_tol(step_tol)?;
        let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
        Ok(Self { step_tol, max_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances::new(None, None).unwrap()
    }
}

/// How a Newton solve ended.
///
/// - `StepTolReached`: the last update moved by at most `step_tol`.
/// - `MaxIterReached`: the iteration cap was exhausted first.
/// - `NoIterations`: the cap was `0`, so the initial guess was returned
///   unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    StepTolReached,
    MaxIterReached,
    NoIterations,
}

/// Canonical result returned by `find_mode`.
///
/// - `mode`: last computed iterate (the mode estimate).
/// - `converged`: `true` if the step tolerance was met.
/// - `status`: human-readable termination description.
/// - `iterations`: number of Newton updates performed.
/// - `last_step`: size of the final update, if any update was performed.
/// - `score_norm`: `|y(mode)|` at the returned estimate, if the score
///   could be evaluated there.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub mode: Point,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub last_step: Option<f64>,
    pub score_norm: Option<f64>,
}

impl SolveOutcome {
    /// Build a validated [`SolveOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `mode` check via `validate_mode` (finite).
    /// - Maps [`Termination`] into `(converged, status)`.
    ///
    /// # Errors
    /// - Propagates the validation error for `mode`.
    pub fn new(
        mode: Point, termination: Termination, iterations: usize, last_step: Option<f64>,
        score_norm: Option<f64>,
    ) -> SolveResult<Self> {
        validate_mode(mode)?;
        let (converged, status) = match termination {
            Termination::StepTolReached => (true, "Step tolerance reached".to_string()),
            Termination::MaxIterReached => {
                (false, "Iteration cap reached before step tolerance".to_string())
            }
            Termination::NoIterations => (false, "No iterations performed".to_string()),
        };
        Ok(Self { mode, converged, status, iterations, last_step, score_norm })
    }
}
