//! Execution helper that runs the Newton iteration on a log-density
//! problem and returns a crate-friendly [`SolveOutcome`].
use crate::optimization::{
    errors::{SolveError, SolveResult},
    mode_finder::{
        finite_diff::central_score_slope,
        traits::{LogDensity, MaxIterPolicy, NewtonOptions, SolveOutcome, Termination},
        types::{Point, Slope, SINGULAR_EPS},
        validation::{validate_iterate, validate_precision_value, validate_score},
    },
};

/// Run the Newton iteration for a log-density problem.
///
/// This is the shared runner used by the high-level `find_mode` API. Each
/// iteration:
/// - evaluates the score `y(z_k)` and its slope `y'(z_k)` (analytic
///   precision when available, finite differences otherwise),
/// - rejects slopes within [`SINGULAR_EPS`] of zero as singular,
/// - applies the update `z_{k+1} = z_k - y(z_k) / y'(z_k)`,
/// - rejects non-finite or out-of-bound iterates as divergence,
/// - terminates once `|z_{k+1} - z_k| <= step_tol` or the cap is reached.
///
/// A cap of `0` performs no iterations and returns the initial guess
/// unchanged with `converged = false`. When the cap is exhausted first,
/// the configured [`MaxIterPolicy`] decides between a best-effort outcome
/// and [`SolveError::MaxIterationsExceeded`].
///
/// # Arguments
/// - `f`: Model implementing [`LogDensity`].
/// - `z0`: Initial guess; assumed finite (validated by the caller).
/// - `data`: Model data passed through to `score`/`precision`.
/// - `opts`: Solver options (tolerances, cap policy, divergence bound,
///   verbosity).
///
/// # Returns
/// A [`SolveOutcome`] containing the last iterate, convergence flag,
/// termination status, iteration count, final step size, and the score
/// magnitude at the returned estimate when it can be evaluated.
///
/// # Errors
/// - [`SolveError::SingularDerivative`] when a slope is numerically zero.
/// - [`SolveError::Diverged`] when an iterate escapes the bound.
/// - [`SolveError::MaxIterationsExceeded`] under `MaxIterPolicy::Escalate`.
/// - Propagates any model error from `score`/`precision` evaluations and
///   any validation error from constructing the outcome.
pub fn run_newton<F: LogDensity>(
    f: &F, z0: Point, data: &F::Data, opts: &NewtonOptions,
) -> SolveResult<SolveOutcome> {
    if opts.verbose {
        log_initial_state(f, z0, data);
    }
    let mut z = z0;
    let mut iterations = 0usize;
    let mut last_step: Option<f64> = None;
    let mut termination = if opts.tols.max_iter == 0 {
        Termination::NoIterations
    } else {
        Termination::MaxIterReached
    };
    for k in 0..opts.tols.max_iter {
        let score = f.score(z, data)?;
        validate_score(z, score)?;
        let slope = score_slope(f, z, data)?;
        if slope.abs() <= SINGULAR_EPS {
            return Err(SolveError::SingularDerivative { at: z, slope });
        }
        let next = z - score / slope;
        validate_iterate(next, opts.divergence_bound)?;
        let step = (next - z).abs();
        z = next;
        iterations = k + 1;
        last_step = Some(step);
        if opts.verbose {
            eprintln!("iter {iterations}: z = {z:.6e}, step = {step:.3e}");
        }
        if step <= opts.tols.step_tol {
            termination = Termination::StepTolReached;
            break;
        }
    }
    if termination == Termination::MaxIterReached && opts.max_iter_policy == MaxIterPolicy::Escalate
    {
        return Err(SolveError::MaxIterationsExceeded {
            max_iter: opts.tols.max_iter,
            last_step: last_step.unwrap_or(f64::INFINITY),
        });
    }
    let score_norm = f.score(z, data).ok().filter(|s| s.is_finite()).map(f64::abs);
    SolveOutcome::new(z, termination, iterations, last_step, score_norm)
}

/// Evaluate the Newton denominator `y'(z)` for a model.
///
/// Behavior:
/// - If the model implements `precision(z, data)`, the value is validated
///   and negated (`y'(z) = -A(z)`).
/// - If the model reports [`SolveError::PrecisionNotImplemented`], a
///   central-difference slope of the score is computed instead (with a
///   forward-difference fallback inside `finite_diff`).
/// - Any other model error is propagated unchanged.
///
/// # Errors
/// - Propagates model errors from `precision` (non-`PrecisionNotImplemented`).
/// - Propagates finite-difference evaluation and validation errors.
pub(crate) fn score_slope<F: LogDensity>(f: &F, z: Point, data: &F::Data) -> SolveResult<Slope> {
    match f.precision(z, data) {
        Ok(a) => {
            validate_precision_value(z, a)?;
            Ok(-a)
        }
        Err(SolveError::PrecisionNotImplemented) => central_score_slope(f, z, data),
        Err(e) => Err(e),
    }
}

// ---- Helper Methods ----

fn log_initial_state<F: LogDensity>(f: &F, z0: Point, data: &F::Data) {
    let ld0 = f.log_density(z0, data).ok();
    let s0 = f.score(z0, data).ok();

    eprintln!(
        "init: z0 = {:.6}{}{}",
        z0,
        ld0.map(|v| format!(", log p(z0) = {v:.6}")).unwrap_or_default(),
        s0.map(|v| format!(", y(z0) = {v:.6}")).unwrap_or_default()
    );
}
