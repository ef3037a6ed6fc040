//! Integration tests for mode finding and Laplace approximation.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from a validated density, through
//!   the Newton mode search, to the curvature evaluation and the
//!   Gaussian approximation.
//! - Exercise the worked sigmoid-Gaussian example with its closed-form
//!   score and precision, not just toy linear scores.
//!
//! Coverage
//! --------
//! - `densities::sigmoid_gaussian` and `densities::gaussian`:
//!   - Construction and analytic score/precision surfaces.
//! - `optimization::mode_finder`:
//!   - `find_mode` with default and custom `NewtonOptions`, the zero-cap
//!     and tolerance boundaries, idempotence at the fixed point, and the
//!     escalating cap policy.
//! - `laplace::gaussian::LaplaceApprox`:
//!   - `from_mode` concavity contract and the full `fit` pipeline,
//!     including grid density evaluation.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (validators,
//!   finite-difference helpers) — these are covered by unit tests.
//! - Python bindings and user-facing API wrappers — those are expected
//!   to be tested at a higher integration or system level.
use laplace_fit::{
    densities::{gaussian::GaussianDensity, sigmoid_gaussian::SigmoidGaussian},
    laplace::{errors::LaplaceError, gaussian::LaplaceApprox},
    optimization::{
        errors::SolveError,
        mode_finder::{
            find_mode, precision_at,
            traits::{LogDensity, MaxIterPolicy, NewtonOptions, Tolerances},
        },
    },
};
use ndarray::Array1;

/// Mode of σ(20z + 4)·exp(-z²/2), the root of y(z) = 20·σ(-(20z+4)) - z.
const WORKED_EXAMPLE_MODE: f64 = 0.077_479_580_984_378_6;

/// Precision 1 + 400·σ(u)·(1-σ(u)) evaluated at the mode above.
const WORKED_EXAMPLE_PRECISION: f64 = 2.543_588_534_265_2;

/// Purpose
/// -------
/// Construct the worked-example posterior `p(z) ∝ σ(20z + 4)·exp(-z²/2)`
/// used throughout the pipeline tests.
///
/// Invariants
/// ----------
/// - The density is strictly log-concave (precision ≥ 1 everywhere), so
///   Newton converges from any finite starting point within the
///   divergence bound.
fn worked_example() -> SigmoidGaussian {
    SigmoidGaussian::new(20.0, 4.0)
        .expect("SigmoidGaussian::new should accept finite parameters")
}

/// Purpose
/// -------
/// Provide a stable, documented baseline `NewtonOptions` configuration
/// reflecting "typical" user settings.
///
/// Configuration
/// -------------
/// - Tolerances: `step_tol = 1e-6`, `max_iter = 25` (the crate defaults).
/// - Cap policy: `BestEffort`.
/// - Divergence bound: crate default (1e8).
fn default_options() -> NewtonOptions {
    NewtonOptions::default()
}

/// Purpose
/// -------
/// Provide an options variant with a custom tolerance and cap, used to
/// exercise the boundary and escalation paths.
fn options_with(step_tol: f64, max_iter: usize, policy: MaxIterPolicy) -> NewtonOptions {
    let tols = Tolerances::new(Some(step_tol), Some(max_iter))
        .expect("Tolerances::new should accept positive tolerances");
    NewtonOptions::new(tols, policy, None, false)
        .expect("NewtonOptions::new should succeed with the default bound")
}

#[test]
// Purpose
// -------
// Verify that the Newton solve on the worked example converges from the
// canonical starting point to the closed-form mode.
//
// Given
// -----
// - The sigmoid-Gaussian posterior with gain 20 and shift 4.
// - Initial guess z0 = 0 and default options.
//
// Expect
// ------
// - A converged outcome within the default cap whose mode matches the
//   reference value within 1e-6, with a small score at the estimate.
fn sigmoid_gaussian_mode_search_converges_to_reference_value() {
    // Arrange
    let f = worked_example();
    let opts = default_options();

    // Act
    let out = find_mode(&f, 0.0, &(), &opts).expect("worked example should solve");

    // Assert
    assert!(out.converged, "status: {}", out.status);
    assert!(out.iterations <= 25);
    assert!(
        (out.mode - WORKED_EXAMPLE_MODE).abs() < 1e-6,
        "mode {} too far from {}",
        out.mode,
        WORKED_EXAMPLE_MODE
    );
    let score_norm = out.score_norm.expect("score should evaluate at the mode");
    assert!(score_norm < 1e-4);
}

#[test]
// Purpose
// -------
// Verify that the precision evaluated at the located mode matches the
// closed form 1 + 400·σ(u)·(1-σ(u)).
//
// Given
// -----
// - The worked example solved from z0 = 0.
//
// Expect
// ------
// - `precision_at` matches the reference precision within 1e-6, and the
//   implied standard deviation is 1/sqrt(precision).
fn sigmoid_gaussian_precision_matches_closed_form() {
    // Arrange
    let f = worked_example();
    let out = find_mode(&f, 0.0, &(), &default_options()).expect("worked example should solve");

    // Act
    let precision = precision_at(&f, out.mode, &()).expect("precision should evaluate");

    // Assert
    assert!(
        (precision - WORKED_EXAMPLE_PRECISION).abs() < 1e-6,
        "precision {precision} too far from {WORKED_EXAMPLE_PRECISION}"
    );
    let approx = LaplaceApprox::from_mode(out.mode, precision).expect("concave mode");
    assert!((approx.std_dev() - 1.0 / precision.sqrt()).abs() < 1e-12);
}

#[test]
// Purpose
// -------
// Run the full `fit` pipeline on the worked example and check the
// resulting Gaussian end to end.
//
// Given
// -----
// - The worked example fitted from z0 = 0 with default options.
//
// Expect
// ------
// - Converged diagnostics; approximation centered at the solve's mode;
//   pdf at the mean equal to 1/(std·sqrt(2π)); grid evaluation matching
//   pointwise pdf values.
fn laplace_fit_pipeline_builds_expected_gaussian() {
    // Arrange
    let f = worked_example();
    let opts = default_options();

    // Act
    let (out, approx) = LaplaceApprox::fit(&f, 0.0, &(), &opts).expect("fit should succeed");

    // Assert
    assert!(out.converged);
    assert_eq!(approx.mean(), out.mode);
    assert!((approx.precision() - WORKED_EXAMPLE_PRECISION).abs() < 1e-6);

    let two_pi = 2.0 * std::f64::consts::PI;
    let expected_peak = 1.0 / (approx.std_dev() * two_pi.sqrt());
    assert!((approx.pdf(approx.mean()) - expected_peak).abs() < 1e-12);

    let grid = Array1::linspace(-2.0, 2.0, 9);
    let values = approx.pdf_grid(&grid);
    assert_eq!(values.len(), 9);
    for (z, v) in grid.iter().zip(values.iter()) {
        assert!((v - approx.pdf(*z)).abs() < 1e-15);
    }
}

#[test]
// Purpose
// -------
// Verify idempotence at the fixed point: restarting the solve from the
// returned mode certifies it in a single iteration.
//
// Given
// -----
// - The worked example solved from z0 = 0, then re-solved from the
//   returned mode.
//
// Expect
// ------
// - The second solve converges after exactly 1 iteration and moves by at
//   most the step tolerance.
fn mode_search_is_idempotent_at_the_fixed_point() {
    // Arrange
    let f = worked_example();
    let opts = default_options();
    let first = find_mode(&f, 0.0, &(), &opts).expect("first solve should succeed");

    // Act
    let second = find_mode(&f, first.mode, &(), &opts).expect("restart should succeed");

    // Assert
    assert!(second.converged);
    assert_eq!(second.iterations, 1);
    assert!((second.mode - first.mode).abs() <= opts.tols.step_tol);
}

#[test]
// Purpose
// -------
// Verify that a Gaussian density is solved in at most two iterations
// from arbitrary finite starting points (its score is linear).
//
// Given
// -----
// - A Gaussian with mean 1 and standard deviation 2, solved from -1e6,
//   0, and 17.5.
//
// Expect
// ------
// - Each solve converges to the mean within the step tolerance in at
//   most 2 iterations.
fn gaussian_density_converges_in_one_newton_step() {
    // Arrange
    let f = GaussianDensity::new(1.0, 2.0).expect("valid parameters");
    let opts = default_options();

    for z0 in [-1e6, 0.0, 17.5] {
        // Act
        let out = find_mode(&f, z0, &(), &opts)
            .unwrap_or_else(|e| panic!("solve from {z0} should succeed: {e}"));

        // Assert
        assert!(out.converged, "z0 = {z0}");
        assert!(out.iterations <= 2, "z0 = {z0}, iterations = {}", out.iterations);
        assert!((out.mode - 1.0).abs() < 1e-6, "z0 = {z0}, mode = {}", out.mode);
    }
}

#[test]
// Purpose
// -------
// Verify the zero-cap boundary through the public API: no iterations are
// performed and the initial guess is returned unchanged.
//
// Given
// -----
// - The worked example with `max_iter = 0` and initial guess 0.25.
//
// Expect
// ------
// - `mode == 0.25` exactly, `iterations == 0`, `converged == false`.
fn zero_iteration_cap_returns_initial_guess() {
    // Arrange
    let f = worked_example();
    let opts = options_with(1e-6, 0, MaxIterPolicy::BestEffort);

    // Act
    let out = find_mode(&f, 0.25, &(), &opts).expect("zero-cap solve should succeed");

    // Assert
    assert_eq!(out.mode, 0.25);
    assert_eq!(out.iterations, 0);
    assert!(!out.converged);
}

#[test]
// Purpose
// -------
// Verify the tolerance boundary: a tolerance exceeding the first step
// size terminates after exactly one iteration.
//
// Given
// -----
// - A standard Gaussian solved from z0 = 5 (first step size 5) with
//   `step_tol = 10`.
//
// Expect
// ------
// - Converged after exactly 1 iteration at the mean.
fn tolerance_larger_than_first_step_stops_after_one_iteration() {
    // Arrange
    let f = GaussianDensity::new(0.0, 1.0).expect("valid parameters");
    let opts = options_with(10.0, 25, MaxIterPolicy::BestEffort);

    // Act
    let out = find_mode(&f, 5.0, &(), &opts).expect("one-step solve should succeed");

    // Assert
    assert!(out.converged);
    assert_eq!(out.iterations, 1);
    assert_eq!(out.mode, 0.0);
}

#[test]
// Purpose
// -------
// Verify that the escalating cap policy surfaces an exhausted iteration
// cap as an error on a solve that genuinely needs more iterations.
//
// Given
// -----
// - The worked example from z0 = 0 with `max_iter = 2` and a tolerance
//   of 1e-9 (the second step is ~2.6e-2).
//
// Expect
// ------
// - `MaxIterationsExceeded` under `Escalate`; a non-converged best-effort
//   outcome under `BestEffort`.
fn exhausted_cap_escalates_or_returns_best_effort() {
    // Arrange
    let f = worked_example();
    let escalate = options_with(1e-9, 2, MaxIterPolicy::Escalate);
    let best_effort = options_with(1e-9, 2, MaxIterPolicy::BestEffort);

    // Act
    let err = find_mode(&f, 0.0, &(), &escalate);
    let out = find_mode(&f, 0.0, &(), &best_effort).expect("best effort should succeed");

    // Assert
    assert!(matches!(err, Err(SolveError::MaxIterationsExceeded { .. })));
    assert!(!out.converged);
    assert_eq!(out.iterations, 2);
}

#[test]
// Purpose
// -------
// Verify the concavity contract of the approximator: non-positive
// precisions are rejected with a dedicated error.
//
// Given
// -----
// - `from_mode` called with precisions 0 and -2.5.
//
// Expect
// ------
// - Both fail with `NonConcaveMode`.
fn approximator_rejects_non_concave_candidates() {
    // Act / Assert
    assert!(matches!(
        LaplaceApprox::from_mode(0.1, 0.0),
        Err(LaplaceError::NonConcaveMode { .. })
    ));
    assert!(matches!(
        LaplaceApprox::from_mode(0.1, -2.5),
        Err(LaplaceError::NonConcaveMode { .. })
    ));
}

#[test]
// Purpose
// -------
// Verify that the finite-difference precision fallback agrees with the
// analytic precision of the worked example at its mode.
//
// Given
// -----
// - A wrapper around the worked example that hides its analytic
//   precision, evaluated at the located mode.
//
// Expect
// ------
// - Analytic and fallback precisions agree within 1e-6 relative error.
fn finite_difference_precision_agrees_with_analytic() {
    /// The worked example with `precision` left to the default
    /// (finite-difference) implementation.
    struct ScoreOnly(SigmoidGaussian);

    impl LogDensity for ScoreOnly {
        type Data = ();

        fn log_density(&self, z: f64, data: &()) -> Result<f64, SolveError> {
            self.0.log_density(z, data)
        }

        fn score(&self, z: f64, data: &()) -> Result<f64, SolveError> {
            self.0.score(z, data)
        }

        fn check(&self, z: f64, data: &()) -> Result<(), SolveError> {
            self.0.check(z, data)
        }
    }

    // Arrange
    let full = worked_example();
    let hidden = ScoreOnly(worked_example());
    let out = find_mode(&full, 0.0, &(), &default_options()).expect("solve should succeed");

    // Act
    let analytic = precision_at(&full, out.mode, &()).expect("analytic precision");
    let fallback = precision_at(&hidden, out.mode, &()).expect("FD precision");

    // Assert
    assert!(
        ((analytic - fallback) / analytic).abs() < 1e-6,
        "analytic {analytic} vs fallback {fallback}"
    );
}
