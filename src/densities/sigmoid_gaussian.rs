//! Sigmoid-Gaussian posterior density.
//!
//! This module defines [`SigmoidGaussian`], the unnormalized density
//! `p̃(z) = σ(gain·z + shift) · exp(-z²/2)` — the posterior of a standard
//! Gaussian prior under a logistic observation factor. It is the
//! canonical worked example for Laplace approximation: unimodal,
//! log-concave, and with closed-form score and precision.
//!
//! ## Numerics
//! - The sigmoid is evaluated via `statrs::function::logistic::logistic`.
//! - `log σ(u)` is computed through `ln_1p` on the appropriate branch so
//!   large activations do not overflow.
//! - The complement `1 - σ(u)` is evaluated as `σ(-u)` to avoid
//!   cancellation for large `u`.
use crate::{
    densities::errors::{DensityError, DensityResult},
    optimization::{
        errors::SolveResult,
        mode_finder::{
            traits::LogDensity,
            types::{Point, Precision, Score},
        },
    },
};
use ndarray::Array1;
use statrs::function::logistic::logistic;

/// Unnormalized posterior `p̃(z) = σ(gain·z + shift) · exp(-z²/2)`.
///
/// The score and precision are closed forms:
/// - `y(z) = gain · σ(-(gain·z + shift)) - z`
/// - `A(z) = 1 + gain² · σ(u) · σ(-u)` with `u = gain·z + shift`
///
/// Both parameters must be finite; the gain may be negative (a mirrored
/// posterior) or zero (a plain standard Gaussian).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidGaussian {
    gain: f64,
    shift: f64,
}

impl SigmoidGaussian {
    /// Construct a validated sigmoid-Gaussian posterior.
    ///
    /// # Errors
    /// - [`DensityError::NonFiniteGain`] / [`DensityError::NonFiniteShift`]
    ///   for NaN or infinite parameters.
    pub fn new(gain: f64, shift: f64) -> DensityResult<Self> {
        if !gain.is_finite() {
            return Err(DensityError::NonFiniteGain { value: gain });
        }
        if !shift.is_finite() {
            return Err(DensityError::NonFiniteShift { value: shift });
        }
        Ok(Self { gain, shift })
    }

    /// Gain of the logistic factor.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Shift of the logistic factor.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Evaluate the unnormalized density `p̃(z)` at a point.
    ///
    /// Non-finite points are mapped to a density of 0 rather than an
    /// error, since this entry point exists for plotting and comparison
    /// grids.
    pub fn unnorm_density(&self, z: f64) -> f64 {
        if !z.is_finite() {
            return 0.0;
        }
        logistic(self.activation(z)) * (-0.5 * z * z).exp()
    }

    /// Evaluate the unnormalized density on a grid of points.
    pub fn unnorm_density_grid(&self, points: &Array1<f64>) -> Array1<f64> {
        points.mapv(|z| self.unnorm_density(z))
    }

    fn activation(&self, z: f64) -> f64 {
        self.gain * z + self.shift
    }
}

impl LogDensity for SigmoidGaussian {
    type Data = ();

    /// `log p̃(z) = log σ(gain·z + shift) - z²/2`.
    fn log_density(&self, z: Point, _data: &()) -> SolveResult<f64> {
        validate_point(z)?;
        Ok(log_sigmoid(self.activation(z)) - 0.5 * z * z)
    }

    /// `y(z) = gain · σ(-(gain·z + shift)) - z`.
    fn score(&self, z: Point, _data: &()) -> SolveResult<Score> {
        validate_point(z)?;
        Ok(self.gain * logistic(-self.activation(z)) - z)
    }

    fn check(&self, z: Point, _data: &()) -> SolveResult<()> {
        validate_point(z)
    }

    /// `A(z) = 1 + gain² · σ(u) · σ(-u)`, always ≥ 1: the posterior is
    /// strictly log-concave.
    fn precision(&self, z: Point, _data: &()) -> SolveResult<Precision> {
        validate_point(z)?;
        let u = self.activation(z);
        Ok(1.0 + self.gain * self.gain * logistic(u) * logistic(-u))
    }
}

// ---- Helper methods ----

fn validate_point(z: f64) -> SolveResult<()> {
    if !z.is_finite() {
        return Err(DensityError::NonFiniteInput { value: z }.into());
    }
    Ok(())
}

/// Stable `log σ(u)`: `-ln(1 + e^{-u})` for `u ≥ 0`, `u - ln(1 + e^{u})`
/// otherwise.
fn log_sigmoid(u: f64) -> f64 {
    if u >= 0.0 {
        -(-u).exp().ln_1p()
    } else {
        u - u.exp().ln_1p()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::SolveError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Parameter validation at construction.
    // - Agreement of the analytic score with a finite difference of the
    //   log-density, and of the analytic precision with a finite
    //   difference of the score.
    // - Stability of `log_sigmoid` for large activations.
    // - Rejection of non-finite evaluation points.
    //
    // They intentionally DO NOT cover:
    // - Mode finding on this density (covered by the integration suite).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that construction rejects non-finite parameters and accepts
    // finite ones, including zero gain.
    //
    // Given
    // -----
    // - Gains/shifts that are finite, NaN, and infinite.
    //
    // Expect
    // ------
    // - Finite parameters are accepted; NaN gain and infinite shift fail
    //   with their dedicated variants.
    fn new_validates_parameters() {
        // Act / Assert
        assert!(SigmoidGaussian::new(20.0, 4.0).is_ok());
        assert!(SigmoidGaussian::new(0.0, 0.0).is_ok());
        assert!(matches!(
            SigmoidGaussian::new(f64::NAN, 0.0),
            Err(DensityError::NonFiniteGain { .. })
        ));
        assert!(matches!(
            SigmoidGaussian::new(1.0, f64::INFINITY),
            Err(DensityError::NonFiniteShift { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Check the analytic score against a central difference of the
    // log-density.
    //
    // Given
    // -----
    // - The worked-example parameters (gain 20, shift 4) at z = 0.05.
    //
    // Expect
    // ------
    // - Analytic and finite-difference scores agree within 1e-6.
    fn score_matches_log_density_finite_difference() {
        // Arrange
        let f = SigmoidGaussian::new(20.0, 4.0).unwrap();
        let z = 0.05;
        let h = 1e-6;

        // Act
        let analytic = f.score(z, &()).unwrap();
        let fd = (f.log_density(z + h, &()).unwrap() - f.log_density(z - h, &()).unwrap())
            / (2.0 * h);

        // Assert
        assert!((analytic - fd).abs() < 1e-6, "analytic {analytic} vs fd {fd}");
    }

    #[test]
    // Purpose
    // -------
    // Check the analytic precision against a central difference of the
    // score, with a relative tolerance.
    //
    // Given
    // -----
    // - The worked-example parameters at z = 0.05.
    //
    // Expect
    // ------
    // - Analytic and finite-difference precisions agree within 1e-6
    //   relative error, and the precision exceeds 1 (strict
    //   log-concavity).
    fn precision_matches_score_finite_difference() {
        // Arrange
        let f = SigmoidGaussian::new(20.0, 4.0).unwrap();
        let z = 0.05;
        let h = 1e-6;

        // Act
        let analytic = f.precision(z, &()).unwrap();
        let fd = -(f.score(z + h, &()).unwrap() - f.score(z - h, &()).unwrap()) / (2.0 * h);

        // Assert
        assert!(analytic > 1.0);
        assert!(
            ((analytic - fd) / analytic).abs() < 1e-6,
            "analytic {analytic} vs fd {fd}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that the log-density stays finite for activations that
    // would overflow a naive `ln(σ(u))`.
    //
    // Given
    // -----
    // - Points mapping to activations ±2000 under gain 20, shift 4.
    //
    // Expect
    // ------
    // - Both log-density values are finite; the deep-negative branch is
    //   close to the activation itself minus the Gaussian term.
    fn log_density_is_stable_for_extreme_activations() {
        // Arrange
        let f = SigmoidGaussian::new(20.0, 4.0).unwrap();

        // Act
        let hi = f.log_density(100.0, &()).unwrap();
        let lo = f.log_density(-100.0, &()).unwrap();

        // Assert
        assert!(hi.is_finite());
        assert!(lo.is_finite());
        // For u = -1996, log σ(u) ≈ u; the Gaussian term dominates at -5000.
        assert!((lo - (-1996.0 - 5000.0)).abs() < 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-finite evaluation points are rejected by the trait
    // surface and mapped to zero by the plotting surface.
    //
    // Given
    // -----
    // - z = NaN passed to `score` and `unnorm_density`.
    //
    // Expect
    // ------
    // - `score` fails with `NonFiniteInput`; `unnorm_density` returns 0.
    fn non_finite_points_are_rejected_or_zeroed() {
        // Arrange
        let f = SigmoidGaussian::new(20.0, 4.0).unwrap();

        // Act / Assert
        assert!(matches!(f.score(f64::NAN, &()), Err(SolveError::NonFiniteInput { .. })));
        assert_eq!(f.unnorm_density(f64::NAN), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify grid evaluation preserves shape and matches pointwise
    // evaluation.
    //
    // Given
    // -----
    // - A 5-point grid spanning [-2, 2].
    //
    // Expect
    // ------
    // - The grid result has length 5 and each entry equals the pointwise
    //   density.
    fn unnorm_density_grid_matches_pointwise() {
        // Arrange
        let f = SigmoidGaussian::new(20.0, 4.0).unwrap();
        let grid = Array1::linspace(-2.0, 2.0, 5);

        // Act
        let values = f.unnorm_density_grid(&grid);

        // Assert
        assert_eq!(values.len(), 5);
        for (z, v) in grid.iter().zip(values.iter()) {
            assert_eq!(*v, f.unnorm_density(*z));
        }
    }
}
