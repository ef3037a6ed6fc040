//! Gaussian reference density.
//!
//! This module defines [`GaussianDensity`], a (normalized) Gaussian used
//! as the closed-form reference model: its mode is the mean, its score
//! is linear, and its precision is the constant `1/σ²`, so Newton
//! reaches the mode in a single step from any finite starting point.
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
use statrs::distribution::{Continuous, Normal};

/// Gaussian density with mean `μ` and standard deviation `σ > 0`.
///
/// Closed forms:
/// - mode: `μ`
/// - score: `y(z) = (μ - z) / σ²`
/// - precision: `A(z) = 1 / σ²`
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianDensity {
    mean: f64,
    std_dev: f64,
    normal: Normal,
}

impl GaussianDensity {
    /// Construct a validated Gaussian density.
    ///
    /// # Errors
    /// - [`DensityError::NonFiniteMean`] for a NaN or infinite mean.
    /// - [`DensityError::InvalidStdDev`] for a non-finite or non-positive
    ///   standard deviation.
    pub fn new(mean: f64, std_dev: f64) -> DensityResult<Self> {
        if !mean.is_finite() {
            return Err(DensityError::NonFiniteMean { value: mean });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(DensityError::InvalidStdDev { value: std_dev });
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|_| DensityError::InvalidStdDev { value: std_dev })?;
        Ok(Self { mean, std_dev, normal })
    }

    /// Mean (and mode) of the density.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the density.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl LogDensity for GaussianDensity {
    type Data = ();

    /// Normalized Gaussian log-density; the normalization constant does
    /// not affect the score or the mode.
    fn log_density(&self, z: Point, _data: &()) -> SolveResult<f64> {
        validate_point(z)?;
        Ok(self.normal.ln_pdf(z))
    }

    fn score(&self, z: Point, _data: &()) -> SolveResult<Score> {
        validate_point(z)?;
        Ok((self.mean - z) / (self.std_dev * self.std_dev))
    }

    fn check(&self, z: Point, _data: &()) -> SolveResult<()> {
        validate_point(z)
    }

    fn precision(&self, z: Point, _data: &()) -> SolveResult<Precision> {
        validate_point(z)?;
        Ok(1.0 / (self.std_dev * self.std_dev))
    }
}

// ---- Helper methods ----

fn validate_point(z: f64) -> SolveResult<()> {
    if !z.is_finite() {
        return Err(DensityError::NonFiniteInput { value: z }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Parameter validation at construction.
    // - Closed-form score/precision values and the score's root at the
    //   mean.
    //
    // They intentionally DO NOT cover:
    // - Newton solves on this density (covered in the runner and
    //   integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that construction rejects invalid parameters.
    //
    // Given
    // -----
    // - A NaN mean, a zero standard deviation, and a negative standard
    //   deviation.
    //
    // Expect
    // ------
    // - Each fails with its dedicated variant; valid parameters succeed.
    fn new_validates_parameters() {
        // Act / Assert
        assert!(GaussianDensity::new(0.0, 1.0).is_ok());
        assert!(matches!(
            GaussianDensity::new(f64::NAN, 1.0),
            Err(DensityError::NonFiniteMean { .. })
        ));
        assert!(matches!(
            GaussianDensity::new(0.0, 0.0),
            Err(DensityError::InvalidStdDev { .. })
        ));
        assert!(matches!(
            GaussianDensity::new(0.0, -2.0),
            Err(DensityError::InvalidStdDev { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify the closed-form score and precision against hand-computed
    // values.
    //
    // Given
    // -----
    // - A Gaussian with mean 1 and standard deviation 2, evaluated at
    //   z = 3.
    //
    // Expect
    // ------
    // - Score (1 - 3)/4 = -0.5; precision 1/4; score at the mean is 0.
    fn score_and_precision_match_closed_forms() {
        // Arrange
        let f = GaussianDensity::new(1.0, 2.0).unwrap();

        // Act / Assert
        assert!((f.score(3.0, &()).unwrap() - (-0.5)).abs() < 1e-12);
        assert!((f.precision(3.0, &()).unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(f.score(1.0, &()).unwrap(), 0.0);
    }
}
