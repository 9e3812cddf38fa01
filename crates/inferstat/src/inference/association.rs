//! Pearson correlation and simple linear regression.
//!
//! ## Purpose
//!
//! This module implements the two association procedures: the Pearson
//! product-moment correlation coefficient with a discrete strength
//! interpretation, and simple (one-predictor) least-squares linear
//! regression.
//!
//! ## Design notes
//!
//! * **Shared moments**: Both procedures are built from the same centered
//!   sums Σ(x−x̄)², Σ(y−ȳ)², and Σ(x−x̄)(y−ȳ).
//! * **Degenerate predictors**: A zero-variance x (or y, for correlation)
//!   makes the denominator vanish and is rejected as an error rather than
//!   propagating NaN.
//! * **Interpretation buckets**: |r| < 0.3 weak, |r| < 0.7 moderate,
//!   otherwise strong; the direction comes from the sign.
//!
//! ## Invariants
//!
//! * `r` lies inside [−1, 1] up to rounding.
//! * Regression with a perfectly linear input yields R² = 1.
//!
//! ## Non-goals
//!
//! * This module does not provide multiple regression or rank correlation.

use std::fmt::{Display, Formatter, Result as FmtResult};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::descriptive;
use crate::primitives::errors::StatError;

// ============================================================================
// Correlation Strength
// ============================================================================

/// Discrete interpretation bucket for a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// r = 0 exactly.
    None,

    /// 0 < |r| < 0.3.
    Weak,

    /// 0.3 ≤ |r| < 0.7.
    Moderate,

    /// |r| ≥ 0.7.
    Strong,
}

impl Strength {
    /// Classify a correlation coefficient into its bucket.
    pub fn classify(r: f64) -> Self {
        let a = r.abs();
        if a == 0.0 {
            Strength::None
        } else if a < 0.3 {
            Strength::Weak
        } else if a < 0.7 {
            Strength::Moderate
        } else {
            Strength::Strong
        }
    }

    /// Get the name of the bucket.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Strength::None => "none",
            Strength::Weak => "weak",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
        }
    }
}

// ============================================================================
// Result Structures
// ============================================================================

/// Result of a Pearson correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult<T> {
    /// Number of paired observations.
    pub n: usize,

    /// Mean of x.
    pub x_mean: T,

    /// Mean of y.
    pub y_mean: T,

    /// Pearson product-moment correlation coefficient.
    pub r: f64,

    /// Discrete strength bucket for |r|.
    pub strength: Strength,
}

impl<T> CorrelationResult<T> {
    /// Human-readable interpretation, e.g. "moderate positive correlation".
    pub fn interpretation(&self) -> String {
        match self.strength {
            Strength::None => "no correlation".to_string(),
            _ => {
                let direction = if self.r > 0.0 { "positive" } else { "negative" };
                format!("{} {} correlation", self.strength.name(), direction)
            }
        }
    }
}

/// Result of a simple linear regression.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult<T> {
    /// Number of paired observations.
    pub n: usize,

    /// Least-squares slope.
    pub slope: T,

    /// Least-squares intercept.
    pub intercept: T,

    /// Coefficient of determination R².
    pub r_squared: f64,

    /// Mean of the predictor.
    pub x_mean: T,

    /// Mean of the response.
    pub y_mean: T,
}

impl<T: Float> RegressionResult<T> {
    /// Predict the response at a new predictor value.
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

// ============================================================================
// Pearson Correlation
// ============================================================================

/// Pearson product-moment correlation between two equal-length samples.
///
/// # Algorithm
///
/// ```text
/// r = Σ(xᵢ−x̄)(yᵢ−ȳ) / √(Σ(xᵢ−x̄)² · Σ(yᵢ−ȳ)²)
/// ```
pub fn pearson_correlation<T: Float>(x: &[T], y: &[T]) -> Result<CorrelationResult<T>, StatError> {
    Validator::validate_paired(x, y, 2)?;

    let x_mean = descriptive::mean(x);
    let y_mean = descriptive::mean(y);

    let ss_x = descriptive::sum_of_squares(x, x_mean);
    let ss_y = descriptive::sum_of_squares(y, y_mean);

    if ss_x <= T::zero() {
        return Err(StatError::ZeroVariance("x"));
    }
    if ss_y <= T::zero() {
        return Err(StatError::ZeroVariance("y"));
    }

    let sxy = descriptive::cross_product(x, y, x_mean, y_mean);
    let r = sxy.to_f64().unwrap_or(f64::NAN)
        / (ss_x.to_f64().unwrap_or(f64::NAN) * ss_y.to_f64().unwrap_or(f64::NAN)).sqrt();
    let r = r.clamp(-1.0, 1.0);

    Ok(CorrelationResult {
        n: x.len(),
        x_mean,
        y_mean,
        r,
        strength: Strength::classify(r),
    })
}

// ============================================================================
// Simple Linear Regression
// ============================================================================

/// Simple least-squares linear regression of y on x.
///
/// # Algorithm
///
/// ```text
/// slope     = Σ(xᵢ−x̄)(yᵢ−ȳ) / Σ(xᵢ−x̄)²
/// intercept = ȳ − slope·x̄
/// R²        = 1 − SS_res / SS_tot
/// ```
pub fn linear_regression<T: Float>(x: &[T], y: &[T]) -> Result<RegressionResult<T>, StatError> {
    Validator::validate_paired(x, y, 2)?;

    let x_mean = descriptive::mean(x);
    let y_mean = descriptive::mean(y);

    let ss_x = descriptive::sum_of_squares(x, x_mean);
    if ss_x <= T::zero() {
        return Err(StatError::ZeroVariance("the predictor"));
    }

    let sxy = descriptive::cross_product(x, y, x_mean, y_mean);
    let slope = sxy / ss_x;
    let intercept = y_mean - slope * x_mean;

    // R² from the residual and total sums of squares
    let ss_tot = descriptive::sum_of_squares(y, y_mean);
    let ss_res = x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xi, &yi)| {
        let fitted = intercept + slope * xi;
        let r = yi - fitted;
        acc + r * r
    });

    let r_squared = if ss_tot > T::zero() {
        (T::one() - ss_res / ss_tot).to_f64().unwrap_or(f64::NAN)
    } else {
        // All responses identical and perfectly fitted by a flat line
        1.0
    };

    Ok(RegressionResult {
        n: x.len(),
        slope,
        intercept,
        r_squared,
        x_mean,
        y_mean,
    })
}

// ============================================================================
// Display Implementations
// ============================================================================

impl<T: Float + Display> Display for CorrelationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Pearson correlation:")?;
        writeln!(f, "  n:              {}", self.n)?;
        writeln!(f, "  Means:          {:.4}, {:.4}", self.x_mean, self.y_mean)?;
        writeln!(f, "  r:              {:.4}", self.r)?;
        writeln!(f, "  Interpretation: {}", self.interpretation())
    }
}

impl<T: Float + Display> Display for RegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Simple linear regression:")?;
        writeln!(f, "  n:              {}", self.n)?;
        writeln!(f, "  Slope:          {:.4}", self.slope)?;
        writeln!(f, "  Intercept:      {:.4}", self.intercept)?;
        writeln!(f, "  R-squared:      {:.4}", self.r_squared)?;
        writeln!(
            f,
            "  Fit:            y = {:.4} + {:.4}x",
            self.intercept, self.slope
        )
    }
}
