//! Two-sample variance-ratio F-test.
//!
//! ## Purpose
//!
//! This module implements the F-test for equality of two population
//! variances: the ratio of the larger to the smaller sample variance is
//! referred to the F-distribution.
//!
//! ## Design notes
//!
//! * **Ordering**: The larger variance always goes in the numerator, so the
//!   statistic is at least 1 and the rejection region sits in the upper tail.
//! * **Two-tailed p**: Computed as `2·(1 − CDF(ratio))` and clamped into the
//!   unit interval.
//!
//! ## Invariants
//!
//! * `statistic >= 1`.
//! * Degrees of freedom follow the numerator/denominator ordering.
//!
//! ## Non-goals
//!
//! * This module does not implement Levene or Bartlett alternatives.

use std::fmt::{Display, Formatter, Result as FmtResult};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::distributions::fisher_f;
use crate::engine::validator::Validator;
use crate::inference::outcome::{CriticalValues, Decision, Significance};
use crate::math::descriptive;
use crate::primitives::convergence::Convergence;
use crate::primitives::errors::StatError;

// ============================================================================
// Result Structure
// ============================================================================

/// Result of a two-sample variance-ratio F-test.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceRatioTestResult<T> {
    /// Observations behind the numerator (larger) variance.
    pub n_numerator: usize,

    /// Observations behind the denominator (smaller) variance.
    pub n_denominator: usize,

    /// Larger sample variance.
    pub variance_numerator: T,

    /// Smaller sample variance.
    pub variance_denominator: T,

    /// F-statistic: larger variance over smaller variance.
    pub statistic: f64,

    /// Numerator degrees of freedom.
    pub df1: f64,

    /// Denominator degrees of freedom.
    pub df2: f64,

    /// Two-tailed p-value under the F-distribution.
    pub p_value: f64,

    /// Boundary of the rejection region.
    pub critical: CriticalValues,

    /// Significance level α.
    pub alpha: f64,

    /// Test decision at α.
    pub decision: Decision,
}

// ============================================================================
// Variance-Ratio Test
// ============================================================================

/// Two-sample F-test of H0: σ₁² = σ₂².
///
/// # Algorithm
///
/// ```text
/// F = max(s₁², s₂²) / min(s₁², s₂²),   df = (n_larger − 1, n_smaller − 1)
/// ```
pub fn variance_ratio_test<T: Float>(
    a: &[T],
    b: &[T],
    alpha: Significance,
) -> Result<VarianceRatioTestResult<T>, StatError> {
    Validator::validate_sample(a, 2)?;
    Validator::validate_sample(b, 2)?;

    let var_a = descriptive::sample_variance(a);
    let var_b = descriptive::sample_variance(b);

    // Larger variance in the numerator
    let (var_num, var_den, n_num, n_den) = if var_a >= var_b {
        (var_a, var_b, a.len(), b.len())
    } else {
        (var_b, var_a, b.len(), a.len())
    };

    if var_den <= T::zero() {
        return Err(StatError::ZeroVariance("the smaller-variance sample"));
    }

    let statistic =
        var_num.to_f64().unwrap_or(f64::NAN) / var_den.to_f64().unwrap_or(f64::NAN);
    let df1 = (n_num - 1) as f64;
    let df2 = (n_den - 1) as f64;

    let p_value = (2.0 * (1.0 - fisher_f::cdf(statistic, df1, df2))).clamp(0.0, 1.0);
    let critical = CriticalValues::Upper(fisher_f::quantile(
        1.0 - alpha.alpha() / 2.0,
        df1,
        df2,
        Convergence::default(),
    )?);
    let decision = Decision::from_p_value(p_value, alpha.alpha());

    Ok(VarianceRatioTestResult {
        n_numerator: n_num,
        n_denominator: n_den,
        variance_numerator: var_num,
        variance_denominator: var_den,
        statistic,
        df1,
        df2,
        p_value,
        critical,
        alpha: alpha.alpha(),
        decision,
    })
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for VarianceRatioTestResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Two-sample variance-ratio F-test:")?;
        writeln!(
            f,
            "  n (num, den):   {}, {}",
            self.n_numerator, self.n_denominator
        )?;
        writeln!(
            f,
            "  Variances:      {:.4} / {:.4}",
            self.variance_numerator, self.variance_denominator
        )?;
        writeln!(f, "  F-statistic:    {:.4}", self.statistic)?;
        writeln!(f, "  df:             ({}, {})", self.df1, self.df2)?;
        writeln!(f, "  p-value:        {:.4}", self.p_value)?;
        writeln!(f, "  Critical:       {}", self.critical)?;
        writeln!(f, "  Decision:       {} (alpha = {})", self.decision, self.alpha)
    }
}
