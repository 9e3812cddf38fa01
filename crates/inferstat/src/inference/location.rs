//! Location tests: z-test and t-test families.
//!
//! ## Purpose
//!
//! This module implements the tests on means: the one-sample z-test (known
//! population standard deviation), the one-sample t-test (sample standard
//! deviation), the two-sample Welch t-test, and the paired t-test.
//!
//! ## Design notes
//!
//! * **Summary forms**: Each one-sample test also accepts pre-computed
//!   summary statistics (mean, spread, n), since callers often have only a
//!   summary rather than the raw sample.
//! * **Welch**: The two-sample test does not assume equal variances and uses
//!   the Welch–Satterthwaite approximation for (fractional) degrees of freedom.
//! * **Reports**: Results carry every intermediate (standard error, df,
//!   critical region) and render a step-by-step summary via `Display`.
//!
//! ## Key concepts
//!
//! * **Standard error**: σ/√n (z) or s/√n (t).
//! * **Decision rule**: Reject the null hypothesis iff p < α.
//!
//! ## Invariants
//!
//! * p-values are inside [0, 1]; NaN never escapes a procedure.
//! * Variance-based tests require at least 2 observations.
//!
//! ## Non-goals
//!
//! * This module does not implement non-parametric location tests.

use std::fmt::{Display, Formatter, Result as FmtResult};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::distributions::{normal, student_t};
use crate::engine::validator::Validator;
use crate::inference::outcome::{CriticalValues, Decision, Significance, Tail};
use crate::math::descriptive;
use crate::primitives::convergence::Convergence;
use crate::primitives::errors::StatError;

// ============================================================================
// Result Structures
// ============================================================================

/// Result of a one-sample z-test.
#[derive(Debug, Clone, PartialEq)]
pub struct ZTestResult<T> {
    /// Number of observations.
    pub n: usize,

    /// Sample mean.
    pub sample_mean: T,

    /// Hypothesized population mean.
    pub hypothesized_mean: T,

    /// Known population standard deviation.
    pub population_std_dev: T,

    /// Standard error σ/√n.
    pub standard_error: T,

    /// z-statistic.
    pub statistic: f64,

    /// p-value under the standard normal.
    pub p_value: f64,

    /// Boundary of the rejection region.
    pub critical: CriticalValues,

    /// Significance level α.
    pub alpha: f64,

    /// Tail of the alternative hypothesis.
    pub tail: Tail,

    /// Test decision at α.
    pub decision: Decision,
}

/// Result of a one-sample (or paired) t-test.
#[derive(Debug, Clone, PartialEq)]
pub struct TTestResult<T> {
    /// Number of observations.
    pub n: usize,

    /// Sample mean.
    pub sample_mean: T,

    /// Hypothesized population mean.
    pub hypothesized_mean: T,

    /// Sample standard deviation.
    pub std_dev: T,

    /// Standard error s/√n.
    pub standard_error: T,

    /// t-statistic.
    pub statistic: f64,

    /// Degrees of freedom (n − 1).
    pub df: f64,

    /// p-value under Student's t.
    pub p_value: f64,

    /// Boundary of the rejection region.
    pub critical: CriticalValues,

    /// Significance level α.
    pub alpha: f64,

    /// Tail of the alternative hypothesis.
    pub tail: Tail,

    /// Test decision at α.
    pub decision: Decision,
}

/// Result of a two-sample Welch t-test.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoSampleTTestResult<T> {
    /// Observations in the first sample.
    pub n1: usize,

    /// Observations in the second sample.
    pub n2: usize,

    /// Mean of the first sample.
    pub mean1: T,

    /// Mean of the second sample.
    pub mean2: T,

    /// Variance of the first sample.
    pub variance1: T,

    /// Variance of the second sample.
    pub variance2: T,

    /// Standard error √(s₁²/n₁ + s₂²/n₂).
    pub standard_error: T,

    /// t-statistic.
    pub statistic: f64,

    /// Welch–Satterthwaite degrees of freedom (fractional).
    pub df: f64,

    /// p-value under Student's t.
    pub p_value: f64,

    /// Boundary of the rejection region.
    pub critical: CriticalValues,

    /// Significance level α.
    pub alpha: f64,

    /// Tail of the alternative hypothesis.
    pub tail: Tail,

    /// Test decision at α.
    pub decision: Decision,
}

// ============================================================================
// z-Test
// ============================================================================

/// One-sample z-test of H0: μ = μ₀ with known population standard deviation.
pub fn z_test<T: Float>(
    sample: &[T],
    mu0: T,
    sigma: T,
    alpha: Significance,
    tail: Tail,
) -> Result<ZTestResult<T>, StatError> {
    Validator::validate_sample(sample, 1)?;
    Validator::validate_scalar(mu0, "mu0")?;
    let mean = descriptive::mean(sample);
    z_test_from_summary(mean, mu0, sigma, sample.len(), alpha, tail)
}

/// One-sample z-test from summary statistics.
///
/// # Algorithm
///
/// ```text
/// z = (x̄ − μ₀) / (σ/√n)
/// ```
pub fn z_test_from_summary<T: Float>(
    mean: T,
    mu0: T,
    sigma: T,
    n: usize,
    alpha: Significance,
    tail: Tail,
) -> Result<ZTestResult<T>, StatError> {
    Validator::validate_scalar(mean, "mean")?;
    Validator::validate_scalar(mu0, "mu0")?;
    Validator::validate_std_dev(sigma)?;
    if n == 0 {
        return Err(StatError::EmptyInput);
    }

    let sqrt_n = T::from(n).unwrap_or_else(T::one).sqrt();
    let standard_error = sigma / sqrt_n;

    let mean_f = mean.to_f64().unwrap_or(f64::NAN);
    let mu0_f = mu0.to_f64().unwrap_or(f64::NAN);
    let se_f = standard_error.to_f64().unwrap_or(f64::NAN);
    let statistic = (mean_f - mu0_f) / se_f;

    let p_value = tail.p_value(normal::cdf, statistic);
    let critical = tail.critical(|q| Ok(normal::quantile(q)), alpha.alpha())?;
    let decision = Decision::from_p_value(p_value, alpha.alpha());

    Ok(ZTestResult {
        n,
        sample_mean: mean,
        hypothesized_mean: mu0,
        population_std_dev: sigma,
        standard_error,
        statistic,
        p_value,
        critical,
        alpha: alpha.alpha(),
        tail,
        decision,
    })
}

// ============================================================================
// t-Test
// ============================================================================

/// One-sample t-test of H0: μ = μ₀ with the standard deviation estimated
/// from the sample.
pub fn t_test<T: Float>(
    sample: &[T],
    mu0: T,
    alpha: Significance,
    tail: Tail,
) -> Result<TTestResult<T>, StatError> {
    Validator::validate_sample(sample, 2)?;
    Validator::validate_scalar(mu0, "mu0")?;

    let mean = descriptive::mean(sample);
    let sd = descriptive::std_dev(sample);
    if sd <= T::zero() {
        return Err(StatError::ZeroVariance("the sample"));
    }

    t_test_from_summary(mean, mu0, sd, sample.len(), alpha, tail)
}

/// One-sample t-test from summary statistics.
///
/// # Algorithm
///
/// ```text
/// t = (x̄ − μ₀) / (s/√n),   df = n − 1
/// ```
pub fn t_test_from_summary<T: Float>(
    mean: T,
    mu0: T,
    sd: T,
    n: usize,
    alpha: Significance,
    tail: Tail,
) -> Result<TTestResult<T>, StatError> {
    Validator::validate_scalar(mean, "mean")?;
    Validator::validate_scalar(mu0, "mu0")?;
    Validator::validate_std_dev(sd)?;
    if n < 2 {
        return Err(StatError::TooFewPoints { got: n, min: 2 });
    }

    let sqrt_n = T::from(n).unwrap_or_else(T::one).sqrt();
    let standard_error = sd / sqrt_n;
    let df = (n - 1) as f64;

    let mean_f = mean.to_f64().unwrap_or(f64::NAN);
    let mu0_f = mu0.to_f64().unwrap_or(f64::NAN);
    let se_f = standard_error.to_f64().unwrap_or(f64::NAN);
    let statistic = (mean_f - mu0_f) / se_f;

    let (p_value, critical, decision) = t_outcome(statistic, df, alpha, tail)?;

    Ok(TTestResult {
        n,
        sample_mean: mean,
        hypothesized_mean: mu0,
        std_dev: sd,
        standard_error,
        statistic,
        df,
        p_value,
        critical,
        alpha: alpha.alpha(),
        tail,
        decision,
    })
}

// ============================================================================
// Two-Sample Tests
// ============================================================================

/// Two-sample Welch t-test of H0: μ₁ = μ₂ (unequal variances).
///
/// # Algorithm
///
/// ```text
/// t  = (x̄₁ − x̄₂) / √(s₁²/n₁ + s₂²/n₂)
/// df = (s₁²/n₁ + s₂²/n₂)² / ((s₁²/n₁)²/(n₁−1) + (s₂²/n₂)²/(n₂−1))
/// ```
///
/// Reference: Welch (1947), "The generalization of 'Student's' problem when
/// several different population variances are involved", *Biometrika* 34.
pub fn welch_t_test<T: Float>(
    a: &[T],
    b: &[T],
    alpha: Significance,
    tail: Tail,
) -> Result<TwoSampleTTestResult<T>, StatError> {
    Validator::validate_sample(a, 2)?;
    Validator::validate_sample(b, 2)?;

    let mean1 = descriptive::mean(a);
    let mean2 = descriptive::mean(b);
    let variance1 = descriptive::sample_variance(a);
    let variance2 = descriptive::sample_variance(b);

    let n1f = a.len() as f64;
    let n2f = b.len() as f64;
    let v1 = variance1.to_f64().unwrap_or(f64::NAN) / n1f;
    let v2 = variance2.to_f64().unwrap_or(f64::NAN) / n2f;

    let se_sq = v1 + v2;
    if se_sq <= 0.0 {
        return Err(StatError::ZeroVariance("both samples"));
    }
    let se_f = se_sq.sqrt();
    let standard_error = T::from(se_f).unwrap_or_else(T::nan);

    let statistic =
        (mean1.to_f64().unwrap_or(f64::NAN) - mean2.to_f64().unwrap_or(f64::NAN)) / se_f;
    let df = se_sq * se_sq / (v1 * v1 / (n1f - 1.0) + v2 * v2 / (n2f - 1.0));

    let (p_value, critical, decision) = t_outcome(statistic, df, alpha, tail)?;

    Ok(TwoSampleTTestResult {
        n1: a.len(),
        n2: b.len(),
        mean1,
        mean2,
        variance1,
        variance2,
        standard_error,
        statistic,
        df,
        p_value,
        critical,
        alpha: alpha.alpha(),
        tail,
        decision,
    })
}

/// Paired t-test of H0: mean difference = 0.
///
/// Computes differences dᵢ = xᵢ − yᵢ and applies the one-sample t-test
/// with μ₀ = 0.
pub fn paired_t_test<T: Float>(
    x: &[T],
    y: &[T],
    alpha: Significance,
    tail: Tail,
) -> Result<TTestResult<T>, StatError> {
    Validator::validate_paired(x, y, 2)?;

    let diffs: Vec<T> = x.iter().zip(y.iter()).map(|(&a, &b)| a - b).collect();
    t_test(&diffs, T::zero(), alpha, tail)
}

// ============================================================================
// Shared t Outcome
// ============================================================================

/// p-value, critical region, and decision for a t-statistic.
fn t_outcome(
    statistic: f64,
    df: f64,
    alpha: Significance,
    tail: Tail,
) -> Result<(f64, CriticalValues, Decision), StatError> {
    let p_value = tail.p_value(|x| student_t::cdf(x, df), statistic);
    let critical = tail.critical(
        |q| student_t::quantile(q, df, Convergence::default()),
        alpha.alpha(),
    )?;
    let decision = Decision::from_p_value(p_value, alpha.alpha());
    Ok((p_value, critical, decision))
}

// ============================================================================
// Display Implementations
// ============================================================================

impl<T: Float + Display> Display for ZTestResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "One-sample z-test ({}):", self.tail.name())?;
        writeln!(f, "  n:              {}", self.n)?;
        writeln!(f, "  Sample mean:    {:.4}", self.sample_mean)?;
        writeln!(f, "  Hypothesized:   {:.4}", self.hypothesized_mean)?;
        writeln!(f, "  Population SD:  {:.4}", self.population_std_dev)?;
        writeln!(f, "  Std error:      {:.4}", self.standard_error)?;
        writeln!(f, "  z-statistic:    {:.4}", self.statistic)?;
        writeln!(f, "  p-value:        {:.4}", self.p_value)?;
        writeln!(f, "  Critical:       {}", self.critical)?;
        writeln!(f, "  Decision:       {} (alpha = {})", self.decision, self.alpha)
    }
}

impl<T: Float + Display> Display for TTestResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "One-sample t-test ({}):", self.tail.name())?;
        writeln!(f, "  n:              {}", self.n)?;
        writeln!(f, "  Sample mean:    {:.4}", self.sample_mean)?;
        writeln!(f, "  Hypothesized:   {:.4}", self.hypothesized_mean)?;
        writeln!(f, "  Std dev:        {:.4}", self.std_dev)?;
        writeln!(f, "  Std error:      {:.4}", self.standard_error)?;
        writeln!(f, "  t-statistic:    {:.4}", self.statistic)?;
        writeln!(f, "  df:             {}", self.df)?;
        writeln!(f, "  p-value:        {:.4}", self.p_value)?;
        writeln!(f, "  Critical:       {}", self.critical)?;
        writeln!(f, "  Decision:       {} (alpha = {})", self.decision, self.alpha)
    }
}

impl<T: Float + Display> Display for TwoSampleTTestResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Two-sample Welch t-test ({}):", self.tail.name())?;
        writeln!(f, "  n1, n2:         {}, {}", self.n1, self.n2)?;
        writeln!(f, "  Means:          {:.4}, {:.4}", self.mean1, self.mean2)?;
        writeln!(
            f,
            "  Variances:      {:.4}, {:.4}",
            self.variance1, self.variance2
        )?;
        writeln!(f, "  Std error:      {:.4}", self.standard_error)?;
        writeln!(f, "  t-statistic:    {:.4}", self.statistic)?;
        writeln!(f, "  df (Welch):     {:.2}", self.df)?;
        writeln!(f, "  p-value:        {:.4}", self.p_value)?;
        writeln!(f, "  Critical:       {}", self.critical)?;
        writeln!(f, "  Decision:       {} (alpha = {})", self.decision, self.alpha)
    }
}
