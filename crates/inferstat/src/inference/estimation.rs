//! Confidence intervals, margins of error, sample sizes, and power.
//!
//! ## Purpose
//!
//! This module implements the normal-theory estimation utilities: confidence
//! intervals for a mean with known σ, margins of error for proportions,
//! required sample sizes with finite-population correction, and the power of
//! a one-sample z-test.
//!
//! ## Design notes
//!
//! * **z-table fast paths**: The common confidence levels resolve to the
//!   tabulated constants (90% → 1.645, 95% → 1.96, 99% → 2.576); any other
//!   level falls through to the normal quantile.
//! * **FPC**: When a finite population is given, standard errors shrink by
//!   √((N−n)/(N−1)) and required sample sizes by n/(1+(n−1)/N).
//! * **Percent levels**: Confidence levels arrive as percentages, matching
//!   how callers state them.
//!
//! ## Invariants
//!
//! * `lower <= mean <= upper` for every interval.
//! * Power lies inside [0, 1].
//! * Required sample sizes round up, never down.
//!
//! ## Non-goals
//!
//! * This module does not provide t-based (unknown-σ) intervals.
//! * This module does not compute power for two-sample designs.

use std::fmt::{Display, Formatter, Result as FmtResult};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::distributions::normal;
use crate::engine::validator::Validator;
use crate::inference::outcome::{Significance, Tail};
use crate::math::descriptive;
use crate::primitives::errors::StatError;

// ============================================================================
// z-Table
// ============================================================================

/// Critical z-value for a two-sided confidence level given in percent.
///
/// The common levels resolve to the tabulated constants; any other level is
/// computed as `Φ⁻¹((1 + level/100) / 2)`.
pub fn critical_z(level_percent: f64) -> Result<f64, StatError> {
    Validator::validate_confidence_percent(level_percent)?;

    // Fast paths for common confidence levels
    let z = if (level_percent - 90.0).abs() < 1e-9 {
        1.645
    } else if (level_percent - 95.0).abs() < 1e-9 {
        1.96
    } else if (level_percent - 99.0).abs() < 1e-9 {
        2.576
    } else {
        normal::quantile((1.0 + level_percent / 100.0) / 2.0)
    };

    Ok(z)
}

// ============================================================================
// Result Structures
// ============================================================================

/// A two-sided confidence interval for a mean with known σ.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceInterval<T> {
    /// Number of observations.
    pub n: usize,

    /// Point estimate (sample mean).
    pub mean: T,

    /// Known population standard deviation.
    pub sigma: T,

    /// Standard error σ/√n.
    pub standard_error: T,

    /// Confidence level in percent.
    pub level_percent: f64,

    /// Critical z-value for the level.
    pub z: f64,

    /// Lower interval bound.
    pub lower: T,

    /// Upper interval bound.
    pub upper: T,
}

/// A margin of error for an estimated proportion.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginOfError {
    /// Estimated proportion.
    pub proportion: f64,

    /// Number of observations.
    pub n: usize,

    /// Confidence level in percent.
    pub level_percent: f64,

    /// Critical z-value for the level.
    pub z: f64,

    /// Standard error √(p(1−p)/n).
    pub standard_error: f64,

    /// Finite-population correction factor, if a population was given.
    pub fpc: Option<f64>,

    /// The margin of error.
    pub margin: f64,
}

/// A required sample size for estimating a proportion.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSizeResult {
    /// Anticipated proportion.
    pub proportion: f64,

    /// Desired margin of error.
    pub margin: f64,

    /// Confidence level in percent.
    pub level_percent: f64,

    /// Critical z-value for the level.
    pub z: f64,

    /// Infinite-population sample size before rounding.
    pub unadjusted: f64,

    /// Finite population the correction was applied against, if any.
    pub population: Option<u64>,

    /// Required sample size, rounded up.
    pub required: u64,
}

/// Power of a one-sample z-test.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerResult {
    /// Standardized effect size (μ₁ − μ₀)/σ.
    pub effect_size: f64,

    /// Planned sample size.
    pub n: usize,

    /// Significance level α.
    pub alpha: f64,

    /// Tail of the alternative hypothesis.
    pub tail: Tail,

    /// Critical z-value at α.
    pub z_critical: f64,

    /// Probability of rejecting a false null hypothesis.
    pub power: f64,
}

// ============================================================================
// Confidence Interval
// ============================================================================

/// Confidence interval for the mean of a sample with known σ.
pub fn confidence_interval<T: Float>(
    sample: &[T],
    sigma: T,
    level_percent: f64,
) -> Result<ConfidenceInterval<T>, StatError> {
    Validator::validate_sample(sample, 1)?;
    let mean = descriptive::mean(sample);
    confidence_interval_from_summary(mean, sigma, sample.len(), level_percent)
}

/// Confidence interval from summary statistics.
///
/// # Algorithm
///
/// ```text
/// x̄ ± z · σ/√n
/// ```
pub fn confidence_interval_from_summary<T: Float>(
    mean: T,
    sigma: T,
    n: usize,
    level_percent: f64,
) -> Result<ConfidenceInterval<T>, StatError> {
    Validator::validate_scalar(mean, "mean")?;
    Validator::validate_std_dev(sigma)?;
    if n == 0 {
        return Err(StatError::EmptyInput);
    }

    let z = critical_z(level_percent)?;
    let sqrt_n = T::from(n).unwrap_or_else(T::one).sqrt();
    let standard_error = sigma / sqrt_n;
    let half_width = T::from(z).unwrap_or_else(T::nan) * standard_error;

    Ok(ConfidenceInterval {
        n,
        mean,
        sigma,
        standard_error,
        level_percent,
        z,
        lower: mean - half_width,
        upper: mean + half_width,
    })
}

// ============================================================================
// Margin of Error
// ============================================================================

/// Margin of error for an estimated proportion, with optional
/// finite-population correction.
///
/// # Algorithm
///
/// ```text
/// e = z · √(p(1−p)/n) · √((N−n)/(N−1))
/// ```
pub fn margin_of_error(
    proportion: f64,
    n: usize,
    level_percent: f64,
    population: Option<u64>,
) -> Result<MarginOfError, StatError> {
    Validator::validate_proportion(proportion)?;
    if n == 0 {
        return Err(StatError::EmptyInput);
    }

    let z = critical_z(level_percent)?;
    let standard_error = (proportion * (1.0 - proportion) / n as f64).sqrt();

    let fpc = match population {
        Some(pop) => {
            Validator::validate_population(n, pop)?;
            Some(((pop as f64 - n as f64) / (pop as f64 - 1.0)).sqrt())
        }
        None => None,
    };

    let margin = z * standard_error * fpc.unwrap_or(1.0);

    Ok(MarginOfError {
        proportion,
        n,
        level_percent,
        z,
        standard_error,
        fpc,
        margin,
    })
}

// ============================================================================
// Required Sample Size
// ============================================================================

/// Required sample size to estimate a proportion within a margin of error,
/// with optional finite-population correction.
///
/// # Algorithm
///
/// ```text
/// n₀ = z² · p(1−p) / e²
/// n  = n₀ / (1 + (n₀ − 1)/N)     (finite population N)
/// ```
pub fn required_sample_size(
    proportion: f64,
    margin: f64,
    level_percent: f64,
    population: Option<u64>,
) -> Result<SampleSizeResult, StatError> {
    Validator::validate_probability(proportion)?;
    Validator::validate_margin(margin)?;

    let z = critical_z(level_percent)?;
    let unadjusted = z * z * proportion * (1.0 - proportion) / (margin * margin);

    let adjusted = match population {
        Some(pop) => {
            if pop < 1 {
                return Err(StatError::InvalidPopulation {
                    sample: 0,
                    population: pop,
                });
            }
            unadjusted / (1.0 + (unadjusted - 1.0) / pop as f64)
        }
        None => unadjusted,
    };

    Ok(SampleSizeResult {
        proportion,
        margin,
        level_percent,
        z,
        unadjusted,
        population,
        required: adjusted.ceil() as u64,
    })
}

// ============================================================================
// Power Analysis
// ============================================================================

/// Power of a one-sample z-test at a standardized effect size.
///
/// # Algorithm
///
/// ```text
/// power = 1 − Φ(z_crit − |d|·√n)
/// ```
///
/// where `z_crit` is the critical z at α (α/2 per side for two-tailed tests).
pub fn power_analysis(
    effect_size: f64,
    n: usize,
    alpha: Significance,
    tail: Tail,
) -> Result<PowerResult, StatError> {
    if !effect_size.is_finite() {
        return Err(StatError::InvalidNumericValue(format!(
            "effect_size={effect_size}"
        )));
    }
    if n == 0 {
        return Err(StatError::EmptyInput);
    }

    let z_critical = match tail {
        Tail::Two => normal::quantile(1.0 - alpha.alpha() / 2.0),
        Tail::Lower | Tail::Upper => normal::quantile(1.0 - alpha.alpha()),
    };

    let shift = effect_size.abs() * (n as f64).sqrt();
    let power = (1.0 - normal::cdf(z_critical - shift)).clamp(0.0, 1.0);

    Ok(PowerResult {
        effect_size,
        n,
        alpha: alpha.alpha(),
        tail,
        z_critical,
        power,
    })
}

// ============================================================================
// Display Implementations
// ============================================================================

impl<T: Float + Display> Display for ConfidenceInterval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{}% confidence interval:", self.level_percent)?;
        writeln!(f, "  n:              {}", self.n)?;
        writeln!(f, "  Mean:           {:.4}", self.mean)?;
        writeln!(f, "  Sigma:          {:.4}", self.sigma)?;
        writeln!(f, "  Std error:      {:.4}", self.standard_error)?;
        writeln!(f, "  z:              {:.4}", self.z)?;
        writeln!(f, "  Interval:       [{:.4}, {:.4}]", self.lower, self.upper)
    }
}

impl Display for MarginOfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Margin of error ({}% confidence):", self.level_percent)?;
        writeln!(f, "  Proportion:     {:.4}", self.proportion)?;
        writeln!(f, "  n:              {}", self.n)?;
        writeln!(f, "  z:              {:.4}", self.z)?;
        writeln!(f, "  Std error:      {:.4}", self.standard_error)?;
        if let Some(fpc) = self.fpc {
            writeln!(f, "  FPC:            {:.4}", fpc)?;
        }
        writeln!(f, "  Margin:         {:.4}", self.margin)
    }
}

impl Display for SampleSizeResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Required sample size ({}% confidence):", self.level_percent)?;
        writeln!(f, "  Proportion:     {:.4}", self.proportion)?;
        writeln!(f, "  Margin:         {:.4}", self.margin)?;
        writeln!(f, "  z:              {:.4}", self.z)?;
        writeln!(f, "  Unadjusted:     {:.2}", self.unadjusted)?;
        if let Some(pop) = self.population {
            writeln!(f, "  Population:     {}", pop)?;
        }
        writeln!(f, "  Required:       {}", self.required)
    }
}

impl Display for PowerResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Power analysis ({}):", self.tail.name())?;
        writeln!(f, "  Effect size:    {:.4}", self.effect_size)?;
        writeln!(f, "  n:              {}", self.n)?;
        writeln!(f, "  alpha:          {}", self.alpha)?;
        writeln!(f, "  z critical:     {:.4}", self.z_critical)?;
        writeln!(f, "  Power:          {:.4}", self.power)
    }
}
