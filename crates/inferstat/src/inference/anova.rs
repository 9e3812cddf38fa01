//! One-way analysis of variance.
//!
//! ## Purpose
//!
//! This module implements one-way ANOVA: a test of whether k group means are
//! all equal, by partitioning total variation into between-group and
//! within-group components and referring their ratio to the F-distribution.
//!
//! ## Design notes
//!
//! * **Full table**: The result carries the complete sum-of-squares table
//!   (SS, df, MS for both components) so a report can show the classical
//!   ANOVA layout.
//! * **Degenerate data**: Zero within-group variance makes the ratio
//!   undefined and is rejected as an error rather than producing infinity.
//!
//! ## Invariants
//!
//! * `ss_total = ss_between + ss_within` up to rounding.
//! * `df_between = k − 1`, `df_within = N − k`.
//!
//! ## Non-goals
//!
//! * This module does not provide post-hoc comparisons or effect sizes.
//! * This module does not implement repeated-measures or two-way designs.

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

/// Result of a one-way ANOVA.
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaResult<T> {
    /// Number of groups k.
    pub groups: usize,

    /// Total number of observations N.
    pub n_total: usize,

    /// Grand mean over all observations.
    pub grand_mean: T,

    /// Per-group means.
    pub group_means: Vec<T>,

    /// Sum of squares between groups.
    pub ss_between: T,

    /// Sum of squares within groups.
    pub ss_within: T,

    /// Total sum of squares.
    pub ss_total: T,

    /// Degrees of freedom between groups (k − 1).
    pub df_between: f64,

    /// Degrees of freedom within groups (N − k).
    pub df_within: f64,

    /// Mean square between groups.
    pub ms_between: T,

    /// Mean square within groups.
    pub ms_within: T,

    /// F-statistic MS_between / MS_within.
    pub statistic: f64,

    /// Upper-tail p-value under the F-distribution.
    pub p_value: f64,

    /// Boundary of the rejection region.
    pub critical: CriticalValues,

    /// Significance level α.
    pub alpha: f64,

    /// Test decision at α.
    pub decision: Decision,
}

// ============================================================================
// One-Way ANOVA
// ============================================================================

/// One-way ANOVA of H0: all group means are equal.
///
/// # Algorithm
///
/// ```text
/// SS_between = Σ nⱼ (x̄ⱼ − x̄)²        df = k − 1
/// SS_within  = Σⱼ Σᵢ (xᵢⱼ − x̄ⱼ)²     df = N − k
/// F = MS_between / MS_within
/// ```
pub fn one_way_anova<T: Float>(
    groups: &[&[T]],
    alpha: Significance,
) -> Result<AnovaResult<T>, StatError> {
    Validator::validate_groups(groups, 2, 2)?;

    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.len()).sum();

    // Grand mean over the pooled observations
    let grand_sum = groups.iter().fold(T::zero(), |acc, g| {
        acc + g.iter().copied().fold(T::zero(), |a, v| a + v)
    });
    let grand_mean = grand_sum / T::from(n_total).unwrap_or_else(T::one);

    let group_means: Vec<T> = groups.iter().map(|g| descriptive::mean(g)).collect();

    let ss_between = groups
        .iter()
        .zip(group_means.iter())
        .fold(T::zero(), |acc, (g, &m)| {
            let d = m - grand_mean;
            acc + T::from(g.len()).unwrap_or_else(T::one) * d * d
        });

    let ss_within = groups
        .iter()
        .zip(group_means.iter())
        .fold(T::zero(), |acc, (g, &m)| {
            acc + descriptive::sum_of_squares(g, m)
        });

    let ss_total = ss_between + ss_within;

    let df_between = (k - 1) as f64;
    let df_within = (n_total - k) as f64;

    let ms_between = ss_between / T::from(df_between).unwrap_or_else(T::one);
    let ms_within = ss_within / T::from(df_within).unwrap_or_else(T::one);

    if ms_within <= T::zero() {
        return Err(StatError::ZeroVariance("the within-group residuals"));
    }

    let statistic =
        ms_between.to_f64().unwrap_or(f64::NAN) / ms_within.to_f64().unwrap_or(f64::NAN);

    let p_value = (1.0 - fisher_f::cdf(statistic, df_between, df_within)).clamp(0.0, 1.0);
    let critical = CriticalValues::Upper(fisher_f::quantile(
        1.0 - alpha.alpha(),
        df_between,
        df_within,
        Convergence::default(),
    )?);
    let decision = Decision::from_p_value(p_value, alpha.alpha());

    Ok(AnovaResult {
        groups: k,
        n_total,
        grand_mean,
        group_means,
        ss_between,
        ss_within,
        ss_total,
        df_between,
        df_within,
        ms_between,
        ms_within,
        statistic,
        p_value,
        critical,
        alpha: alpha.alpha(),
        decision,
    })
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for AnovaResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "One-way ANOVA:")?;
        writeln!(f, "  Groups:         {}", self.groups)?;
        writeln!(f, "  Observations:   {}", self.n_total)?;
        writeln!(f, "  Grand mean:     {:.4}", self.grand_mean)?;
        writeln!(f)?;
        writeln!(f, "  {:<10} {:>12} {:>8} {:>12}", "Source", "SS", "df", "MS")?;
        writeln!(
            f,
            "  {:<10} {:>12.4} {:>8} {:>12.4}",
            "Between", self.ss_between, self.df_between, self.ms_between
        )?;
        writeln!(
            f,
            "  {:<10} {:>12.4} {:>8} {:>12.4}",
            "Within", self.ss_within, self.df_within, self.ms_within
        )?;
        writeln!(
            f,
            "  {:<10} {:>12.4} {:>8}",
            "Total",
            self.ss_total,
            self.df_between + self.df_within
        )?;
        writeln!(f)?;
        writeln!(f, "  F-statistic:    {:.4}", self.statistic)?;
        writeln!(f, "  p-value:        {:.4}", self.p_value)?;
        writeln!(f, "  Critical:       {}", self.critical)?;
        writeln!(f, "  Decision:       {} (alpha = {})", self.decision, self.alpha)
    }
}
