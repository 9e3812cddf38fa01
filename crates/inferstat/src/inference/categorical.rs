//! Chi-square goodness-of-fit test.
//!
//! ## Purpose
//!
//! This module implements the chi-square goodness-of-fit test comparing
//! observed category counts against expected counts.
//!
//! ## Design notes
//!
//! * **Contributions**: The per-category terms (O − E)²/E are kept in the
//!   result so a report can show exactly where the statistic comes from.
//! * **Upper tail**: Deviations in any direction inflate the statistic, so
//!   the rejection region is the upper tail only.
//!
//! ## Invariants
//!
//! * `statistic = Σ contributions`, every contribution non-negative.
//! * `df = k − 1` for k categories.
//!
//! ## Non-goals
//!
//! * This module does not implement the test of independence on
//!   contingency tables.

use std::fmt::{Display, Formatter, Result as FmtResult};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::distributions::chi_squared;
use crate::engine::validator::Validator;
use crate::inference::outcome::{CriticalValues, Decision, Significance};
use crate::primitives::convergence::Convergence;
use crate::primitives::errors::StatError;

// ============================================================================
// Result Structure
// ============================================================================

/// Result of a chi-square goodness-of-fit test.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareTestResult<T> {
    /// Number of categories.
    pub categories: usize,

    /// Per-category contributions (O − E)²/E.
    pub contributions: Vec<T>,

    /// Chi-square statistic.
    pub statistic: f64,

    /// Degrees of freedom (k − 1).
    pub df: f64,

    /// Upper-tail p-value under the chi-squared distribution.
    pub p_value: f64,

    /// Boundary of the rejection region.
    pub critical: CriticalValues,

    /// Significance level α.
    pub alpha: f64,

    /// Test decision at α.
    pub decision: Decision,
}

// ============================================================================
// Goodness-of-Fit Test
// ============================================================================

/// Chi-square goodness-of-fit test of H0: the observed counts follow the
/// expected frequencies.
///
/// # Algorithm
///
/// ```text
/// χ² = Σ (Oᵢ − Eᵢ)² / Eᵢ,   df = k − 1
/// ```
pub fn chi_square_gof<T: Float>(
    observed: &[T],
    expected: &[T],
    alpha: Significance,
) -> Result<ChiSquareTestResult<T>, StatError> {
    Validator::validate_paired(observed, expected, 2)?;
    Validator::validate_expected_counts(expected)?;

    let contributions: Vec<T> = observed
        .iter()
        .zip(expected.iter())
        .map(|(&o, &e)| {
            let d = o - e;
            d * d / e
        })
        .collect();

    let statistic = contributions
        .iter()
        .fold(T::zero(), |acc, &c| acc + c)
        .to_f64()
        .unwrap_or(f64::NAN);
    let df = (observed.len() - 1) as f64;

    let p_value = (1.0 - chi_squared::cdf(statistic, df)).clamp(0.0, 1.0);
    let critical = CriticalValues::Upper(chi_squared::quantile(
        1.0 - alpha.alpha(),
        df,
        Convergence::default(),
    )?);
    let decision = Decision::from_p_value(p_value, alpha.alpha());

    Ok(ChiSquareTestResult {
        categories: observed.len(),
        contributions,
        statistic,
        df,
        p_value,
        critical,
        alpha: alpha.alpha(),
        decision,
    })
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ChiSquareTestResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Chi-square goodness-of-fit test:")?;
        writeln!(f, "  Categories:     {}", self.categories)?;
        write!(f, "  Contributions: ")?;
        for c in &self.contributions {
            write!(f, " {:.4}", c)?;
        }
        writeln!(f)?;
        writeln!(f, "  Chi-square:     {:.4}", self.statistic)?;
        writeln!(f, "  df:             {}", self.df)?;
        writeln!(f, "  p-value:        {:.4}", self.p_value)?;
        writeln!(f, "  Critical:       {}", self.critical)?;
        writeln!(f, "  Decision:       {} (alpha = {})", self.decision, self.alpha)
    }
}
