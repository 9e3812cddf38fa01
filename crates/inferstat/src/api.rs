//! High-level API for statistical inference.
//!
//! ## Purpose
//!
//! This module is the facade a presentation layer calls: plain functions
//! taking numeric or array arguments and returning structured results, plus
//! re-exports of every procedure and result type in the crate.
//!
//! ## Design notes
//!
//! * **Thin**: The facade adds no logic; every function delegates straight
//!   to its layer.
//! * **Complete**: Everything a caller needs — procedures, result types,
//!   outcome vocabulary, errors, budgets — is reachable from here (and from
//!   the crate prelude, which re-exports this module).

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::distributions::Distribution;
pub use crate::inference::anova::{one_way_anova, AnovaResult};
pub use crate::inference::association::{
    linear_regression, pearson_correlation, CorrelationResult, RegressionResult, Strength,
};
pub use crate::inference::categorical::{chi_square_gof, ChiSquareTestResult};
pub use crate::inference::estimation::{
    confidence_interval, confidence_interval_from_summary, critical_z, margin_of_error,
    power_analysis, required_sample_size, ConfidenceInterval, MarginOfError, PowerResult,
    SampleSizeResult,
};
pub use crate::inference::location::{
    paired_t_test, t_test, t_test_from_summary, welch_t_test, z_test, z_test_from_summary,
    TTestResult, TwoSampleTTestResult, ZTestResult,
};
pub use crate::inference::outcome::{CriticalValues, Decision, Significance, Tail};
pub use crate::inference::variance::{variance_ratio_test, VarianceRatioTestResult};
pub use crate::primitives::convergence::Convergence;
pub use crate::primitives::errors::StatError;

// ============================================================================
// Distribution Facade
// ============================================================================

/// Cumulative probability P(X ≤ x) under the given distribution.
pub fn distribution_cdf<T: Float>(distribution: Distribution, x: T) -> T {
    distribution.cdf(x)
}

/// Value at the given cumulative probability under the given distribution.
///
/// # Errors
///
/// * [`StatError::InvalidProbability`] if `p` is not strictly inside (0, 1).
/// * [`StatError::NonConvergence`] if the quantile solver exhausts its budget.
pub fn distribution_quantile<T: Float>(distribution: Distribution, p: T) -> Result<T, StatError> {
    distribution.quantile(p)
}
