//! Layer 3: Distributions
//!
//! # Purpose
//!
//! This layer provides the four continuous distributions the inference
//! procedures draw on: standard normal, Student's t, chi-squared, and
//! Fisher F. Each module exposes an `f64` CDF kernel and a quantile solver;
//! the [`Distribution`] enum is the validated, generic entry point.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Inference
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Distributions ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::convergence::Convergence;
use crate::primitives::errors::StatError;

/// Standard normal distribution.
pub mod normal;

/// Student's t-distribution.
pub mod student_t;

/// Chi-squared distribution.
pub mod chi_squared;

/// Fisher F-distribution.
pub mod fisher_f;

// ============================================================================
// Distribution Enum
// ============================================================================

/// A continuous distribution with validated parameters.
///
/// Construct through the named constructors, which reject invalid degrees
/// of freedom up front; `cdf` is then total on the reals, and `quantile`
/// can only fail on an out-of-range probability or solver non-convergence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Standard normal N(0, 1).
    Normal,

    /// Student's t with `df` degrees of freedom.
    StudentT {
        /// Degrees of freedom (> 0).
        df: f64,
    },

    /// Chi-squared with `df` degrees of freedom.
    ChiSquared {
        /// Degrees of freedom (> 0).
        df: f64,
    },

    /// Fisher F with numerator and denominator degrees of freedom.
    FisherF {
        /// Numerator degrees of freedom (> 0).
        df1: f64,
        /// Denominator degrees of freedom (> 0).
        df2: f64,
    },
}

impl Distribution {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Standard normal distribution.
    pub fn normal() -> Self {
        Distribution::Normal
    }

    /// Student's t-distribution with `df > 0`.
    pub fn student_t(df: f64) -> Result<Self, StatError> {
        Self::check_df(df)?;
        Ok(Distribution::StudentT { df })
    }

    /// Chi-squared distribution with `df > 0`.
    pub fn chi_squared(df: f64) -> Result<Self, StatError> {
        Self::check_df(df)?;
        Ok(Distribution::ChiSquared { df })
    }

    /// Fisher F-distribution with `df1, df2 > 0`.
    pub fn fisher_f(df1: f64, df2: f64) -> Result<Self, StatError> {
        Self::check_df(df1)?;
        Self::check_df(df2)?;
        Ok(Distribution::FisherF { df1, df2 })
    }

    fn check_df(df: f64) -> Result<(), StatError> {
        if !df.is_finite() || df <= 0.0 {
            return Err(StatError::InvalidDegreesOfFreedom(df));
        }
        Ok(())
    }

    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the distribution.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Distribution::Normal => "Normal",
            Distribution::StudentT { .. } => "Student-t",
            Distribution::ChiSquared { .. } => "Chi-squared",
            Distribution::FisherF { .. } => "Fisher-F",
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Cumulative distribution function P(X ≤ x).
    ///
    /// Monotonically non-decreasing on the support, asymptoting to 0 and 1.
    /// NaN input propagates as NaN.
    pub fn cdf<T: Float>(&self, x: T) -> T {
        let x_f = x.to_f64().unwrap_or(f64::NAN);
        let c = match *self {
            Distribution::Normal => normal::cdf(x_f),
            Distribution::StudentT { df } => student_t::cdf(x_f, df),
            Distribution::ChiSquared { df } => chi_squared::cdf(x_f, df),
            Distribution::FisherF { df1, df2 } => fisher_f::cdf(x_f, df1, df2),
        };
        T::from(c).unwrap_or_else(T::nan)
    }

    /// Quantile function (inverse CDF) under the default iteration budget.
    ///
    /// # Errors
    ///
    /// * [`StatError::InvalidProbability`] if `p` is not strictly inside (0, 1).
    /// * [`StatError::NonConvergence`] if the solver exhausts its budget.
    pub fn quantile<T: Float>(&self, p: T) -> Result<T, StatError> {
        self.quantile_with(p, Convergence::default())
    }

    /// Quantile function under an explicit iteration budget.
    pub fn quantile_with<T: Float>(&self, p: T, budget: Convergence) -> Result<T, StatError> {
        let p_f = p.to_f64().unwrap_or(f64::NAN);
        if !p_f.is_finite() || p_f <= 0.0 || p_f >= 1.0 {
            return Err(StatError::InvalidProbability(p_f));
        }

        let q = match *self {
            Distribution::Normal => normal::quantile(p_f),
            Distribution::StudentT { df } => student_t::quantile(p_f, df, budget)?,
            Distribution::ChiSquared { df } => chi_squared::quantile(p_f, df, budget)?,
            Distribution::FisherF { df1, df2 } => fisher_f::quantile(p_f, df1, df2, budget)?,
        };
        Ok(T::from(q).unwrap_or_else(T::nan))
    }
}
