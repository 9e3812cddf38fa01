//! Shared outcome types for hypothesis tests.
//!
//! ## Purpose
//!
//! This module defines the vocabulary every test result is written in:
//! which tail the alternative lives in, the significance level, the critical
//! region, and the reject / fail-to-reject decision.
//!
//! ## Design notes
//!
//! * **Decision rule**: Reject the null hypothesis iff `p < α`, everywhere.
//! * **Two-tailed p-values**: Computed as `2·(1 − CDF(|statistic|))` and
//!   clamped into the closed unit interval.
//! * **Critical regions**: Two-tailed tests report a ± pair; one-tailed
//!   tests report a single bound on the relevant side.
//!
//! ## Invariants
//!
//! * p-values are always inside [0, 1]; NaN is a defect, never a result.
//! * `Significance` holds α strictly inside (0, 1).
//!
//! ## Non-goals
//!
//! * This module does not compute statistics or consult distributions.

use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::errors::StatError;

// ============================================================================
// Tail Selection
// ============================================================================

/// Which tail of the reference distribution the alternative hypothesis occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tail {
    /// Alternative: the parameter is smaller than hypothesized.
    Lower,

    /// Alternative: the parameter is larger than hypothesized.
    Upper,

    /// Alternative: the parameter differs in either direction.
    #[default]
    Two,
}

impl Tail {
    /// Get the name of the tail.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Tail::Lower => "lower-tailed",
            Tail::Upper => "upper-tailed",
            Tail::Two => "two-tailed",
        }
    }

    /// p-value for a statistic under the given CDF.
    ///
    /// Two-tailed tests assume a distribution symmetric about zero.
    pub fn p_value<F>(self, cdf: F, statistic: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let p = match self {
            Tail::Lower => cdf(statistic),
            Tail::Upper => 1.0 - cdf(statistic),
            Tail::Two => 2.0 * (1.0 - cdf(statistic.abs())),
        };
        p.clamp(0.0, 1.0)
    }

    /// Critical value(s) at significance α under the given quantile function.
    ///
    /// Two-tailed tests assume a distribution symmetric about zero and
    /// report the ± pair.
    pub fn critical<Q>(self, quantile: Q, alpha: f64) -> std::result::Result<CriticalValues, StatError>
    where
        Q: Fn(f64) -> std::result::Result<f64, StatError>,
    {
        match self {
            Tail::Lower => Ok(CriticalValues::Lower(quantile(alpha)?)),
            Tail::Upper => Ok(CriticalValues::Upper(quantile(1.0 - alpha)?)),
            Tail::Two => {
                let upper = quantile(1.0 - alpha / 2.0)?;
                Ok(CriticalValues::TwoSided {
                    lower: -upper,
                    upper,
                })
            }
        }
    }
}

// ============================================================================
// Critical Values
// ============================================================================

/// The boundary of the rejection region on the statistic scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CriticalValues {
    /// Reject when the statistic falls below this value.
    Lower(f64),

    /// Reject when the statistic exceeds this value.
    Upper(f64),

    /// Reject when the statistic falls outside the ± pair.
    TwoSided {
        /// Lower rejection boundary.
        lower: f64,
        /// Upper rejection boundary.
        upper: f64,
    },
}

impl Display for CriticalValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Lower(v) => write!(f, "{v:.4} (lower)"),
            Self::Upper(v) => write!(f, "{v:.4} (upper)"),
            Self::TwoSided { lower, upper } => write!(f, "{lower:.4} / {upper:.4}"),
        }
    }
}

// ============================================================================
// Significance Level
// ============================================================================

/// A validated significance level α strictly inside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significance(f64);

impl Significance {
    /// Create from α directly (e.g., 0.05).
    pub fn new(alpha: f64) -> std::result::Result<Self, StatError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(StatError::InvalidSignificance(alpha));
        }
        Ok(Self(alpha))
    }

    /// Create from a confidence level supplied as a percentage
    /// (e.g., 95 → α = 0.05).
    pub fn from_confidence_percent(level: f64) -> std::result::Result<Self, StatError> {
        if !level.is_finite() || level <= 0.0 || level >= 100.0 {
            return Err(StatError::InvalidConfidenceLevel(level));
        }
        Self::new(1.0 - level / 100.0)
    }

    /// The significance level α.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.0
    }
}

// ============================================================================
// Decision
// ============================================================================

/// The outcome of a hypothesis test at the chosen significance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The p-value fell below α.
    Reject,

    /// The p-value did not fall below α.
    FailToReject,
}

impl Decision {
    /// Apply the decision rule: reject iff `p < α`.
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Decision::Reject
        } else {
            Decision::FailToReject
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Decision::Reject => write!(f, "reject the null hypothesis"),
            Decision::FailToReject => write!(f, "fail to reject the null hypothesis"),
        }
    }
}
