//! Error types for statistical operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during statistical
//! computation, covering input validation, parameter constraints, degenerate
//! data, and iteration-budget exhaustion in the quantile solvers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Specific**: Each constraint violation has its own variant; nothing is coerced.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty samples, mismatched lengths, non-finite values.
//! 2. **Parameter validation**: Probabilities, significance levels, degrees of freedom.
//! 3. **Degenerate data**: Zero variance where a denominator needs it, population
//!    smaller than the sample in finite-population corrections.
//! 4. **Convergence**: Newton solvers that exhaust their iteration budget.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for statistical operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    /// Input sample is empty.
    EmptyInput,

    /// Paired inputs must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Number of observations is below the minimum required by the procedure.
    TooFewPoints {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A probability must lie strictly between 0 and 1.
    InvalidProbability(f64),

    /// A significance level must lie strictly between 0 and 1.
    InvalidSignificance(f64),

    /// A confidence level is supplied as a percentage strictly between 0 and 100.
    InvalidConfidenceLevel(f64),

    /// Degrees of freedom must be positive and finite.
    InvalidDegreesOfFreedom(f64),

    /// A standard deviation must be positive and finite.
    NonPositiveStandardDeviation(f64),

    /// A denominator that requires spread in the data is zero.
    ZeroVariance(&'static str),

    /// Expected counts in a chi-square test must be positive.
    InvalidExpectedCount(f64),

    /// A finite population must be at least as large as the sample drawn from it.
    InvalidPopulation {
        /// Size of the sample.
        sample: usize,
        /// Size of the population.
        population: u64,
    },

    /// A margin of error must be positive and finite.
    InvalidMargin(f64),

    /// Too few groups for a between-group comparison.
    TooFewGroups {
        /// Number of groups provided.
        got: usize,
        /// Minimum required groups.
        min: usize,
    },

    /// A quantile solver exhausted its iteration budget without converging.
    NonConvergence {
        /// Iterations performed before giving up.
        iterations: usize,
        /// Step tolerance the solver was asked to reach.
        tolerance: f64,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sample is empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} values, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few observations: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidProbability(p) => {
                write!(f, "Invalid probability: {p} (must be > 0 and < 1)")
            }
            Self::InvalidSignificance(a) => {
                write!(f, "Invalid significance level: {a} (must be > 0 and < 1)")
            }
            Self::InvalidConfidenceLevel(level) => {
                write!(
                    f,
                    "Invalid confidence level: {level}% (must be > 0 and < 100)"
                )
            }
            Self::InvalidDegreesOfFreedom(df) => {
                write!(f, "Invalid degrees of freedom: {df} (must be > 0)")
            }
            Self::NonPositiveStandardDeviation(sd) => {
                write!(f, "Invalid standard deviation: {sd} (must be > 0)")
            }
            Self::ZeroVariance(what) => {
                write!(f, "Zero variance in {what}: statistic is undefined")
            }
            Self::InvalidExpectedCount(e) => {
                write!(f, "Invalid expected count: {e} (must be > 0)")
            }
            Self::InvalidPopulation { sample, population } => {
                write!(
                    f,
                    "Invalid population size: {population} (must be at least the sample size {sample})"
                )
            }
            Self::InvalidMargin(e) => {
                write!(f, "Invalid margin of error: {e} (must be > 0 and finite)")
            }
            Self::TooFewGroups { got, min } => {
                write!(f, "Too few groups: got {got}, need at least {min}")
            }
            Self::NonConvergence {
                iterations,
                tolerance,
            } => {
                write!(
                    f,
                    "Quantile solver did not converge within {iterations} iterations (tolerance {tolerance:e})"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for StatError {}
