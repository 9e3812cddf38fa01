//! Input validation for inference procedures.
//!
//! ## Purpose
//!
//! This module provides comprehensive validation functions for procedure
//! inputs: samples, paired vectors, probabilities, significance levels,
//! spread parameters, and population sizes.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Minimum Counts**: Variance-based procedures need at least 2 observations.
//! * **Domain Bounds**: Probabilities in (0, 1), standard deviations > 0.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform any statistical computation itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for procedure inputs.
///
/// Provides static methods for validating samples and parameters. All
/// methods return `Result<(), StatError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate a single sample: non-empty, all finite, at least `min` values.
    pub fn validate_sample<T: Float>(data: &[T], min: usize) -> Result<(), StatError> {
        // Check 1: Non-empty
        if data.is_empty() {
            return Err(StatError::EmptyInput);
        }

        // Check 2: Sufficient observations
        let n = data.len();
        if n < min {
            return Err(StatError::TooFewPoints { got: n, min });
        }

        // Check 3: All values finite
        for (i, &v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Err(StatError::InvalidNumericValue(format!(
                    "value[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a pair of samples that must align element-wise.
    pub fn validate_paired<T: Float>(x: &[T], y: &[T], min: usize) -> Result<(), StatError> {
        if x.len() != y.len() {
            return Err(StatError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Self::validate_sample(x, min)?;
        Self::validate_sample(y, min)
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), StatError> {
        if !val.is_finite() {
            return Err(StatError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a probability strictly inside (0, 1).
    pub fn validate_probability(p: f64) -> Result<(), StatError> {
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(StatError::InvalidProbability(p));
        }
        Ok(())
    }

    /// Validate a proportion inside the closed interval [0, 1].
    pub fn validate_proportion(p: f64) -> Result<(), StatError> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(StatError::InvalidProbability(p));
        }
        Ok(())
    }

    /// Validate a confidence level supplied as a percentage in (0, 100).
    pub fn validate_confidence_percent(level: f64) -> Result<(), StatError> {
        if !level.is_finite() || level <= 0.0 || level >= 100.0 {
            return Err(StatError::InvalidConfidenceLevel(level));
        }
        Ok(())
    }

    /// Validate a standard deviation: positive and finite.
    pub fn validate_std_dev<T: Float>(sd: T) -> Result<(), StatError> {
        let sd_f = sd.to_f64().unwrap_or(f64::NAN);
        if !sd_f.is_finite() || sd_f <= 0.0 {
            return Err(StatError::NonPositiveStandardDeviation(sd_f));
        }
        Ok(())
    }

    /// Validate a margin of error: positive and finite.
    pub fn validate_margin(e: f64) -> Result<(), StatError> {
        if !e.is_finite() || e <= 0.0 {
            return Err(StatError::InvalidMargin(e));
        }
        Ok(())
    }

    /// Validate a finite population against the sample drawn from it.
    pub fn validate_population(sample: usize, population: u64) -> Result<(), StatError> {
        if population < sample as u64 || population < 2 {
            return Err(StatError::InvalidPopulation { sample, population });
        }
        Ok(())
    }

    // ========================================================================
    // Structured Input Validation
    // ========================================================================

    /// Validate expected counts for a chi-square test: all positive and finite.
    pub fn validate_expected_counts<T: Float>(expected: &[T]) -> Result<(), StatError> {
        for &e in expected {
            let e_f = e.to_f64().unwrap_or(f64::NAN);
            if !e_f.is_finite() || e_f <= 0.0 {
                return Err(StatError::InvalidExpectedCount(e_f));
            }
        }
        Ok(())
    }

    /// Validate a collection of groups for a between-group comparison.
    ///
    /// Requires at least `min_groups` groups, each with at least
    /// `min_per_group` finite observations.
    pub fn validate_groups<T: Float>(
        groups: &[&[T]],
        min_groups: usize,
        min_per_group: usize,
    ) -> Result<(), StatError> {
        if groups.len() < min_groups {
            return Err(StatError::TooFewGroups {
                got: groups.len(),
                min: min_groups,
            });
        }
        for group in groups {
            Self::validate_sample(group, min_per_group)?;
        }
        Ok(())
    }
}
