#![cfg(feature = "dev")]
//! Tests for the input validator.
//!
//! These tests verify every validation rule the procedures rely on:
//! - Sample shape and finiteness checks
//! - Parameter domain bounds
//! - Structured-input checks for tables and groups
//!
//! ## Test Organization
//!
//! 1. **Sample Validation** - Emptiness, length, finiteness, pairing
//! 2. **Parameter Validation** - Probabilities, levels, spreads
//! 3. **Structured Input** - Expected counts, populations, groups

use inferstat::internals::engine::validator::Validator;
use inferstat::prelude::StatError;

// ============================================================================
// Sample Validation Tests
// ============================================================================

/// Test acceptance of a well-formed sample.
#[test]
fn test_validate_sample_accepts_good_input() {
    assert!(Validator::validate_sample(&[1.0_f64, 2.0, 3.0], 2).is_ok());
}

/// Test rejection of an empty sample.
#[test]
fn test_validate_sample_rejects_empty() {
    let result = Validator::validate_sample::<f64>(&[], 1);
    assert_eq!(result.unwrap_err(), StatError::EmptyInput);
}

/// Test rejection of a too-short sample.
#[test]
fn test_validate_sample_rejects_short() {
    let result = Validator::validate_sample(&[1.0_f64], 2);
    assert_eq!(result.unwrap_err(), StatError::TooFewPoints { got: 1, min: 2 });
}

/// Test rejection of non-finite values with the offending index.
#[test]
fn test_validate_sample_rejects_non_finite() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = Validator::validate_sample(&[1.0, bad, 3.0], 2);
        match result.unwrap_err() {
            StatError::InvalidNumericValue(msg) => {
                assert!(msg.contains("value[1]"), "message should name the index: {msg}")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

/// Test paired validation: length mismatch is reported before content.
#[test]
fn test_validate_paired_rejects_mismatch() {
    let result = Validator::validate_paired(&[1.0_f64, 2.0], &[1.0, 2.0, 3.0], 2);
    assert_eq!(
        result.unwrap_err(),
        StatError::MismatchedInputs { x_len: 2, y_len: 3 }
    );
}

/// Test scalar finiteness validation.
#[test]
fn test_validate_scalar() {
    assert!(Validator::validate_scalar(1.5_f64, "mu0").is_ok());
    let result = Validator::validate_scalar(f64::NAN, "mu0");
    assert!(matches!(result, Err(StatError::InvalidNumericValue(_))));
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test the open-interval probability check.
#[test]
fn test_validate_probability() {
    assert!(Validator::validate_probability(0.5).is_ok());
    for bad in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
        assert!(matches!(
            Validator::validate_probability(bad),
            Err(StatError::InvalidProbability(_))
        ));
    }
}

/// Test the closed-interval proportion check.
#[test]
fn test_validate_proportion() {
    assert!(Validator::validate_proportion(0.0).is_ok());
    assert!(Validator::validate_proportion(1.0).is_ok());
    assert!(matches!(
        Validator::validate_proportion(1.2),
        Err(StatError::InvalidProbability(_))
    ));
}

/// Test the confidence-percent check.
#[test]
fn test_validate_confidence_percent() {
    assert!(Validator::validate_confidence_percent(95.0).is_ok());
    for bad in [0.0, 100.0, -1.0, f64::INFINITY] {
        assert!(matches!(
            Validator::validate_confidence_percent(bad),
            Err(StatError::InvalidConfidenceLevel(_))
        ));
    }
}

/// Test the standard-deviation check.
#[test]
fn test_validate_std_dev() {
    assert!(Validator::validate_std_dev(2.5_f64).is_ok());
    for bad in [0.0_f64, -1.0, f64::NAN] {
        assert!(matches!(
            Validator::validate_std_dev(bad),
            Err(StatError::NonPositiveStandardDeviation(_))
        ));
    }
}

/// Test the margin check.
#[test]
fn test_validate_margin() {
    assert!(Validator::validate_margin(0.05).is_ok());
    for bad in [0.0, -0.01, f64::INFINITY] {
        assert!(matches!(
            Validator::validate_margin(bad),
            Err(StatError::InvalidMargin(_))
        ));
    }
}

// ============================================================================
// Structured Input Tests
// ============================================================================

/// Test the expected-count check.
#[test]
fn test_validate_expected_counts() {
    assert!(Validator::validate_expected_counts(&[1.0_f64, 2.0]).is_ok());
    assert!(matches!(
        Validator::validate_expected_counts(&[1.0_f64, 0.0]),
        Err(StatError::InvalidExpectedCount(_))
    ));
    assert!(matches!(
        Validator::validate_expected_counts(&[-3.0_f64]),
        Err(StatError::InvalidExpectedCount(_))
    ));
}

/// Test the population check.
#[test]
fn test_validate_population() {
    assert!(Validator::validate_population(100, 1000).is_ok());
    assert!(matches!(
        Validator::validate_population(100, 50),
        Err(StatError::InvalidPopulation { .. })
    ));
    assert!(matches!(
        Validator::validate_population(0, 1),
        Err(StatError::InvalidPopulation { .. })
    ));
}

/// Test the group-layout check.
#[test]
fn test_validate_groups() {
    let g1 = [1.0_f64, 2.0];
    let g2 = [3.0_f64, 4.0];
    assert!(Validator::validate_groups(&[&g1, &g2], 2, 2).is_ok());

    assert_eq!(
        Validator::validate_groups(&[&g1[..]], 2, 2).unwrap_err(),
        StatError::TooFewGroups { got: 1, min: 2 }
    );

    let tiny = [1.0_f64];
    assert_eq!(
        Validator::validate_groups(&[&g1, &tiny], 2, 2).unwrap_err(),
        StatError::TooFewPoints { got: 1, min: 2 }
    );
}
