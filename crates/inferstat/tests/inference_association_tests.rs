//! Tests for Pearson correlation and simple linear regression.
//!
//! These tests verify the association procedures end to end: coefficient,
//! interpretation buckets, least-squares fit, and degenerate-input rejection.
//!
//! ## Test Organization
//!
//! 1. **Correlation Scenarios** - Hand-checked coefficients and buckets
//! 2. **Regression Scenarios** - Exact fits and predictions
//! 3. **Degenerate Input** - Zero-variance and mismatched inputs

use approx::assert_abs_diff_eq;

use inferstat::prelude::*;

// ============================================================================
// Correlation Scenario Tests
// ============================================================================

/// Test the classic five-point correlation example.
///
/// x = [1..5], y = [2,4,5,4,5]: Σ(x−x̄)(y−ȳ) = 6, Σ(x−x̄)² = 10,
/// Σ(y−ȳ)² = 6, so r = 6/√60 ≈ 0.7746 — a strong positive correlation.
#[test]
fn test_correlation_textbook_scenario() {
    let x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0_f64, 4.0, 5.0, 4.0, 5.0];
    let result = pearson_correlation(&x, &y).unwrap();

    assert_eq!(result.n, 5);
    assert_abs_diff_eq!(result.x_mean, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.y_mean, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.r, 6.0 / 60.0_f64.sqrt(), epsilon = 1e-10);
    assert_eq!(result.strength, Strength::Strong);
    assert_eq!(result.interpretation(), "strong positive correlation");
}

/// Test a perfect negative correlation.
#[test]
fn test_correlation_perfect_negative() {
    let x = vec![1.0_f64, 2.0, 3.0];
    let y = vec![6.0_f64, 4.0, 2.0];
    let result = pearson_correlation(&x, &y).unwrap();

    assert_abs_diff_eq!(result.r, -1.0, epsilon = 1e-12);
    assert_eq!(result.strength, Strength::Strong);
    assert_eq!(result.interpretation(), "strong negative correlation");
}

/// Test the weak bucket.
#[test]
fn test_correlation_weak_bucket() {
    let x = vec![1.0_f64, 2.0, 3.0, 4.0];
    let y = vec![3.0_f64, 5.0, 1.0, 4.0];
    let result = pearson_correlation(&x, &y).unwrap();

    assert!(result.r.abs() < 0.3, "r = {} should be weak", result.r);
    assert_eq!(result.strength, Strength::Weak);
}

/// Test the moderate bucket.
#[test]
fn test_correlation_moderate_bucket() {
    let x = vec![1.0_f64, 2.0, 3.0, 4.0];
    let y = vec![1.0_f64, 5.0, 2.0, 4.0];
    let result = pearson_correlation(&x, &y).unwrap();

    assert!(
        result.r.abs() >= 0.3 && result.r.abs() < 0.7,
        "r = {} should be moderate",
        result.r
    );
    assert_eq!(result.strength, Strength::Moderate);
}

/// Test that r never leaves [-1, 1].
#[test]
fn test_correlation_bounded() {
    let x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![2.0_f64, 4.0, 6.0, 8.0, 10.0, 12.0];
    let result = pearson_correlation(&x, &y).unwrap();

    assert!(result.r <= 1.0);
    assert_abs_diff_eq!(result.r, 1.0, epsilon = 1e-12);
}

// ============================================================================
// Regression Scenario Tests
// ============================================================================

/// Test an exactly linear input.
///
/// x = [1,2,3], y = [2,4,6]: slope 2, intercept 0, R² = 1.
#[test]
fn test_regression_exact_line() {
    let x = vec![1.0_f64, 2.0, 3.0];
    let y = vec![2.0_f64, 4.0, 6.0];
    let result = linear_regression(&x, &y).unwrap();

    assert_abs_diff_eq!(result.slope, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.intercept, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.r_squared, 1.0, epsilon = 1e-12);
}

/// Test prediction from the fitted line.
#[test]
fn test_regression_predict() {
    let x = vec![1.0_f64, 2.0, 3.0];
    let y = vec![2.0_f64, 4.0, 6.0];
    let result = linear_regression(&x, &y).unwrap();

    assert_abs_diff_eq!(result.predict(4.0), 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.predict(0.0), 0.0, epsilon = 1e-12);
}

/// Test a noisy fit: R² strictly between 0 and 1, slope near the trend.
#[test]
fn test_regression_noisy_fit() {
    let x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let y = vec![2.1_f64, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
    let result = linear_regression(&x, &y).unwrap();

    assert_abs_diff_eq!(result.slope, 2.0, epsilon = 0.05);
    assert!(result.r_squared > 0.99 && result.r_squared <= 1.0);
}

/// Test a constant response fitted by a flat line.
#[test]
fn test_regression_constant_response() {
    let x = vec![1.0_f64, 2.0, 3.0];
    let y = vec![5.0_f64, 5.0, 5.0];
    let result = linear_regression(&x, &y).unwrap();

    assert_abs_diff_eq!(result.slope, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.intercept, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.r_squared, 1.0, epsilon = 1e-12);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test that a zero-variance predictor is rejected.
#[test]
fn test_regression_rejects_constant_predictor() {
    let x = vec![2.0_f64, 2.0, 2.0];
    let y = vec![1.0_f64, 2.0, 3.0];
    let result = linear_regression(&x, &y);
    assert!(matches!(result, Err(StatError::ZeroVariance(_))));
}

/// Test that correlation rejects zero variance on either side.
#[test]
fn test_correlation_rejects_zero_variance() {
    let varying = vec![1.0_f64, 2.0, 3.0];
    let constant = vec![4.0_f64, 4.0, 4.0];

    assert!(matches!(
        pearson_correlation(&constant, &varying),
        Err(StatError::ZeroVariance("x"))
    ));
    assert!(matches!(
        pearson_correlation(&varying, &constant),
        Err(StatError::ZeroVariance("y"))
    ));
}

/// Test that mismatched vectors are rejected.
#[test]
fn test_association_rejects_mismatched_lengths() {
    let x = vec![1.0_f64, 2.0, 3.0];
    let y = vec![1.0_f64, 2.0];

    assert!(matches!(
        pearson_correlation(&x, &y),
        Err(StatError::MismatchedInputs { .. })
    ));
    assert!(matches!(
        linear_regression(&x, &y),
        Err(StatError::MismatchedInputs { .. })
    ));
}

/// Test that a single pair is rejected.
#[test]
fn test_association_rejects_single_pair() {
    let result = pearson_correlation(&[1.0_f64], &[2.0_f64]);
    assert_eq!(result.unwrap_err(), StatError::TooFewPoints { got: 1, min: 2 });
}
