//! Tests for the Fisher F-distribution.
//!
//! These tests verify the F CDF and quantile function used by the
//! variance-ratio test and one-way ANOVA for:
//! - Upper-tail p-value computation
//! - Critical-value lookup across df pairs
//!
//! ## Test Organization
//!
//! 1. **Boundary Behavior** - Zero below the support
//! 2. **Known Values** - Equal-df median and tabulated critical values
//! 3. **Round Trips** - CDF/quantile consistency across df pairs
//! 4. **Invalid Input** - Bad degrees of freedom and probabilities

use approx::assert_abs_diff_eq;

use inferstat::prelude::*;

// ============================================================================
// Boundary Behavior Tests
// ============================================================================

/// Test the CDF at and below zero.
#[test]
fn test_cdf_at_zero() {
    let f = Distribution::fisher_f(5.0, 10.0).unwrap();
    assert_eq!(f.cdf(0.0_f64), 0.0);
    assert_eq!(f.cdf(-1.0_f64), 0.0);
}

/// Test that the CDF approaches one for large arguments.
#[test]
fn test_cdf_approaches_one() {
    let f = Distribution::fisher_f(5.0, 10.0).unwrap();
    assert!(f.cdf(1e6_f64) > 0.999999);
}

/// Test that the CDF is monotonically non-decreasing.
#[test]
fn test_cdf_monotonic() {
    let f = Distribution::fisher_f(5.0, 10.0).unwrap();
    let xs: Vec<f64> = (0..=80).map(|i| i as f64 * 0.25).collect();
    for w in xs.windows(2) {
        assert!(
            f.cdf(w[0]) <= f.cdf(w[1]) + 1e-12,
            "CDF not monotonic at x = {}, {}",
            w[0],
            w[1]
        );
    }
}

// ============================================================================
// Known Values Tests
// ============================================================================

/// Test the equal-df median.
///
/// For df1 = df2, F(1) = I_0.5(a, a) = 0.5 by the symmetry of the
/// incomplete beta.
#[test]
fn test_cdf_equal_df_median() {
    for &df in &[2.0, 10.0, 30.0] {
        let f = Distribution::fisher_f(df, df).unwrap();
        assert_abs_diff_eq!(f.cdf(1.0_f64), 0.5, epsilon = 1e-8);
    }
}

/// Test a tabulated critical value.
///
/// The 95% quantile of F(2, 6) is 5.143.
#[test]
fn test_quantile_known_value() {
    let f = Distribution::fisher_f(2.0, 6.0).unwrap();
    assert_abs_diff_eq!(f.quantile(0.95_f64).unwrap(), 5.143, epsilon = 1e-2);
}

/// Test the closed-form survival function for df1 = 2.
///
/// For F(2, d2): 1 - F(x) = (1 + 2x/d2)^(-d2/2).
#[test]
fn test_cdf_closed_form_df1_two() {
    let f = Distribution::fisher_f(2.0, 6.0).unwrap();
    for &x in &[0.5_f64, 1.0, 3.0, 7.0] {
        let expected = 1.0 - (1.0 + 2.0 * x / 6.0).powf(-3.0);
        assert_abs_diff_eq!(f.cdf(x), expected, epsilon = 1e-9);
    }
}

// ============================================================================
// Round Trip Tests
// ============================================================================

/// Test CDF/quantile consistency across df pairs.
#[test]
fn test_roundtrip_across_df_pairs() {
    for &(df1, df2) in &[
        (1.0, 1.0),
        (2.0, 5.0),
        (5.0, 10.0),
        (10.0, 10.0),
        (3.0, 20.0),
        (30.0, 50.0),
        (150.0, 150.0),
    ] {
        let f = Distribution::fisher_f(df1, df2).unwrap();
        for &p in &[0.01_f64, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99] {
            let q = f.quantile(p).unwrap();
            let p_back = f.cdf(q);
            assert_abs_diff_eq!(p_back, p, epsilon = 1e-6);
        }
    }
}

/// Test that the quantile is monotonically non-decreasing in p.
#[test]
fn test_quantile_monotonic() {
    let f = Distribution::fisher_f(4.0, 12.0).unwrap();
    let ps: Vec<f64> = (1..50).map(|i| i as f64 / 50.0).collect();
    for w in ps.windows(2) {
        let q0 = f.quantile(w[0]).unwrap();
        let q1 = f.quantile(w[1]).unwrap();
        assert!(q0 <= q1, "quantile not monotonic at p = {}, {}", w[0], w[1]);
    }
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

/// Test that invalid degrees of freedom are rejected at construction.
#[test]
fn test_invalid_df() {
    assert!(matches!(
        Distribution::fisher_f(-1.0, 5.0),
        Err(StatError::InvalidDegreesOfFreedom(_))
    ));
    assert!(matches!(
        Distribution::fisher_f(5.0, 0.0),
        Err(StatError::InvalidDegreesOfFreedom(_))
    ));
    assert!(matches!(
        Distribution::fisher_f(f64::NAN, 5.0),
        Err(StatError::InvalidDegreesOfFreedom(_))
    ));
}

/// Test that out-of-range probabilities are rejected.
#[test]
fn test_quantile_rejects_bad_probability() {
    let f = Distribution::fisher_f(5.0, 10.0).unwrap();
    for &p in &[0.0_f64, 1.0, -0.5, 1.5] {
        assert!(matches!(
            f.quantile(p),
            Err(StatError::InvalidProbability(_))
        ));
    }
}
