#![cfg(feature = "dev")]
//! Tests for the special-function kernels.
//!
//! These tests verify the gamma, beta, and incomplete special functions the
//! distribution layer is built from:
//! - Log-gamma at integers and half-integers
//! - Regularized incomplete beta identities
//! - Regularized incomplete gamma identities
//!
//! ## Test Organization
//!
//! 1. **Gamma Family** - Known values and the reflection formula
//! 2. **Incomplete Beta** - Closed-form identities and symmetry
//! 3. **Incomplete Gamma** - Exponential identity and boundaries

use approx::assert_abs_diff_eq;

use inferstat::internals::math::special;
use inferstat::internals::primitives::convergence::Convergence;

fn budget() -> Convergence {
    Convergence::default()
}

// ============================================================================
// Gamma Family Tests
// ============================================================================

/// Test ln Γ at positive integers.
///
/// Γ(n) = (n−1)! so ln Γ(1) = ln Γ(2) = 0, ln Γ(5) = ln 24.
#[test]
fn test_ln_gamma_integers() {
    assert_abs_diff_eq!(special::ln_gamma(1.0), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(special::ln_gamma(2.0), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(special::ln_gamma(3.0), 2.0_f64.ln(), epsilon = 1e-10);
    assert_abs_diff_eq!(special::ln_gamma(5.0), 24.0_f64.ln(), epsilon = 1e-10);
    assert_abs_diff_eq!(special::ln_gamma(7.0), 720.0_f64.ln(), epsilon = 1e-9);
}

/// Test Γ at half-integers.
///
/// Γ(1/2) = √π, Γ(3/2) = √π/2, Γ(5/2) = 3√π/4.
#[test]
fn test_gamma_half_integers() {
    let sqrt_pi = std::f64::consts::PI.sqrt();
    assert_abs_diff_eq!(special::gamma(0.5), sqrt_pi, epsilon = 1e-10);
    assert_abs_diff_eq!(special::gamma(1.5), sqrt_pi / 2.0, epsilon = 1e-10);
    assert_abs_diff_eq!(special::gamma(2.5), 3.0 * sqrt_pi / 4.0, epsilon = 1e-10);
}

/// Test the reflection formula on the negative half-line.
///
/// Γ(−1/2) = −2√π.
#[test]
fn test_gamma_reflection() {
    let sqrt_pi = std::f64::consts::PI.sqrt();
    assert_abs_diff_eq!(special::gamma(-0.5), -2.0 * sqrt_pi, epsilon = 1e-9);
}

/// Test Γ accuracy across the working range.
///
/// Relative error against exact factorials up to Γ(20).
#[test]
fn test_gamma_relative_accuracy() {
    let mut factorial = 1.0_f64;
    for n in 1..20 {
        factorial *= n as f64;
        let approx = special::gamma((n + 1) as f64);
        let rel = ((approx - factorial) / factorial).abs();
        assert!(rel < 1e-7, "Γ({}) relative error {rel}", n + 1);
    }
}

/// Test the beta function against the gamma identity.
#[test]
fn test_beta_known_values() {
    // B(1, 1) = 1
    assert_abs_diff_eq!(special::beta(1.0, 1.0), 1.0, epsilon = 1e-10);
    // B(1, 2) = 1/2
    assert_abs_diff_eq!(special::beta(1.0, 2.0), 0.5, epsilon = 1e-10);
    // B(a, b) = B(b, a)
    assert_abs_diff_eq!(
        special::ln_beta(3.0, 5.0),
        special::ln_beta(5.0, 3.0),
        epsilon = 1e-12
    );
}

// ============================================================================
// Incomplete Beta Tests
// ============================================================================

/// Test the boundary values of the regularized incomplete beta.
#[test]
fn test_inc_beta_boundaries() {
    assert_eq!(special::reg_inc_beta(0.0, 2.0, 3.0, budget()), 0.0);
    assert_eq!(special::reg_inc_beta(1.0, 2.0, 3.0, budget()), 1.0);
    assert_eq!(special::reg_inc_beta(-0.5, 2.0, 3.0, budget()), 0.0);
    assert_eq!(special::reg_inc_beta(1.5, 2.0, 3.0, budget()), 1.0);
}

/// Test the uniform identity I_x(1, 1) = x.
#[test]
fn test_inc_beta_uniform_identity() {
    for &x in &[0.1, 0.3, 0.5, 0.7, 0.9] {
        assert_abs_diff_eq!(special::reg_inc_beta(x, 1.0, 1.0, budget()), x, epsilon = 1e-9);
    }
}

/// Test the closed form I_x(1, b) = 1 − (1−x)^b.
#[test]
fn test_inc_beta_closed_form() {
    for &x in &[0.1, 0.5, 0.9] {
        let expected = 1.0 - (1.0 - x).powi(3);
        assert_abs_diff_eq!(
            special::reg_inc_beta(x, 1.0, 3.0, budget()),
            expected,
            epsilon = 1e-9
        );
    }
}

/// Test the complement identity I_x(a, b) + I_{1−x}(b, a) = 1.
#[test]
fn test_inc_beta_complement() {
    for &(x, a, b) in &[(0.2, 2.0, 5.0), (0.5, 3.0, 3.0), (0.8, 0.5, 4.0)] {
        let lhs = special::reg_inc_beta(x, a, b, budget());
        let rhs = special::reg_inc_beta(1.0 - x, b, a, budget());
        assert_abs_diff_eq!(lhs + rhs, 1.0, epsilon = 1e-8);
    }
}

/// Test the symmetric midpoint I_0.5(a, a) = 0.5.
#[test]
fn test_inc_beta_symmetric_midpoint() {
    for &a in &[0.5, 1.0, 3.0, 10.0, 75.0] {
        assert_abs_diff_eq!(special::reg_inc_beta(0.5, a, a, budget()), 0.5, epsilon = 1e-8);
    }
}

// ============================================================================
// Incomplete Gamma Tests
// ============================================================================

/// Test the exponential identity P(1, x) = 1 − e^{−x}.
#[test]
fn test_lower_gamma_exponential_identity() {
    for &x in &[0.5, 1.0, 2.0, 5.0] {
        let expected = 1.0 - (-x).exp();
        assert_abs_diff_eq!(
            special::reg_lower_gamma(1.0, x, budget()),
            expected,
            epsilon = 1e-9
        );
    }
}

/// Test the lower boundary and the saturation limit.
#[test]
fn test_lower_gamma_boundaries() {
    assert_eq!(special::reg_lower_gamma(2.0, 0.0, budget()), 0.0);
    assert_eq!(special::reg_lower_gamma(2.0, -1.0, budget()), 0.0);
    assert_abs_diff_eq!(special::reg_lower_gamma(3.0, 100.0, budget()), 1.0, epsilon = 1e-9);
}

/// Test that both evaluation branches stay inside [0, 1].
///
/// The series handles x < a + 1 and the continued fraction the rest.
#[test]
fn test_lower_gamma_bounded() {
    for &a in &[0.5, 1.0, 2.5, 10.0, 75.0] {
        for &x in &[0.1, 1.0, 5.0, 20.0, 120.0] {
            let p = special::reg_lower_gamma(a, x, budget());
            assert!((0.0..=1.0).contains(&p), "P({a}, {x}) = {p} out of [0, 1]");
        }
    }
}
