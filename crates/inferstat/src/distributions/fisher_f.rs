//! Fisher F-distribution.
//!
//! ## Purpose
//!
//! This module provides the F-distribution CDF and quantile function used by
//! the variance-ratio test and one-way ANOVA.
//!
//! ## Design notes
//!
//! * **CDF**: Maps to the regularized incomplete beta through
//!   `y = df1·x / (df1·x + df2)`.
//! * **Quantile**: Solved on the beta scale — a bracketed Newton iteration
//!   inverts `I_y(df1/2, df2/2) = p` on (0, 1) with the beta density as the
//!   derivative, then maps back through `x = df2·y / (df1·(1−y))`. Bisection
//!   takes over whenever a Newton step would leave the bracket.
//! * **Termination**: Newton runs under an explicit [`Convergence`] budget
//!   and surfaces [`StatError::NonConvergence`] on exhaustion.
//!
//! ## Invariants
//!
//! * `cdf(x, df1, df2) = 0` for `x ≤ 0`; `cdf` approaches 1 as `x → ∞`.
//! * `cdf(quantile(p, df1, df2), df1, df2) ≈ p` for p in (0, 1).
//!
//! ## Non-goals
//!
//! * This module does not validate `df1`/`df2`; the
//!   [`Distribution`](super::Distribution) constructors do.

// Internal dependencies
use crate::math::special;
use crate::primitives::convergence::Convergence;
use crate::primitives::errors::StatError;

// ============================================================================
// CDF
// ============================================================================

/// CDF of the F-distribution: P(X ≤ x | df1, df2).
///
/// ```text
/// F(x; d1, d2) = I_y(d1/2, d2/2)   where y = d1·x / (d1·x + d2)
/// ```
pub fn cdf(x: f64, df1: f64, df2: f64) -> f64 {
    if x.is_nan() || df1.is_nan() || df2.is_nan() || df1 <= 0.0 || df2 <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    let y = df1 * x / (df1 * x + df2);
    special::reg_inc_beta(y, df1 / 2.0, df2 / 2.0, Convergence::default())
}

// ============================================================================
// Quantile
// ============================================================================

/// Quantile function (inverse CDF) of the F-distribution.
///
/// The caller guarantees `p` strictly inside (0, 1) and `df1, df2 > 0`.
///
/// # Errors
///
/// [`StatError::NonConvergence`] if the solver exhausts the budget.
pub fn quantile(p: f64, df1: f64, df2: f64, budget: Convergence) -> Result<f64, StatError> {
    let a = df1 / 2.0;
    let b = df2 / 2.0;
    let y = beta_quantile(p, a, b, budget)?;

    // Map the beta-scale solution back to the F scale
    Ok(df2 * y / (df1 * (1.0 - y)))
}

/// Invert the regularized incomplete beta: solve I_y(a, b) = p on (0, 1).
///
/// Bracketed Newton with the beta density as the derivative; bisection
/// whenever a step would leave the bracket. The bracket can only shrink, so
/// with the iteration budget of [`Convergence`] the solver either converges
/// or reports failure.
fn beta_quantile(p: f64, a: f64, b: f64, budget: Convergence) -> Result<f64, StatError> {
    let ln_beta = special::ln_beta(a, b);

    // Seed at the distribution mean
    let mut y = a / (a + b);
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;

    for _ in 0..budget.max_iterations {
        let f = special::reg_inc_beta(y, a, b, budget) - p;
        if f > 0.0 {
            hi = hi.min(y);
        } else {
            lo = lo.max(y);
        }

        // Beta density: y^(a−1)·(1−y)^(b−1) / B(a, b)
        let log_density = (a - 1.0) * y.ln() + (b - 1.0) * (1.0 - y).ln() - ln_beta;
        let density = log_density.exp();

        let mut next = if density.is_finite() && density > 0.0 {
            y - f / density
        } else {
            f64::NAN
        };

        if !next.is_finite() || next <= lo || next >= hi {
            next = 0.5 * (lo + hi);
        }

        if (next - y).abs() < budget.tolerance * y.abs().max(1.0) {
            return Ok(next);
        }
        y = next;
    }

    Err(StatError::NonConvergence {
        iterations: budget.max_iterations,
        tolerance: budget.tolerance,
    })
}
