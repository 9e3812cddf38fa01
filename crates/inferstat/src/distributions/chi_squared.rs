//! Chi-squared distribution.
//!
//! ## Purpose
//!
//! This module provides the chi-squared CDF, density, and quantile function
//! used by the goodness-of-fit test and variance-based procedures.
//!
//! ## Design notes
//!
//! * **CDF**: Regularized lower incomplete gamma, `F(x; k) = P(k/2, x/2)`.
//! * **Quantile**: Beyond 100 degrees of freedom the Wilson–Hilferty
//!   cube-root normal approximation is returned directly; below that it
//!   seeds a bracketed Newton iteration on the CDF with the density as the
//!   derivative, falling back to bisection whenever a Newton step would
//!   leave the bracket.
//! * **Termination**: Newton runs under an explicit [`Convergence`] budget
//!   and surfaces [`StatError::NonConvergence`] on exhaustion.
//!
//! ## Invariants
//!
//! * `cdf(x, df) = 0` for `x ≤ 0`; `cdf` approaches 1 as `x → ∞`.
//! * `cdf(quantile(p, df), df) ≈ p` for p in (0, 1).
//!
//! ## Non-goals
//!
//! * This module does not validate `df`; the [`Distribution`](super::Distribution)
//!   constructors do.

// Internal dependencies
use crate::distributions::normal;
use crate::math::special;
use crate::primitives::convergence::Convergence;
use crate::primitives::errors::StatError;

// ============================================================================
// Regime Cutoffs
// ============================================================================

/// Above this many degrees of freedom the Wilson–Hilferty value is final.
const WILSON_HILFERTY_CUTOFF: f64 = 100.0;

// ============================================================================
// CDF
// ============================================================================

/// CDF of the chi-squared distribution: P(X ≤ x | df).
///
/// ```text
/// F(x; k) = P(k/2, x/2) = γ(k/2, x/2) / Γ(k/2)
/// ```
pub fn cdf(x: f64, df: f64) -> f64 {
    if x.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    special::reg_lower_gamma(df / 2.0, x / 2.0, Convergence::default())
}

/// Density of the chi-squared distribution.
///
/// ```text
/// f(x; k) = x^(k/2−1) e^(−x/2) / (2^(k/2) Γ(k/2))
/// ```
pub fn pdf(x: f64, df: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    let half = df / 2.0;
    let log_pdf =
        (half - 1.0) * x.ln() - x / 2.0 - half * std::f64::consts::LN_2 - special::ln_gamma(half);
    log_pdf.exp()
}

// ============================================================================
// Quantile
// ============================================================================

/// Quantile function (inverse CDF) of the chi-squared distribution.
///
/// The caller guarantees `p` strictly inside (0, 1) and `df > 0`.
///
/// # Errors
///
/// [`StatError::NonConvergence`] if the solver exhausts the budget.
pub fn quantile(p: f64, df: f64, budget: Convergence) -> Result<f64, StatError> {
    let z = normal::quantile(p);
    let seed = wilson_hilferty(z, df);

    if df > WILSON_HILFERTY_CUTOFF {
        return Ok(seed.max(0.0));
    }

    // The cube can go non-positive for small df in the lower tail; fall back
    // to a crude positive seed inside the support.
    let mut x = if seed > 0.0 { seed } else { df * p };
    let mut lo = 0.0_f64;
    let mut hi = f64::INFINITY;

    for _ in 0..budget.max_iterations {
        let f = cdf(x, df) - p;
        if f > 0.0 {
            hi = hi.min(x);
        } else {
            lo = lo.max(x);
        }

        let density = pdf(x, df);
        let mut next = if density.is_finite() && density > 0.0 {
            x - f / density
        } else {
            f64::NAN
        };

        // Bisect (or expand the bracket) when Newton misbehaves
        if !next.is_finite() || next <= lo || next >= hi {
            next = if hi.is_finite() {
                0.5 * (lo + hi)
            } else {
                x * 2.0
            };
        }

        if (next - x).abs() < budget.tolerance * x.abs().max(1.0) {
            return Ok(next);
        }
        x = next;
    }

    Err(StatError::NonConvergence {
        iterations: budget.max_iterations,
        tolerance: budget.tolerance,
    })
}

/// Wilson–Hilferty cube-root normal approximation of the chi-squared quantile.
///
/// ```text
/// x ≈ df · (1 − 2/(9·df) + z·√(2/(9·df)))³
/// ```
fn wilson_hilferty(z: f64, df: f64) -> f64 {
    let h = 2.0 / (9.0 * df);
    let inner = 1.0 - h + z * h.sqrt();
    df * inner * inner * inner
}
