//! Student's t-distribution.
//!
//! ## Purpose
//!
//! This module provides the t-distribution CDF, density, and quantile
//! function used by the location tests and Welch corrections.
//!
//! ## Design notes
//!
//! * **CDF**: Relationship to the regularized incomplete beta through
//!   `x = df/(df + t²)`; beyond 30 degrees of freedom the distribution is
//!   asymptotically normal and delegates to the normal CDF.
//! * **Quantile**: Beyond 100 degrees of freedom the normal quantile is
//!   returned directly. Otherwise a Cornish–Fisher expansion of the normal
//!   quantile seeds a budgeted Newton iteration against this module's own
//!   CDF, so the pair always round-trips.
//! * **Matched derivative**: The Newton derivative is the density of
//!   whichever CDF is actually in effect (t below the normal cutoff, normal
//!   above it).
//!
//! ## Invariants
//!
//! * `cdf(0, df) = 0.5`; `cdf(-t, df) = 1 - cdf(t, df)`.
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

/// Above this many degrees of freedom the CDF delegates to the normal.
const NORMAL_CDF_CUTOFF: f64 = 30.0;

/// Above this many degrees of freedom the quantile is the normal quantile.
const NORMAL_QUANTILE_CUTOFF: f64 = 100.0;

// ============================================================================
// CDF
// ============================================================================

/// CDF of Student's t-distribution: P(T ≤ t | df).
///
/// # Algorithm
///
/// For `df > 30`, the normal CDF (asymptotic equivalence). Otherwise, with
/// `x = df / (df + t²)`:
///
/// ```text
/// F(t) = 1 − I_x(df/2, 1/2) / 2   for t ≥ 0
/// F(t) =     I_x(df/2, 1/2) / 2   for t < 0
/// ```
pub fn cdf(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    if df > NORMAL_CDF_CUTOFF {
        return normal::cdf(t);
    }
    if t == 0.0 {
        return 0.5;
    }

    let x = df / (df + t * t);
    let ib = special::reg_inc_beta(x, df / 2.0, 0.5, Convergence::default());
    if t > 0.0 {
        1.0 - ib / 2.0
    } else {
        ib / 2.0
    }
}

/// Density of Student's t-distribution.
///
/// ```text
/// f(t; df) = Γ((df+1)/2) / (√(df·π) · Γ(df/2)) · (1 + t²/df)^(−(df+1)/2)
/// ```
pub fn pdf(t: f64, df: f64) -> f64 {
    let half = df / 2.0;
    let log_pdf = special::ln_gamma(half + 0.5)
        - 0.5 * (df * std::f64::consts::PI).ln()
        - special::ln_gamma(half)
        - (half + 0.5) * (1.0 + t * t / df).ln();
    log_pdf.exp()
}

// ============================================================================
// Quantile
// ============================================================================

/// Quantile function (inverse CDF) of Student's t-distribution.
///
/// The caller guarantees `p` strictly inside (0, 1) and `df > 0`.
///
/// # Errors
///
/// [`StatError::NonConvergence`] if the Newton polish exhausts the budget.
pub fn quantile(p: f64, df: f64, budget: Convergence) -> Result<f64, StatError> {
    if df > NORMAL_QUANTILE_CUTOFF {
        return Ok(normal::quantile(p));
    }

    let z = normal::quantile(p);
    let mut t = cornish_fisher(z, df);

    // Newton polish against this module's own CDF so that the round-trip
    // property holds in every df regime.
    for _ in 0..budget.max_iterations {
        let density = if df > NORMAL_CDF_CUTOFF {
            normal::pdf(t)
        } else {
            pdf(t, df)
        };
        if !density.is_finite() || density <= 0.0 {
            break;
        }

        let step = (cdf(t, df) - p) / density;
        t -= step;
        if step.abs() < budget.tolerance * t.abs().max(1.0) {
            return Ok(t);
        }
    }

    Err(StatError::NonConvergence {
        iterations: budget.max_iterations,
        tolerance: budget.tolerance,
    })
}

/// Cornish–Fisher expansion of the t quantile around the normal quantile z.
///
/// Correction terms in powers of 1/df, Abramowitz & Stegun 26.7.5.
fn cornish_fisher(z: f64, df: f64) -> f64 {
    let z2 = z * z;
    let z3 = z2 * z;
    let z5 = z3 * z2;
    let z7 = z5 * z2;
    let z9 = z7 * z2;

    let g1 = (z3 + z) / 4.0;
    let g2 = (5.0 * z5 + 16.0 * z3 + 3.0 * z) / 96.0;
    let g3 = (3.0 * z7 + 19.0 * z5 + 17.0 * z3 - 15.0 * z) / 384.0;
    let g4 = (79.0 * z9 + 776.0 * z7 + 1482.0 * z5 - 1920.0 * z3 - 945.0 * z) / 92160.0;

    z + g1 / df + g2 / (df * df) + g3 / (df * df * df) + g4 / (df * df * df * df)
}
