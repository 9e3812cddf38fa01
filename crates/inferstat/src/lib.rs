//! # inferstat — Statistical Inference for Rust
//!
//! A self-contained statistical inference core: continuous-distribution
//! CDFs and quantile functions (normal, Student's t, chi-squared, Fisher F),
//! the special functions they depend on, and the hypothesis-test, ANOVA,
//! correlation, regression, and estimation procedures built on top of them.
//!
//! ## What does it cover?
//!
//! Every procedure composes the same pipeline: validate the inputs, compute
//! descriptive statistics, derive a test statistic, look up a p-value or
//! critical value from the distribution layer, and return a structured
//! result that carries every intermediate quantity needed to explain the
//! computation step by step.
//!
//! ## Quick Start
//!
//! ### Hypothesis testing
//!
//! ```rust
//! use inferstat::prelude::*;
//!
//! let sample = vec![5.1, 4.9, 5.2, 5.0, 4.8, 5.3, 5.1, 4.9];
//!
//! // One-sample t-test of H0: mu = 5.0 at the 5% significance level
//! let result = t_test(&sample, 5.0, Significance::new(0.05)?, Tail::Two)?;
//!
//! assert!(result.p_value > 0.05);
//! assert_eq!(result.decision, Decision::FailToReject);
//! println!("{}", result);
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ```text
//! One-sample t-test (two-tailed):
//!   n:              8
//!   Sample mean:    5.0375
//!   Hypothesized:   5.0000
//!   Std dev:        0.1598
//!   Std error:      0.0565
//!   t-statistic:    0.6637
//!   df:             7
//!   p-value:        0.5282
//!   Critical:       -2.3646 / 2.3646
//!   Decision:       fail to reject the null hypothesis (alpha = 0.05)
//! ```
//!
//! ### Distributions
//!
//! ```rust
//! use inferstat::prelude::*;
//!
//! let normal = Distribution::normal();
//! assert!((normal.cdf(0.0_f64) - 0.5).abs() < 1e-7);
//!
//! let t10 = Distribution::student_t(10.0)?;
//! let q = t10.quantile(0.975_f64)?;
//! assert!((t10.cdf(q) - 0.975).abs() < 1e-6);
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ### Estimation
//!
//! ```rust
//! use inferstat::prelude::*;
//!
//! // 95% confidence interval for the mean, known sigma
//! let ci = confidence_interval_from_summary(52.0_f64, 8.0, 36, 95.0)?;
//! assert!((ci.z - 1.96).abs() < 1e-9);
//! assert!(ci.lower < 52.0 && ci.upper > 52.0);
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible entry point returns `Result<_, StatError>`. Invalid input
//! (non-finite values, too-few observations, out-of-range probabilities,
//! degenerate variances) is rejected up front with a specific error variant;
//! iterative quantile solvers that exhaust their iteration budget surface
//! [`prelude::StatError::NonConvergence`] instead of a silently inaccurate value.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use inferstat::prelude::*;
//! # let observed = vec![10.0, 20.0, 30.0];
//! # let expected = vec![15.0, 15.0, 30.0];
//!
//! let gof = chi_square_gof(&observed, &expected, Significance::new(0.05)?)?;
//! assert!((gof.statistic - 3.3333).abs() < 1e-3);
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ## References
//!
//! - Abramowitz & Stegun (1964). *Handbook of Mathematical Functions*.
//! - Press et al. (2007). *Numerical Recipes*, 3rd ed., chapter 6.
//! - Acklam, P. J. (2003). "An algorithm for computing the inverse normal
//!   cumulative distribution function".

// Layer 1: Primitives - error types and convergence budgets.
mod primitives;

// Layer 2: Math - special functions and descriptive statistics.
mod math;

// Layer 3: Distributions - CDFs and quantile functions.
mod distributions;

// Layer 4: Engine - input validation shared by all procedures.
mod engine;

// Layer 5: Inference - hypothesis tests, ANOVA, association, estimation.
mod inference;

// High-level facade consumed by presentation layers.
mod api;

// Standard inferstat prelude.
pub mod prelude {
    pub use crate::api::{
        chi_square_gof, confidence_interval, confidence_interval_from_summary, critical_z,
        distribution_cdf, distribution_quantile, linear_regression, margin_of_error,
        one_way_anova, paired_t_test, pearson_correlation, power_analysis, required_sample_size,
        t_test, t_test_from_summary, variance_ratio_test, welch_t_test, z_test,
        z_test_from_summary, AnovaResult, ChiSquareTestResult, ConfidenceInterval, Convergence,
        CorrelationResult, CriticalValues, Decision, Distribution, MarginOfError, PowerResult,
        RegressionResult, SampleSizeResult, Significance, StatError, Strength, TTestResult, Tail,
        TwoSampleTTestResult, VarianceRatioTestResult, ZTestResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod distributions {
        pub use crate::distributions::*;
    }
    pub mod inference {
        pub use crate::inference::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
