//! Layer 5: Inference
//!
//! # Purpose
//!
//! This layer implements the statistical procedures: hypothesis tests on
//! means and variances, the chi-square goodness-of-fit test, one-way ANOVA,
//! correlation and regression, and the estimation utilities (confidence
//! intervals, margins of error, sample sizes, power).
//!
//! Every procedure follows the same pipeline: validate, compute descriptive
//! statistics, derive the test statistic, consult the distribution layer for
//! a p-value and critical value, and return a structured result carrying
//! every intermediate needed for a step-by-step report.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Inference ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Distributions
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Shared outcome types: tails, decisions, significance, critical values.
pub mod outcome;

/// Location tests: z-test and t-test families.
pub mod location;

/// Two-sample variance-ratio F-test.
pub mod variance;

/// Chi-square goodness-of-fit test.
pub mod categorical;

/// One-way analysis of variance.
pub mod anova;

/// Pearson correlation and simple linear regression.
pub mod association;

/// Confidence intervals, margins of error, sample sizes, and power.
pub mod estimation;
