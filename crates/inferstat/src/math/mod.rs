//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Special functions (gamma, beta, and their incomplete forms)
//! - Descriptive statistics (mean, variance, sums of squares)
//!
//! These are reusable mathematical building blocks with no procedure-specific
//! logic. The special-function kernels are permissive: out-of-domain input
//! yields NaN/infinity rather than an error, and callers validate first.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Inference
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Distributions
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gamma, beta, and incomplete special functions.
pub mod special;

/// Descriptive statistics.
pub mod descriptive;
