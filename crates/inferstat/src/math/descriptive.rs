//! Descriptive statistics.
//!
//! ## Purpose
//!
//! This module provides the descriptive statistics every inference procedure
//! starts from: mean, sample variance, standard deviation, and centered sums
//! of squares.
//!
//! ## Design notes
//!
//! * **Generics**: All computations are generic over `Float` types.
//! * **Validated upstream**: Functions assume non-empty input (and at least
//!   two observations where a variance is computed); the engine layer
//!   enforces this before any call.
//!
//! ## Invariants
//!
//! * `sample_variance` uses the n−1 denominator.
//! * Variances and sums of squares are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not validate input.
//! * This module does not provide robust (outlier-resistant) estimators.

// External dependencies
use num_traits::Float;

// ============================================================================
// Central Tendency
// ============================================================================

/// Arithmetic mean of a non-empty sample.
pub fn mean<T: Float>(data: &[T]) -> T {
    let n = T::from(data.len()).unwrap_or_else(T::one);
    let sum = data.iter().copied().fold(T::zero(), |acc, v| acc + v);
    sum / n
}

// ============================================================================
// Spread
// ============================================================================

/// Centered sum of squares Σ(xᵢ − c)².
pub fn sum_of_squares<T: Float>(data: &[T], center: T) -> T {
    data.iter().fold(T::zero(), |acc, &v| {
        let d = v - center;
        acc + d * d
    })
}

/// Sample variance with the n−1 denominator.
///
/// Assumes at least two observations.
pub fn sample_variance<T: Float>(data: &[T]) -> T {
    let n = T::from(data.len()).unwrap_or_else(T::one);
    let m = mean(data);
    sum_of_squares(data, m) / (n - T::one())
}

/// Sample standard deviation, the square root of [`sample_variance`].
pub fn std_dev<T: Float>(data: &[T]) -> T {
    sample_variance(data).sqrt()
}

/// Centered cross-product Σ(xᵢ − x̄)(yᵢ − ȳ).
///
/// Assumes equal-length inputs.
pub fn cross_product<T: Float>(x: &[T], y: &[T], x_mean: T, y_mean: T) -> T {
    x.iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&xi, &yi)| {
            acc + (xi - x_mean) * (yi - y_mean)
        })
}
