//! Iteration budgets for iterative numerics.
//!
//! ## Purpose
//!
//! This module defines the `Convergence` pair carried by every iterative
//! solver in the crate: series expansions, continued fractions, and Newton
//! iterations all terminate either by meeting the tolerance or by exhausting
//! the iteration cap.
//!
//! ## Design notes
//!
//! * **Explicit**: Budgets are values, not hard-coded literals, so tests can
//!   probe convergence boundaries.
//! * **Bounded**: Every loop in the crate is capped; there is no unbounded work.
//!
//! ## Invariants
//!
//! * `max_iterations >= 1`.
//! * `tolerance` is positive and finite.
//!
//! ## Non-goals
//!
//! * This module does not implement any solver; it only carries the budget.

// ============================================================================
// Convergence Budget
// ============================================================================

/// Iteration cap and step tolerance for an iterative solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Maximum number of iterations before the solver gives up.
    pub max_iterations: usize,

    /// Relative step tolerance at which iteration stops.
    pub tolerance: f64,
}

impl Default for Convergence {
    /// The budget used by every public entry point: 100 iterations, 1e-10.
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-10,
        }
    }
}

impl Convergence {
    /// Create a custom budget.
    ///
    /// Values are clamped into sane ranges rather than rejected: at least
    /// one iteration, and a positive finite tolerance.
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        let max_iterations = max_iterations.max(1);
        let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            Self::default().tolerance
        };
        Self {
            max_iterations,
            tolerance,
        }
    }
}
