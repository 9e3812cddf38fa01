//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by every other
//! layer: error types and iteration budgets for the iterative numerical
//! solvers. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Iteration budgets for iterative numerics.
pub mod convergence;
