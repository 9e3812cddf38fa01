//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides the input-validation machinery shared by every
//! inference procedure. Procedures validate through [`validator::Validator`]
//! before touching the math or distribution layers, so the permissive
//! numeric kernels below never see out-of-domain input.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Inference
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Distributions
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;
