//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure approximations the evaluator is built on:
//! - Closed-form constants (pi^2/3, pi^2/6, pi^2/12)
//! - The power series on the reduced domain `[0, 1/2]`
//! - The CERNLIB Chebyshev expansion on `[0, 1]`
//!
//! These building blocks know nothing about range reduction.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Closed-form constants.
pub mod constants;

/// Power series `sum t^k / k^2`.
pub mod series;

/// Chebyshev expansion with Clenshaw recurrence.
pub mod chebyshev;
