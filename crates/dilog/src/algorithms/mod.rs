//! Layer 3: Algorithms
//!
//! Range reduction and the scalar kernel built on it.

/// Functional-identity range reduction.
pub mod reduction;

/// Configured scalar kernel.
pub mod kernel;
