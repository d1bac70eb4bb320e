//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive types used throughout the crate. It has
//! zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Argument range classification.
pub mod domain;

/// Shared error types.
pub mod errors;
