//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution adapters that turn a validated
//! configuration into an evaluator over concrete containers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-memory slice evaluation.
pub mod batch;
