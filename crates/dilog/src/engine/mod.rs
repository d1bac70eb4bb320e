//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates evaluation over slices:
//! - Validation of configuration and (optionally) input finiteness
//! - The map pass applying the scalar kernel, with a replaceable hook
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Elementwise execution engine.
pub mod executor;

/// Configuration and input validation.
pub mod validator;
