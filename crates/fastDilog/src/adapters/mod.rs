//! Layer 5: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different containers:
//!
//! - **Batch**: Unified adapter for parallel/sequential evaluation of slices,
//!   vectors and `ndarray` arrays of any dimension

// Unified batch adapter for dilogarithm evaluation.
pub mod batch;
