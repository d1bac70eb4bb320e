//! High-level API for dilogarithm evaluation with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastDilog`. It extends
//! the `dilog` API with a `Batch` adapter that spreads evaluation over all
//! available CPU cores and accepts `ndarray` containers.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `dilog` builder pattern.
//! * **Parallel-First**: `Batch` defaults to parallel execution.
//! * **Transparent**: The marker type selects the parallel builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DilogBuilder`] via `Dilog::new()`.
//! 2. Chain configuration methods (`.method()`, `.tolerance()`, `.non_finite()`).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use dilog::internals::api::Batch as BaseBatch;

// Internal dependencies
use crate::adapters::batch::ParallelBatchDilogBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::ParallelBatchDilog;
pub use crate::input::DilogInput;
pub use dilog::internals::algorithms::kernel::{DilogKernel, Method, NonFinitePolicy};
pub use dilog::internals::api::{DilogAdapter, DilogBuilder};
pub use dilog::internals::primitives::domain::Domain;
pub use dilog::internals::primitives::errors::DilogError;
pub use dilog::{li2, li2_slice};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> DilogAdapter<T> for Batch {
    type Output = ParallelBatchDilogBuilder<T>;

    fn convert(builder: DilogBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastDilog Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let base = <BaseBatch as DilogAdapter<T>>::convert(builder).parallel(parallel);

        ParallelBatchDilogBuilder { base }
    }
}
