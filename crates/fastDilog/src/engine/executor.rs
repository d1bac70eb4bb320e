//! Parallel execution engine for dilogarithm evaluation.
//!
//! ## Purpose
//!
//! This module provides the parallel map pass injected into the `dilog`
//! crate's executor. It spreads elementwise evaluation over all available CPU
//! cores with `rayon`.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential map pass.
//! * **Granularity**: Work is split into runs of at least [`MIN_PARALLEL_LEN`]
//!   elements so a single evaluation is never a task of its own.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Each element is written exactly once, by the same kernel the sequential
//!   pass uses, so the output is bit-identical to it.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `dilog`'s validator).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

#[cfg(feature = "cpu")]
use num_traits::Float;

#[cfg(feature = "cpu")]
use dilog::internals::algorithms::kernel::DilogKernel;

/// Smallest number of consecutive elements handed to one rayon task.
pub const MIN_PARALLEL_LEN: usize = 1024;

// ============================================================================
// Parallel Map Function
// ============================================================================

/// Overwrite every value with its dilogarithm in parallel.
#[cfg(feature = "cpu")]
pub fn map_pass_parallel<T>(values: &mut [T], kernel: &DilogKernel<T>)
where
    T: Float + Send + Sync,
{
    let kernel = *kernel;

    values
        .par_iter_mut()
        .with_min_len(MIN_PARALLEL_LEN)
        .for_each(|v| *v = kernel.evaluate(*v));
}
