//! Execution engine for elementwise dilogarithm evaluation.
//!
//! ## Purpose
//!
//! This module applies a configured [`DilogKernel`] to every element of a
//! slice. The map pass works in place; out-of-place evaluation copies the
//! input into the output buffer first. The pass can be swapped out by
//! extension crates (e.g. for parallel execution).
//!
//! ## Design notes
//!
//! * **Separation**: The kernel is pure; the executor only decides how the
//!   elements are visited.
//! * **Hook**: A custom map pass replaces the sequential loop wholesale.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `run` requires equal input and output lengths (checked by callers).
//! * `out[i]` depends on `x[i]` only, so any visiting order gives the same bits.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not implement parallel execution itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::kernel::DilogKernel;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom map pass function
#[doc(hidden)]
pub type MapPassFn<T> = fn(
    &mut [T],        // values (overwritten with their dilogarithm)
    &DilogKernel<T>, // kernel
);

// ============================================================================
// Sequential Pass
// ============================================================================

/// Evaluate every element in order.
pub fn map_pass_sequential<T: Float>(values: &mut [T], kernel: &DilogKernel<T>) {
    for v in values.iter_mut() {
        *v = kernel.evaluate(*v);
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the map pass over slices.
#[derive(Debug, Clone, Copy)]
pub struct DilogExecutor<T> {
    /// Scalar kernel applied to each element.
    pub kernel: DilogKernel<T>,

    /// Replacement for the sequential pass.
    #[doc(hidden)]
    pub custom_map_pass: Option<MapPassFn<T>>,
}

impl<T: Float> DilogExecutor<T> {
    /// Create an executor using the sequential pass.
    pub fn new(kernel: DilogKernel<T>) -> Self {
        Self {
            kernel,
            custom_map_pass: None,
        }
    }

    /// Replace the map pass.
    #[doc(hidden)]
    pub fn with_map_pass(mut self, pass: Option<MapPassFn<T>>) -> Self {
        self.custom_map_pass = pass;
        self
    }

    /// Write the dilogarithm of each `x[i]` into `out[i]`.
    pub fn run(&self, x: &[T], out: &mut [T]) {
        out.copy_from_slice(x);
        self.run_in_place(out);
    }

    /// Overwrite each value with its dilogarithm.
    pub fn run_in_place(&self, values: &mut [T]) {
        match self.custom_map_pass {
            Some(pass) => pass(values, &self.kernel),
            None => map_pass_sequential(values, &self.kernel),
        }
    }
}
