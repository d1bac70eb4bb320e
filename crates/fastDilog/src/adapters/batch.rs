//! Batch adapter for parallel dilogarithm evaluation.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter of `fastDilog`: complete
//! containers held in memory, evaluated in parallel with `rayon` unless
//! parallelism is switched off.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and the scalar kernel come from `dilog`;
//!   this adapter only injects the parallel map pass.
//! * **Containers**: Slices, vectors and 1-D arrays through [`DilogInput`];
//!   arrays of any dimension and layout through `evaluate_array`.
//! * **Logging**: Emits `tracing` events for builds and evaluations.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output order, length and shape match the input.
//! * Parallel and sequential evaluation produce identical bits.
//! * Under `Reject`, nothing is evaluated when the input contains a non-finite value.
//!
//! ## Non-goals
//!
//! * This adapter does not evaluate complex arguments.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::map_pass_parallel;

// External dependencies
use ndarray::{Array, ArrayBase, Data, Dimension};
use num_traits::Float;
use std::result::Result;
use tracing::{debug, warn};

// Export dependencies from dilog crate
use dilog::internals::adapters::batch::{BatchDilog, BatchDilogBuilder};
use dilog::internals::algorithms::kernel::{DilogKernel, Method, NonFinitePolicy};
use dilog::internals::engine::validator::Validator;
use dilog::internals::primitives::errors::DilogError;

// Internal dependencies
use crate::input::DilogInput;

// ============================================================================
// Extended Batch Dilog Builder
// ============================================================================

/// Builder for the batch dilogarithm evaluator with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchDilogBuilder<T: Float> {
    /// Base builder from the dilog crate
    pub base: BatchDilogBuilder<T>,
}

impl<T: Float> Default for ParallelBatchDilogBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchDilogBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from dilog `BatchDilogBuilder`
    /// * parallel: true (fastDilog extension)
    fn new() -> Self {
        let base = BatchDilogBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the core approximation.
    pub fn method(mut self, method: Method) -> Self {
        self.base = self.base.method(method);
        self
    }

    /// Set the relative truncation threshold of the power series.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.base = self.base.tolerance(tolerance);
        self
    }

    /// Set the treatment of NaN and infinite inputs.
    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.base = self.base.non_finite(policy);
        self
    }
}

impl<T: Float + Send + Sync> ParallelBatchDilogBuilder<T> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch evaluator.
    pub fn build(self) -> Result<ParallelBatchDilog<T>, DilogError> {
        let mut base = self.base;
        let parallel = cfg!(feature = "cpu") && base.parallel.unwrap_or(true);

        #[cfg(feature = "cpu")]
        {
            if parallel {
                base = base.custom_map_pass(map_pass_parallel);
            } else {
                base.custom_map_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            base.custom_map_pass = None;
        }

        // Validation is centralized in the dilog crate
        let processor = base.build()?;

        debug!(
            method = processor.kernel().method.name(),
            parallel,
            policy = ?processor.non_finite_policy(),
            "built batch dilogarithm evaluator"
        );

        Ok(ParallelBatchDilog {
            processor,
            parallel,
        })
    }
}

// ============================================================================
// Extended Batch Dilog Processor
// ============================================================================

/// Batch dilogarithm evaluator with parallel support.
#[derive(Debug, Clone, Copy)]
pub struct ParallelBatchDilog<T> {
    processor: BatchDilog<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelBatchDilog<T> {
    /// Evaluate the dilogarithm of every element into a new vector.
    pub fn evaluate<I>(&self, x: &I) -> Result<Vec<T>, DilogError>
    where
        I: DilogInput<T> + ?Sized,
    {
        let x = x.as_dilog_slice()?;
        self.trace_batch(x.len(), x.iter().copied());

        self.processor.evaluate(x)
    }

    /// Evaluate the dilogarithm of every element into a caller-provided buffer.
    pub fn evaluate_into<I>(&self, x: &I, out: &mut [T]) -> Result<(), DilogError>
    where
        I: DilogInput<T> + ?Sized,
    {
        let x = x.as_dilog_slice()?;
        self.trace_batch(x.len(), x.iter().copied());

        self.processor.evaluate_into(x, out)
    }

    /// Replace every element by its dilogarithm.
    pub fn evaluate_in_place(&self, values: &mut [T]) -> Result<(), DilogError> {
        self.trace_batch(values.len(), values.iter().copied());

        self.processor.evaluate_in_place(values)
    }

    /// Evaluate the dilogarithm of a single value under the configured policy.
    pub fn evaluate_scalar(&self, x: T) -> Result<T, DilogError> {
        self.processor.evaluate_scalar(x)
    }

    /// Evaluate the dilogarithm of every element of an array of any shape.
    ///
    /// The result has the same shape as `x`. Under `Reject`, the reported index
    /// is the flat position in logical (row-major) order.
    pub fn evaluate_array<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<T, D>, DilogError>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        if self.processor.non_finite_policy() == NonFinitePolicy::Reject {
            Validator::validate_values(x.iter().copied())?;
        }
        self.trace_batch(x.len(), x.iter().copied());

        let kernel = self.processor.kernel();
        let mut out = x.to_owned();

        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                out.par_mapv_inplace(|v| kernel.evaluate(v));
                return Ok(out);
            }
        }

        out.mapv_inplace(|v| kernel.evaluate(v));
        Ok(out)
    }

    /// The configured scalar kernel.
    pub fn kernel(&self) -> DilogKernel<T> {
        self.processor.kernel()
    }

    /// The configured non-finite policy.
    pub fn non_finite_policy(&self) -> NonFinitePolicy {
        self.processor.non_finite_policy()
    }

    /// Whether evaluation runs on the rayon thread pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn trace_batch(&self, len: usize, values: impl Iterator<Item = T>) {
        debug!(
            len,
            parallel = self.parallel,
            method = self.processor.kernel().method.name(),
            "evaluating dilogarithm batch"
        );

        if self.processor.non_finite_policy() == NonFinitePolicy::Propagate
            && tracing::enabled!(tracing::Level::WARN)
        {
            let non_finite = values.filter(|v| !v.is_finite()).count();
            if non_finite > 0 {
                warn!(non_finite, len, "non-finite inputs evaluate to NaN");
            }
        }
    }
}
