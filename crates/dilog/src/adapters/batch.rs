//! Batch adapter for elementwise dilogarithm evaluation.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: complete slices held in
//! memory, evaluated sequentially (or through an injected map pass).
//!
//! ## Design notes
//!
//! * **Processing**: Validates configuration once, then maps the kernel.
//! * **Policy**: Non-finite inputs are propagated as NaN or rejected up front.
//! * **Allocation**: `evaluate` allocates the output; `evaluate_into` and
//!   `evaluate_in_place` never allocate.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output order and length match the input.
//! * Every output element equals the scalar kernel applied to its input element.
//! * Under `Reject`, nothing is written when the input contains a non-finite value.
//!
//! ## Non-goals
//!
//! * This adapter does not reshape multi-dimensional data (see `fastDilog`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::kernel::{DilogKernel, Method, NonFinitePolicy};
use crate::engine::executor::{DilogExecutor, MapPassFn};
use crate::engine::validator::Validator;
use crate::primitives::errors::DilogError;

// ============================================================================
// Batch Dilog Builder
// ============================================================================

/// Builder for the batch dilogarithm evaluator.
#[derive(Debug, Clone)]
pub struct BatchDilogBuilder<T: Float> {
    /// Core approximation.
    pub method: Method,

    /// Relative truncation threshold of the power series.
    pub tolerance: T,

    /// Treatment of NaN and infinite inputs.
    pub non_finite: NonFinitePolicy,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom map pass function.
    #[doc(hidden)]
    pub custom_map_pass: Option<MapPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchDilogBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchDilogBuilder<T> {
    fn new() -> Self {
        Self {
            method: Method::default(),
            tolerance: T::epsilon(),
            non_finite: NonFinitePolicy::default(),
            custom_map_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    #[doc(hidden)]
    pub fn custom_map_pass(mut self, pass: MapPassFn<T>) -> Self {
        self.custom_map_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    pub fn build(self) -> Result<BatchDilog<T>, DilogError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate series tolerance
        Validator::validate_tolerance(self.tolerance)?;

        let kernel = DilogKernel::new(self.method, self.tolerance);
        let executor = DilogExecutor::new(kernel).with_map_pass(self.custom_map_pass);

        Ok(BatchDilog {
            executor,
            non_finite: self.non_finite,
        })
    }
}

// ============================================================================
// Batch Dilog Processor
// ============================================================================

/// Validated batch evaluator.
#[derive(Debug, Clone, Copy)]
pub struct BatchDilog<T> {
    executor: DilogExecutor<T>,
    non_finite: NonFinitePolicy,
}

impl<T: Float> BatchDilog<T> {
    /// Evaluate the dilogarithm of every element into a new vector.
    pub fn evaluate(&self, x: &[T]) -> Result<Vec<T>, DilogError> {
        self.check_inputs(x)?;

        let mut out = x.to_vec();
        self.executor.run_in_place(&mut out);
        Ok(out)
    }

    /// Evaluate the dilogarithm of every element into a caller-provided buffer.
    pub fn evaluate_into(&self, x: &[T], out: &mut [T]) -> Result<(), DilogError> {
        Validator::validate_output_len(x.len(), out.len())?;
        self.check_inputs(x)?;

        self.executor.run(x, out);
        Ok(())
    }

    /// Replace every element by its dilogarithm.
    pub fn evaluate_in_place(&self, values: &mut [T]) -> Result<(), DilogError> {
        self.check_inputs(values)?;

        self.executor.run_in_place(values);
        Ok(())
    }

    /// Evaluate the dilogarithm of a single value under the configured policy.
    pub fn evaluate_scalar(&self, x: T) -> Result<T, DilogError> {
        if self.non_finite == NonFinitePolicy::Reject {
            Validator::validate_scalar(x, "x")?;
        }

        Ok(self.executor.kernel.evaluate(x))
    }

    /// The configured scalar kernel.
    pub fn kernel(&self) -> DilogKernel<T> {
        self.executor.kernel
    }

    /// The configured non-finite policy.
    pub fn non_finite_policy(&self) -> NonFinitePolicy {
        self.non_finite
    }

    fn check_inputs(&self, x: &[T]) -> Result<(), DilogError> {
        match self.non_finite {
            NonFinitePolicy::Reject => Validator::validate_inputs(x),
            NonFinitePolicy::Propagate => Ok(()),
        }
    }
}
