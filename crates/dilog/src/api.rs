//! High-level API for dilogarithm evaluation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the plain functions
//! [`li2`] and [`li2_slice`] for the common case, and a fluent builder for
//! choosing the approximation method, series tolerance and non-finite policy.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types select the execution builder, so extension
//!   crates can provide their own `Batch`.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DilogBuilder`] via `Dilog::new()`.
//! 2. Chain configuration methods (`.method()`, `.tolerance()`, `.non_finite()`).
//! 3. Select an adapter via `.adapter(Batch)` and call `.build()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchDilogBuilder;
use crate::engine::executor::{map_pass_sequential, MapPassFn};

// Publicly re-exported types
pub use crate::adapters::batch::BatchDilog;
pub use crate::algorithms::kernel::{DilogKernel, Method, NonFinitePolicy};
pub use crate::primitives::domain::Domain;
pub use crate::primitives::errors::DilogError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Real dilogarithm `Li2(x)` with the default configuration.
///
/// For `x > 1` the real part of the analytic continuation is returned.
/// NaN and infinite inputs return NaN.
///
/// ```rust
/// let pi2 = std::f64::consts::PI * std::f64::consts::PI;
/// assert!((dilog::li2(1.0_f64) - pi2 / 6.0).abs() < 1e-15);
/// assert!((dilog::li2(-1.0_f64) + pi2 / 12.0).abs() < 1e-15);
/// ```
#[inline]
pub fn li2<T: Float>(x: T) -> T {
    DilogKernel::default().evaluate(x)
}

/// Elementwise [`li2`] over a slice.
pub fn li2_slice<T: Float>(x: &[T]) -> Vec<T> {
    let mut out = x.to_vec();
    map_pass_sequential(&mut out, &DilogKernel::default());
    out
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring dilogarithm evaluation.
#[derive(Debug, Clone)]
pub struct DilogBuilder<T> {
    /// Core approximation (default: Series).
    pub method: Option<Method>,

    /// Relative truncation threshold of the power series (default: machine epsilon).
    pub tolerance: Option<T>,

    /// Treatment of NaN and infinite inputs (default: Propagate).
    pub non_finite: Option<NonFinitePolicy>,

    // ======================================
    // DEV
    // ======================================
    /// Custom map pass function.
    #[doc(hidden)]
    pub custom_map_pass: Option<MapPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for DilogBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DilogBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: DilogAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            tolerance: None,
            non_finite: None,
            custom_map_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        if self.non_finite.is_some() {
            self.duplicate_param = Some("non_finite");
        }
        self.non_finite = Some(policy);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    #[doc(hidden)]
    pub fn custom_map_pass(mut self, pass: MapPassFn<T>) -> Self {
        self.custom_map_pass = Some(pass);
        self
    }

    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Conversion from the generic builder into an execution builder.
pub trait DilogAdapter<T: Float> {
    type Output;

    fn convert(builder: DilogBuilder<T>) -> Self::Output;
}

/// Marker for sequential in-memory batch evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> DilogAdapter<T> for Batch {
    type Output = BatchDilogBuilder<T>;

    fn convert(builder: DilogBuilder<T>) -> Self::Output {
        let mut result = BatchDilogBuilder::default();

        if let Some(method) = builder.method {
            result.method = method;
        }
        if let Some(tolerance) = builder.tolerance {
            result.tolerance = tolerance;
        }
        if let Some(policy) = builder.non_finite {
            result.non_finite = policy;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_map_pass {
            result.custom_map_pass = Some(pass);
        }
        if let Some(parallel) = builder.parallel {
            result.parallel = Some(parallel);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
