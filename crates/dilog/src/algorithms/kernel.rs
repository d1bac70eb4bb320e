//! Scalar dilogarithm kernel.
//!
//! ## Purpose
//!
//! This module ties range reduction and the core approximations together into
//! the pure scalar function `x -> Li2(x)` that every adapter maps over its
//! input.
//!
//! ## Design notes
//!
//! * **Pipeline**: classify, reduce, evaluate the core, reassemble.
//! * **Stateless**: The kernel is a `Copy` value holding only configuration.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Series** (default): reduction onto `[0, 1/2]` and the power series.
//! * **Chebyshev**: CERNLIB C332 reduction onto `[0, 1]` and a 20-term
//!   Chebyshev expansion. The tolerance setting does not apply to it.
//!
//! ## Invariants
//!
//! * `evaluate` never panics and never fails.
//! * Non-finite input yields NaN.
//! * The same kernel and input always produce the same bits.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::reduction::{reduce_for_chebyshev, reduce_for_series, Reduced};
use crate::math::chebyshev::dilog_chebyshev;
use crate::math::series::dilog_series;

// ============================================================================
// Method
// ============================================================================

/// Core approximation used on the reduced domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Power series `sum t^k / k^2` on `[0, 1/2]`.
    #[default]
    Series,

    /// CERNLIB C332 Chebyshev expansion on `[0, 1]`.
    Chebyshev,
}

impl Method {
    /// Get the name of the method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Method::Series => "Series",
            Method::Chebyshev => "Chebyshev",
        }
    }

    /// Reduce an argument for this method.
    #[inline]
    pub fn reduce<T: Float>(&self, x: T) -> Reduced<T> {
        match self {
            Method::Series => reduce_for_series(x),
            Method::Chebyshev => reduce_for_chebyshev(x),
        }
    }
}

// ============================================================================
// Non-finite Policy
// ============================================================================

/// Treatment of NaN and infinite inputs by the batch evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFinitePolicy {
    /// Return NaN for the offending element and keep going.
    #[default]
    Propagate,

    /// Fail with `DilogError::InvalidNumericValue` before evaluating anything.
    Reject,
}

// ============================================================================
// Kernel
// ============================================================================

/// Configured scalar dilogarithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilogKernel<T> {
    /// Core approximation.
    pub method: Method,

    /// Relative truncation threshold of the power series.
    pub tolerance: T,
}

impl<T: Float> Default for DilogKernel<T> {
    fn default() -> Self {
        Self::new(Method::Series, T::epsilon())
    }
}

impl<T: Float> DilogKernel<T> {
    /// Create a kernel with the given method and series tolerance.
    pub fn new(method: Method, tolerance: T) -> Self {
        Self { method, tolerance }
    }

    /// Evaluate `Li2(x)` (the real part for `x > 1`).
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        match self.method.reduce(x) {
            Reduced::Exact(value) => value,
            Reduced::Transformed(reduction) => {
                let core = match self.method {
                    Method::Series => dilog_series(reduction.argument, self.tolerance),
                    Method::Chebyshev => dilog_chebyshev(reduction.argument),
                };
                reduction.reassemble(core)
            }
        }
    }
}
