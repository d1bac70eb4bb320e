//! Input abstractions for dilogarithm evaluation.
//!
//! ## Purpose
//!
//! This module lets `evaluate` accept slices, vectors and 1-D `ndarray`
//! arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffer.
//! * **Fail-fast validation**: Non-contiguous 1-D views are rejected instead of copied.
//!
//! ## Invariants
//!
//! * Returned slices cover all elements of the input container, in logical order.
//!
//! ## Non-goals
//!
//! * Multi-dimensional arrays go through `evaluate_array`, not this trait.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from dilog crate
use dilog::internals::primitives::errors::DilogError;

/// Trait for types that can be used as input for dilogarithm evaluation.
pub trait DilogInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_dilog_slice(&self) -> Result<&[T], DilogError>;
}

impl<T: Float> DilogInput<T> for [T] {
    fn as_dilog_slice(&self) -> Result<&[T], DilogError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> DilogInput<T> for [T; N] {
    fn as_dilog_slice(&self) -> Result<&[T], DilogError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> DilogInput<T> for Vec<T> {
    fn as_dilog_slice(&self) -> Result<&[T], DilogError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> DilogInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_dilog_slice(&self) -> Result<&[T], DilogError> {
        self.as_slice().ok_or_else(|| {
            DilogError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
