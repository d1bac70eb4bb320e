//! Input validation for dilogarithm configuration and data.
//!
//! ## Purpose
//!
//! This module checks builder parameters and, when the `Reject` policy is
//! active, the finiteness of input data.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not evaluate anything.
//! * This module does not replace or filter invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DilogError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for dilogarithm configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that every input value is finite.
    pub fn validate_inputs<T: Float>(x: &[T]) -> Result<(), DilogError> {
        Self::validate_values(x.iter().copied())
    }

    /// Validate that every value yielded in logical order is finite.
    ///
    /// Reported indices count from the start of the iteration, so arrays of any
    /// shape are reported by their flat position.
    pub fn validate_values<T: Float>(values: impl IntoIterator<Item = T>) -> Result<(), DilogError> {
        match values.into_iter().enumerate().find(|(_, v)| !v.is_finite()) {
            Some((i, v)) => Err(DilogError::InvalidNumericValue(format!(
                "x[{}]={}",
                i,
                v.to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), DilogError> {
        if !val.is_finite() {
            return Err(DilogError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that an output buffer matches the input length.
    pub fn validate_output_len(input: usize, output: usize) -> Result<(), DilogError> {
        if input != output {
            return Err(DilogError::MismatchedLengths { input, output });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the series truncation tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), DilogError> {
        if !tol.is_finite() || tol <= T::zero() || tol >= T::one() {
            return Err(DilogError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DilogError> {
        if let Some(param) = duplicate_param {
            return Err(DilogError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
