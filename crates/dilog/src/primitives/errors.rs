//! Error types for dilogarithm evaluation.
//!
//! ## Purpose
//!
//! This module defines the error conditions of the evaluation boundary:
//! builder configuration, input policy enforcement and output buffer shape.
//! The numerical kernel itself is total over finite reals and never produces
//! one of these errors.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending value or lengths.
//! * **Deferred**: Configuration errors are recorded by the builder and surfaced by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Every variant carries enough context to locate the problem.
//! * Numeric values in errors are reported as `f64` regardless of the float type in use.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for dilogarithm evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum DilogError {
    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Input contains NaN or infinite values while the `Reject` policy is active.
    InvalidNumericValue(String),

    /// Series truncation tolerance must be finite and strictly between 0 and 1.
    InvalidTolerance(f64),

    /// Output buffer must have exactly as many elements as the input.
    MismatchedLengths {
        /// Number of input elements.
        input: usize,
        /// Number of output slots.
        output: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DilogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0, < 1 and finite)")
            }
            Self::MismatchedLengths { input, output } => {
                write!(
                    f,
                    "Length mismatch: input has {input} elements, output has {output}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DilogError {}
