//! # fastDilog — parallel real dilogarithm for Rust
//!
//! Multi-threaded, `ndarray`-aware evaluation of the real dilogarithm
//! (Spence's function) built on the [`dilog`] crate.
//!
//! ## How it works
//!
//! `fastDilog` reuses the `dilog` builder and numerical kernel unchanged and
//! replaces the sequential map pass with a `rayon` parallel one. Because every
//! element is evaluated independently by the same pure kernel, parallel and
//! sequential results are identical bit for bit.
//!
//! On top of slices it accepts `ndarray` containers: contiguous 1-D arrays as
//! plain inputs, and arrays of any dimension and layout via
//! `evaluate_array`, which preserves the shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastDilog::prelude::*;
//!
//! let x: Vec<f64> = (0..10_000).map(|i| -50.0 + 0.01 * i as f64).collect();
//!
//! let model = Dilog::new()
//!     .adapter(Batch)     // parallel by default
//!     .build()?;
//!
//! let values = model.evaluate(&x)?;
//! assert_eq!(values.len(), x.len());
//! # Result::<(), DilogError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! ```rust
//! use fastDilog::prelude::*;
//! use ndarray::array;
//!
//! let grid = array![[0.0, 0.5], [1.0, 2.0]];
//!
//! let model = Dilog::new().method(Chebyshev).adapter(Batch).build()?;
//! let values = model.evaluate_array(&grid)?;
//!
//! assert_eq!(values.shape(), &[2, 2]);
//! assert_eq!(values[[0, 0]], 0.0);
//! # Result::<(), DilogError>::Ok(())
//! ```
//!
//! ### Sequential Fallback
//!
//! ```rust
//! use fastDilog::prelude::*;
//!
//! let model = Dilog::new()
//!     .adapter(Batch)
//!     .parallel(false)    // single-threaded, same results
//!     .build()?;
//!
//! assert_eq!(model.evaluate(&[0.0, 1.0])?[0], 0.0);
//! # Result::<(), DilogError>::Ok(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`cpu`** (default): parallel execution with `rayon`. Without it every
//!   evaluation runs sequentially.
//!
//! ## Logging
//!
//! Builds and evaluations emit `tracing` events (`debug` level, plus a `warn`
//! when NaN or infinite inputs are propagated). Install any subscriber to see
//! them.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for dilogarithm evaluation.
mod api;

// Input data handling.
mod input;

pub use dilog::{li2, li2_slice};

// Standard fastDilog prelude.
pub mod prelude {
    pub use crate::api::{
        li2, li2_slice,
        Adapter::Batch,
        DilogBuilder as Dilog, DilogError, DilogInput, DilogKernel, Domain,
        Method::{Chebyshev, Series},
        NonFinitePolicy::{Propagate, Reject},
        ParallelBatchDilog,
    };
}

// Internal modules for development and testing.
#[doc(hidden)]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
