//! # dilog — the real dilogarithm for Rust
//!
//! Fast, accurate evaluation of the real dilogarithm (Spence's function)
//!
//! ```text
//! Li2(x) = -∫₀ˣ ln(1 - t) / t dt
//! ```
//!
//! over the entire real line, to near double precision, for scalars and
//! slices. For `x > 1` the real part of the analytic continuation is returned.
//!
//! ## How it works
//!
//! Every argument is classified into one of a handful of disjoint intervals
//! (see [`prelude::Domain`]). Classical functional identities (reflection,
//! inversion and Landen's transform) move the argument into `[0, 1/2]`, where
//! the power series `sum t^k / k^2` converges quickly. The correction terms of
//! the identities are then added back. The points `0`, `1` and `-1` return
//! their closed forms directly.
//!
//! A second method ports the CERNLIB C332 Chebyshev expansion (20 terms on
//! `[0, 1]`), as used by the numpy `dilogarithm` package.
//!
//! ## Quick Start
//!
//! ```rust
//! use dilog::li2;
//!
//! let pi2 = std::f64::consts::PI * std::f64::consts::PI;
//!
//! assert_eq!(li2(0.0_f64), 0.0);
//! assert!((li2(2.0_f64) - pi2 / 4.0).abs() < 1e-14);
//! assert!(li2(f64::NAN).is_nan());
//! ```
//!
//! ### Configured Evaluation
//!
//! ```rust
//! use dilog::prelude::*;
//!
//! let x = vec![-3.0, -1.0, 0.0, 0.5, 1.0, 2.0];
//!
//! let model = Dilog::new()
//!     .method(Chebyshev)      // CERNLIB expansion instead of the power series
//!     .non_finite(Reject)     // Fail on NaN/inf instead of returning NaN
//!     .adapter(Batch)
//!     .build()?;
//!
//! let values = model.evaluate(&x)?;
//! assert_eq!(values.len(), x.len());
//!
//! let err = model.evaluate(&[1.0, f64::NAN]).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid numeric value: x[1]=NaN");
//! # Result::<(), DilogError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The numerical kernel never fails. Errors only come from the boundary:
//! an invalid tolerance or a repeated builder parameter at `build()`, a
//! mismatched output buffer in `evaluate_into`, or non-finite input under the
//! `Reject` policy.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency; the
//! math falls back to `libm` through `num-traits`:
//!
//! ```toml
//! [dependencies]
//! dilog = { version = "0.3", default-features = false }
//! ```
//!
//! ## References
//!
//! - L. Lewin (1981). "Polylogarithms and Associated Functions"
//! - K. S. Kölbig (1972). CERN Program Library C332, "DILOG"
//! - D. Zagier (2007). "The Dilogarithm Function"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error type and range classification.
mod primitives;

// Layer 2: Math - series, Chebyshev expansion and constants.
mod math;

// Layer 3: Algorithms - range reduction and the scalar kernel.
mod algorithms;

// Layer 4: Engine - validation and the elementwise map pass.
mod engine;

// Layer 5: Adapters - execution adapters over slices.
mod adapters;

// High-level fluent API.
mod api;

pub use api::{li2, li2_slice};

// Standard dilog prelude.
pub mod prelude {
    pub use crate::api::{
        li2, li2_slice,
        Adapter::Batch,
        BatchDilog, DilogBuilder as Dilog, DilogError, DilogKernel, Domain,
        Method::{Chebyshev, Series},
        NonFinitePolicy::{Propagate, Reject},
    };
}

// Internal modules for development, testing and extension crates.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
