//! Chebyshev expansion of the dilogarithm (CERNLIB C332).
//!
//! ## Purpose
//!
//! This module evaluates `-Li2(-y)` for `y in [0, 1]` from its Chebyshev
//! expansion in `h = 2y - 1`:
//!
//! ```text
//! -Li2(-y) = sum_{k=0}^{19} c_k T_k(2y - 1)
//! ```
//!
//! ## Design notes
//!
//! * **Clenshaw**: The sum is evaluated by the backward recurrence
//!   `b_k = c_k + 2h b_{k+1} - b_{k+2}`, result `b_0 - h b_1`.
//! * **Fixed degree**: All 20 coefficients are always used.
//!
//! ## Invariants
//!
//! * Absolute error is about 1e-16 over the whole interval.
//! * At `y = 0` the sum is zero and at `y = 1` it is `pi^2/12`, both up to rounding.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::constant;

/// Chebyshev coefficients of `-Li2(-y)` on `[0, 1]`.
pub const CHEBYSHEV_COEFFICIENTS: [f64; 20] = [
    0.42996693560813697,
    0.40975987533077105,
    -0.01858843665014592,
    0.00145751084062268,
    -0.00014304184442340,
    0.00001588415541880,
    -0.00000190784959387,
    0.00000024195180854,
    -0.00000003193341274,
    0.00000000434545063,
    -0.00000000060578480,
    0.00000000008612098,
    -0.00000000001244332,
    0.00000000000182256,
    -0.00000000000027007,
    0.00000000000004042,
    -0.00000000000000610,
    0.00000000000000093,
    -0.00000000000000014,
    0.00000000000000002,
];

/// Evaluate `-Li2(-y)` for `y in [0, 1]`.
#[inline]
pub fn dilog_chebyshev<T: Float>(y: T) -> T {
    let h = y + y - T::one();
    let alpha = h + h;

    let mut b0 = T::zero();
    let mut b1 = T::zero();
    let mut b2 = T::zero();

    for &c in CHEBYSHEV_COEFFICIENTS.iter().rev() {
        b0 = constant::<T>(c) + alpha * b1 - b2;
        b2 = b1;
        b1 = b0;
    }

    b0 - h * b2
}
