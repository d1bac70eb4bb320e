//! Power series of the dilogarithm on the reduced domain.
//!
//! ## Purpose
//!
//! This module evaluates `S(t) = sum_{k>=1} t^k / k^2`, the defining series of
//! `Li2(t)`, for arguments already reduced into `[0, 1/2]`.
//!
//! ## Design notes
//!
//! * **Ordering**: Terms are accumulated in ascending powers of `t`.
//! * **Truncation**: Stops once the latest term is at most `tolerance * sum`.
//! * **Generics**: Generic over `Float` types; `f32` simply stops earlier.
//!
//! ## Invariants
//!
//! * For `t in [0, 1/2]` every term is non-negative, so no cancellation occurs.
//! * The loop is bounded by [`MAX_SERIES_TERMS`].
//!
//! ## Non-goals
//!
//! * This module does not reduce arguments; callers outside `[0, 1/2]` get a
//!   slowly converging (or divergent) partial sum.

// External dependencies
use num_traits::Float;

/// Upper bound on the number of series terms.
///
/// For `t <= 1/2`, `t^k` underflows to zero in `f64` before `k = 1100`.
pub const MAX_SERIES_TERMS: usize = 1100;

/// Evaluate the dilogarithm power series at a reduced argument.
#[inline]
pub fn dilog_series<T: Float>(t: T, tolerance: T) -> T {
    accumulate(t, tolerance).0
}

/// Number of terms [`dilog_series`] uses at `t` for the given tolerance.
pub fn series_terms<T: Float>(t: T, tolerance: T) -> usize {
    accumulate(t, tolerance).1
}

/// Sum the series, returning the partial sum and the number of terms added.
#[inline]
fn accumulate<T: Float>(t: T, tolerance: T) -> (T, usize) {
    if t == T::zero() {
        return (T::zero(), 0);
    }

    let mut sum = T::zero();
    let mut power = T::one();
    let mut k = T::zero();

    for n in 1..=MAX_SERIES_TERMS {
        k = k + T::one();
        power = power * t;
        let term = power / (k * k);
        sum = sum + term;

        if term.abs() <= tolerance * sum.abs() {
            return (sum, n);
        }
    }

    (sum, MAX_SERIES_TERMS)
}
