//! Closed-form constants of the dilogarithm.
//!
//! All values are stored as `f64` literals and converted once per call to the
//! working float type.

// External dependencies
use num_traits::Float;

/// pi^2 / 3, the real part of `Li2(x) + Li2(1/x) + ln(x)^2/2` for `x > 0`.
pub const PI_SQUARED_OVER_3: f64 = 3.289_868_133_696_452_872_944_830_333_292_3_f64;

/// pi^2 / 6 = zeta(2) = `Li2(1)`.
pub const PI_SQUARED_OVER_6: f64 = 1.644_934_066_848_226_436_472_415_166_646_0_f64;

/// pi^2 / 12 = `-Li2(-1)`.
pub const PI_SQUARED_OVER_12: f64 = 0.822_467_033_424_113_218_236_207_583_323_0_f64;

/// Convert an `f64` constant into the working float type.
///
/// Every `Float` implementation can represent (a rounding of) any finite `f64`.
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap()
}
