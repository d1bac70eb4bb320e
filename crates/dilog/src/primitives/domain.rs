//! Range classification of dilogarithm arguments.
//!
//! ## Purpose
//!
//! This module maps every real argument to exactly one canonical interval.
//! Each interval selects the functional identity used to move the argument
//! into the reduced domain of the core approximation.
//!
//! ## Design notes
//!
//! * **Exhaustive**: The intervals are disjoint and cover the extended reals.
//! * **Explicit boundaries**: Edge points are assigned by a single ordered
//!   chain of comparisons, never by floating-point tie-breaking downstream.
//!
//! ## Key concepts
//!
//! ```text
//!   NonFinite         NaN, -inf, +inf
//!   BelowMinusOne     (-inf, -1)
//!   MinusOne          {-1}
//!   MinusOneToZero    (-1, 0)
//!   Zero              {0}
//!   ZeroToHalf        (0, 1/2]
//!   HalfToOne         (1/2, 1)
//!   One               {1}
//!   OneToTwo          (1, 2)
//!   AboveTwo          [2, +inf)
//! ```
//!
//! ## Invariants
//!
//! * `classify` is total: every `T` value (including NaN) maps to one variant.
//! * `-0.0` classifies as `Zero`.

// External dependencies
use num_traits::Float;

/// Canonical interval of a dilogarithm argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// NaN or an infinity.
    NonFinite,

    /// `x < -1`: inversion followed by the Landen transform.
    BelowMinusOne,

    /// `x = -1`: closed form `-pi^2/12`.
    MinusOne,

    /// `-1 < x < 0`: Landen transform `x -> x/(x-1)`.
    MinusOneToZero,

    /// `x = 0`: closed form `0`.
    Zero,

    /// `0 < x <= 1/2`: evaluated directly.
    ZeroToHalf,

    /// `1/2 < x < 1`: reflection `x -> 1-x`.
    HalfToOne,

    /// `x = 1`: closed form `pi^2/6`.
    One,

    /// `1 < x < 2`: inversion followed by reflection, `x -> 1-1/x`.
    OneToTwo,

    /// `x >= 2`: inversion `x -> 1/x`.
    AboveTwo,
}

impl Domain {
    /// Classify an argument into its canonical interval.
    #[inline]
    pub fn classify<T: Float>(x: T) -> Self {
        let one = T::one();
        let half = one / (one + one);
        let two = one + one;

        if !x.is_finite() {
            Domain::NonFinite
        } else if x < -one {
            Domain::BelowMinusOne
        } else if x == -one {
            Domain::MinusOne
        } else if x < T::zero() {
            Domain::MinusOneToZero
        } else if x == T::zero() {
            Domain::Zero
        } else if x <= half {
            Domain::ZeroToHalf
        } else if x < one {
            Domain::HalfToOne
        } else if x == one {
            Domain::One
        } else if x < two {
            Domain::OneToTwo
        } else {
            Domain::AboveTwo
        }
    }

    /// Returns `true` if the value is produced by a closed form without reduction.
    #[inline]
    pub const fn is_closed_form(&self) -> bool {
        matches!(self, Domain::Zero | Domain::One | Domain::MinusOne)
    }

    /// Get the name of the interval.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Domain::NonFinite => "NonFinite",
            Domain::BelowMinusOne => "BelowMinusOne",
            Domain::MinusOne => "MinusOne",
            Domain::MinusOneToZero => "MinusOneToZero",
            Domain::Zero => "Zero",
            Domain::ZeroToHalf => "ZeroToHalf",
            Domain::HalfToOne => "HalfToOne",
            Domain::One => "One",
            Domain::OneToTwo => "OneToTwo",
            Domain::AboveTwo => "AboveTwo",
        }
    }
}
