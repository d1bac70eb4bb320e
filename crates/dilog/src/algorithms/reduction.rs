//! Argument range reduction for the dilogarithm.
//!
//! ## Purpose
//!
//! This module rewrites `Li2(x)` for an arbitrary real `x` as
//!
//! ```text
//! Li2(x) = offset + sign * core(t)
//! ```
//!
//! where `t` lies in the domain of one of the core approximations and
//! `offset` collects the logarithmic and constant terms of the identities used.
//!
//! ## Design notes
//!
//! * **Two tables**: The series core needs `t in [0, 1/2]`; the Chebyshev core
//!   (CERNLIB C332) needs `y in [0, 1]` and evaluates `-Li2(-y)`.
//! * **Dispatch**: Both tables match exhaustively on [`Domain`].
//! * **Accuracy**: Logarithms of arguments near 1 go through `ln_1p`.
//!
//! ## Key concepts
//!
//! * **Reflection**: `Li2(x) + Li2(1-x) = pi^2/6 - ln|x| ln|1-x|`.
//! * **Inversion**: `Li2(x) + Li2(1/x) = -pi^2/6 - ln(-x)^2/2` (`x < 0`),
//!   real part `pi^2/3 - ln(x)^2/2` (`x > 0`).
//! * **Landen**: `Li2(x) + Li2(x/(x-1)) = -ln(1-x)^2/2` (`x < 1`).
//!
//! ## Invariants
//!
//! * Series reductions produce `t in [0, 1/2]`.
//! * Chebyshev reductions produce `y in [0, 1]`.
//! * Closed forms and non-finite input never reach a core approximation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constants::{constant, PI_SQUARED_OVER_12, PI_SQUARED_OVER_3, PI_SQUARED_OVER_6};
use crate::primitives::domain::Domain;

// ============================================================================
// Reduction Result
// ============================================================================

/// Affine transform recovering `Li2(x)` from the core value at the reduced argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction<T> {
    /// Reduced argument passed to the core approximation.
    pub argument: T,

    /// Multiplier of the core value (`+1` or `-1`).
    pub sign: T,

    /// Additive correction from the functional identities.
    pub offset: T,
}

impl<T: Float> Reduction<T> {
    #[inline]
    fn new(argument: T, sign: T, offset: T) -> Self {
        Self {
            argument,
            sign,
            offset,
        }
    }

    /// Recover `Li2(x)` from the core value at the reduced argument.
    #[inline]
    pub fn reassemble(&self, core: T) -> T {
        self.offset + self.sign * core
    }
}

/// Outcome of range reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduced<T> {
    /// The value is known without a core evaluation (closed form or NaN).
    Exact(T),

    /// The value requires a core evaluation at a reduced argument.
    Transformed(Reduction<T>),
}

// ============================================================================
// Shared Closed Forms
// ============================================================================

/// Values that do not depend on the approximation method.
///
/// Every domain without a closed form (only `NonFinite` reaches this) maps to NaN.
#[inline]
fn closed_form<T: Float>(domain: Domain) -> T {
    match domain {
        Domain::Zero => T::zero(),
        Domain::One => constant(PI_SQUARED_OVER_6),
        Domain::MinusOne => -constant::<T>(PI_SQUARED_OVER_12),
        _ => T::nan(),
    }
}

// ============================================================================
// Series Reduction
// ============================================================================

/// Reduce `x` onto `[0, 1/2]` for the power series `S(t) = sum t^k / k^2`.
pub fn reduce_for_series<T: Float>(x: T) -> Reduced<T> {
    let domain = Domain::classify(x);
    let one = T::one();
    let half = constant::<T>(0.5);
    let pi2_3 = constant::<T>(PI_SQUARED_OVER_3);
    let pi2_6 = constant::<T>(PI_SQUARED_OVER_6);

    let reduction = match domain {
        Domain::BelowMinusOne => {
            // Inversion to 1/x in (-1, 0), then Landen to 1/(1-x).
            let ln_neg_x = (-x).ln();
            let ln_one_minus_inv = (-x.recip()).ln_1p();
            Reduction::new(
                (one - x).recip(),
                one,
                -pi2_6 - half * ln_neg_x * ln_neg_x + half * ln_one_minus_inv * ln_one_minus_inv,
            )
        }
        Domain::MinusOneToZero => {
            let ln_one_minus_x = (-x).ln_1p();
            Reduction::new(
                x / (x - one),
                -one,
                -half * ln_one_minus_x * ln_one_minus_x,
            )
        }
        Domain::ZeroToHalf => Reduction::new(x, one, T::zero()),
        Domain::HalfToOne => {
            let t = one - x;
            Reduction::new(t, -one, pi2_6 - x.ln() * t.ln())
        }
        Domain::OneToTwo => {
            // Inversion to 1/x in (1/2, 1), then reflection to 1 - 1/x.
            let t = (x - one) / x;
            let ln_x = (x - one).ln_1p();
            Reduction::new(t, one, pi2_6 - half * ln_x * ln_x - ln_x * t.ln())
        }
        Domain::AboveTwo => {
            let ln_x = x.ln();
            Reduction::new(x.recip(), -one, pi2_3 - half * ln_x * ln_x)
        }
        Domain::NonFinite | Domain::Zero | Domain::One | Domain::MinusOne => {
            return Reduced::Exact(closed_form(domain));
        }
    };

    Reduced::Transformed(reduction)
}

// ============================================================================
// Chebyshev Reduction
// ============================================================================

/// Reduce `x` onto `[0, 1]` for the Chebyshev core `-Li2(-y)`.
///
/// Branches follow CERNLIB C332, where `Li2(x) = -(s * core(y) + a)`.
pub fn reduce_for_chebyshev<T: Float>(x: T) -> Reduced<T> {
    let domain = Domain::classify(x);
    let one = T::one();
    let half = constant::<T>(0.5);
    let pi2_3 = constant::<T>(PI_SQUARED_OVER_3);
    let pi2_6 = constant::<T>(PI_SQUARED_OVER_6);

    let reduction = match domain {
        Domain::BelowMinusOne => {
            let ln_neg_x = (-x).ln();
            Reduction::new(-x.recip(), one, -pi2_6 - half * ln_neg_x * ln_neg_x)
        }
        Domain::MinusOneToZero => Reduction::new(-x, -one, T::zero()),
        Domain::ZeroToHalf => {
            let ln_one_minus_x = (-x).ln_1p();
            Reduction::new(
                x / (one - x),
                one,
                -half * ln_one_minus_x * ln_one_minus_x,
            )
        }
        Domain::HalfToOne => {
            let ln_x = x.ln();
            let ln_one_minus_x = (-x).ln_1p();
            Reduction::new(
                (one - x) / x,
                -one,
                pi2_6 - ln_x * (-half * ln_x + ln_one_minus_x),
            )
        }
        Domain::OneToTwo => {
            let ln_x = (x - one).ln_1p();
            let ln_one_minus_inv = (-x.recip()).ln_1p();
            Reduction::new(x - one, one, pi2_6 - ln_x * (ln_x + ln_one_minus_inv))
        }
        Domain::AboveTwo => {
            let ln_x = x.ln();
            let ln_one_minus_inv = (-x.recip()).ln_1p();
            Reduction::new(
                (x - one).recip(),
                -one,
                pi2_3 - half * (ln_x * ln_x - ln_one_minus_inv * ln_one_minus_inv),
            )
        }
        Domain::NonFinite | Domain::Zero | Domain::One | Domain::MinusOne => {
            return Reduced::Exact(closed_form(domain));
        }
    };

    Reduced::Transformed(reduction)
}
