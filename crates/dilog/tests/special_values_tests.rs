//! Tests for known values of the dilogarithm.
//!
//! These tests compare both approximation methods against:
//! - Closed forms at the special points (0, 1, -1, 1/2, 2, golden ratio points)
//! - Particular value identities combining several arguments
//! - High-precision reference values spread over the real line
//!
//! ## Test Organization
//!
//! 1. **Closed Forms** - Exact values at 0, 1 and -1
//! 2. **Special Values** - Classical closed forms
//! 3. **Value Identities** - Linear combinations with known sums
//! 4. **Reference Values** - Comparison with 20-digit references

use approx::assert_relative_eq;
use core::f64::consts::{LN_2, PI};

use dilog::prelude::*;

const PI2: f64 = PI * PI;

fn evaluators() -> Vec<BatchDilog<f64>> {
    [Series, Chebyshev]
        .into_iter()
        .map(|method| Dilog::new().method(method).adapter(Batch).build().unwrap())
        .collect()
}

fn li2_with(model: &BatchDilog<f64>, x: f64) -> f64 {
    model.evaluate_scalar(x).unwrap()
}

macro_rules! assert_dilog_eq {
    ($actual:expr, $expected:expr) => {
        assert_relative_eq!($actual, $expected, epsilon = 1e-12, max_relative = 1e-14)
    };
}

// ============================================================================
// Closed Forms
// ============================================================================

/// Test that the closed-form points are returned exactly.
#[test]
fn test_closed_forms_are_exact() {
    for model in evaluators() {
        assert_eq!(li2_with(&model, 0.0), 0.0);
        assert_eq!(li2_with(&model, -0.0), 0.0);
        assert_eq!(li2_with(&model, 1.0), PI2 / 6.0);
        assert_eq!(li2_with(&model, -1.0), -PI2 / 12.0);
    }

    assert_eq!(li2(1.0_f64), PI2 / 6.0);
    assert_eq!(li2(-1.0_f64), -PI2 / 12.0);
}

// ============================================================================
// Special Values
// ============================================================================

/// Test the classical special values for both methods.
#[test]
fn test_special_values() {
    let sqrt5 = 5.0_f64.sqrt();
    let ln_phi = ((sqrt5 + 1.0) / 2.0).ln();

    for model in evaluators() {
        let f = |x: f64| li2_with(&model, x);

        assert_dilog_eq!(f(0.5), PI2 / 12.0 - LN_2 * LN_2 / 2.0);
        assert_dilog_eq!(f(2.0), PI2 / 4.0);

        assert_dilog_eq!(
            f(-(sqrt5 - 1.0) / 2.0),
            -PI2 / 15.0 + 0.5 * ln_phi * ln_phi
        );
        assert_dilog_eq!(f(-(sqrt5 + 1.0) / 2.0), -PI2 / 10.0 - ln_phi * ln_phi);
        assert_dilog_eq!(f((3.0 - sqrt5) / 2.0), PI2 / 15.0 - ln_phi * ln_phi);
        assert_dilog_eq!(f((sqrt5 - 1.0) / 2.0), PI2 / 10.0 - ln_phi * ln_phi);
    }
}

/// Test that the plain function agrees with the configured default.
#[test]
fn test_li2_matches_default_builder() {
    let model = Dilog::new().adapter(Batch).build().unwrap();

    for x in [-7.5_f64, -1.0, -0.3, 0.0, 0.2, 0.5, 0.8, 1.0, 1.4, 2.0, 33.0] {
        assert_eq!(li2(x).to_bits(), li2_with(&model, x).to_bits());
    }
}

// ============================================================================
// Value Identities
// ============================================================================

/// Test particular value identities relating 1/2, 1/3, 1/4, 1/8, 1/9 and 1/64.
#[test]
fn test_particular_value_identities() {
    let ln3 = 3.0_f64.ln();

    for model in evaluators() {
        let f = |x: f64| li2_with(&model, x);

        assert_dilog_eq!(
            f(1.0 / 3.0) - f(1.0 / 9.0) / 6.0,
            PI2 / 18.0 - ln3 * ln3 / 6.0
        );

        assert_dilog_eq!(
            f(-0.5) + f(1.0 / 9.0) / 6.0,
            -PI2 / 18.0 + LN_2 * ln3 - LN_2 * LN_2 / 2.0 - ln3 * ln3 / 3.0
        );

        assert_dilog_eq!(
            f(0.25) + f(1.0 / 9.0) / 3.0,
            PI2 / 18.0 + 2.0 * LN_2 * ln3 - 2.0 * LN_2 * LN_2 - 2.0 / 3.0 * ln3 * ln3
        );

        assert_dilog_eq!(
            f(-1.0 / 3.0) - f(1.0 / 9.0) / 3.0,
            -PI2 / 18.0 + ln3 * ln3 / 6.0
        );

        let ln_9_8 = (9.0_f64 / 8.0).ln();
        assert_dilog_eq!(f(-0.125) + f(1.0 / 9.0), -0.5 * ln_9_8 * ln_9_8);

        assert_dilog_eq!(
            36.0 * f(0.5) - 36.0 * f(0.25) - 12.0 * f(0.125) + 6.0 * f(1.0 / 64.0),
            PI2
        );
    }
}

// ============================================================================
// Reference Values
// ============================================================================

/// Test against high-precision references across every interval.
#[test]
fn test_reference_values() {
    let references = [
        (-1.0e5, -67.918_650_447_853_20),
        (-10.0, -4.198_277_886_858_104),
        (-3.0, -1.939_375_420_766_709),
        (-0.5, -0.448_414_206_923_646_2),
        (1.0e-5, 1.000_002_500_011_111_3e-5),
        (0.25, 0.267_652_639_082_732_6),
        (0.5, 0.582_240_526_465_012_5),
        (0.9, 1.299_714_723_004_958_8),
        (1.5, 2.374_395_270_272_480),
        (3.0, 2.320_180_423_313_098),
        (10.0, 0.536_301_287_357_862_7),
    ];

    for model in evaluators() {
        for (x, expected) in references {
            assert_dilog_eq!(li2_with(&model, x), expected);
        }
    }
}

/// Test the real part near its zero above 12, where only absolute accuracy applies.
#[test]
fn test_reference_value_near_real_zero() {
    for model in evaluators() {
        assert_relative_eq!(
            li2_with(&model, 12.6),
            -9.395_802_844_137_541e-4,
            epsilon = 1e-14
        );
    }
}
