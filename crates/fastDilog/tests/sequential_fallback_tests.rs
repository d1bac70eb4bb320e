//! Tests for builds without the `cpu` feature.
//!
//! Without rayon every evaluator runs the sequential pass from `dilog`,
//! whatever the parallel hint says.

#![cfg(not(feature = "cpu"))]

use fastDilog::prelude::*;
use ndarray::array;

fn inputs() -> Vec<f64> {
    (0..4096).map(|i| -40.0 + 80.0 * i as f64 / 4096.0).collect()
}

/// Test that the parallel hint is ignored.
#[test]
fn test_parallel_hint_ignored() {
    let model = Dilog::<f64>::new().parallel(true).adapter(Batch).build().unwrap();
    assert!(!model.is_parallel());
}

/// Test that results match the core crate bit for bit.
#[test]
fn test_sequential_matches_core() {
    let x = inputs();

    for method in [Series, Chebyshev] {
        let model = Dilog::<f64>::new().method(method).adapter(Batch).build().unwrap();
        let core = dilog::prelude::Dilog::<f64>::new()
            .method(method)
            .adapter(dilog::prelude::Batch)
            .build()
            .unwrap();

        let fast = model.evaluate(&x).unwrap();
        let base = core.evaluate(&x[..]).unwrap();
        for (a, b) in fast.iter().zip(&base) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

/// Test that arrays are still evaluated elementwise.
#[test]
fn test_array_without_rayon() {
    let model = Dilog::<f64>::new().adapter(Batch).build().unwrap();
    let y = model.evaluate_array(&array![[0.0, 1.0], [-1.0, 0.5]]).unwrap();

    assert_eq!(y.shape(), &[2, 2]);
    assert_eq!(y[[0, 0]], 0.0);
    assert_eq!(y[[1, 0]], li2(-1.0_f64));
}
