#![cfg(feature = "cpu")]

use approx::assert_relative_eq;
use fastDilog::internals::engine::executor::{map_pass_parallel, MIN_PARALLEL_LEN};
use fastDilog::prelude::*;
use ndarray::{array, s, Array1, Array2, Array3, ShapeBuilder};

fn wide_inputs(n: usize) -> Vec<f64> {
    (0..n).map(|i| -60.0 + 120.0 * i as f64 / n as f64).collect()
}

fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.to_bits()).collect()
}

#[test]
fn test_batch_sequential() {
    let x = vec![-2.0, -1.0, 0.0, 0.5, 1.0, 2.0];

    let res = Dilog::new()
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .evaluate(&x)
        .unwrap();

    assert_eq!(res.len(), 6);
    assert_eq!(res[2], 0.0);
    assert_relative_eq!(res[5], std::f64::consts::PI.powi(2) / 4.0, max_relative = 1e-14);
}

#[test]
fn test_batch_parallel_by_default() {
    let model = Dilog::<f64>::new().adapter(Batch).build().unwrap();
    assert!(model.is_parallel());

    let sequential = Dilog::<f64>::new().adapter(Batch).parallel(false).build().unwrap();
    assert!(!sequential.is_parallel());

    let from_base_builder = Dilog::<f64>::new().parallel(false).adapter(Batch).build().unwrap();
    assert!(!from_base_builder.is_parallel());
}

#[test]
fn test_parallel_matches_sequential_bitwise() {
    let x = wide_inputs(50 * MIN_PARALLEL_LEN + 17);

    for method in [Series, Chebyshev] {
        let parallel = Dilog::new().method(method).adapter(Batch).build().unwrap();
        let sequential = Dilog::new()
            .method(method)
            .adapter(Batch)
            .parallel(false)
            .build()
            .unwrap();

        let a = parallel.evaluate(&x).unwrap();
        let b = sequential.evaluate(&x).unwrap();
        assert_eq!(bits(&a), bits(&b));

        let scalar: Vec<f64> = x.iter().map(|&v| parallel.kernel().evaluate(v)).collect();
        assert_eq!(bits(&a), bits(&scalar));
    }
}

#[test]
fn test_parallel_matches_core_crate() {
    let x = wide_inputs(10_000);
    let model = Dilog::new().adapter(Batch).build().unwrap();

    assert_eq!(bits(&model.evaluate(&x).unwrap()), bits(&dilog::li2_slice(&x)));
}

#[test]
fn test_map_pass_parallel_direct() {
    let x = wide_inputs(3 * MIN_PARALLEL_LEN);
    let kernel = DilogKernel::default();

    let mut values = x.clone();
    map_pass_parallel(&mut values, &kernel);

    for (v, &xi) in values.iter().zip(&x) {
        assert_eq!(v.to_bits(), li2(xi).to_bits());
    }

    let mut empty: Vec<f64> = Vec::new();
    map_pass_parallel(&mut empty, &kernel);
    assert!(empty.is_empty());
}

#[test]
fn test_evaluate_into_and_in_place() {
    let x = wide_inputs(5_000);
    let model = Dilog::new().adapter(Batch).build().unwrap();
    let expected = model.evaluate(&x).unwrap();

    let mut out = vec![0.0; x.len()];
    model.evaluate_into(&x, &mut out).unwrap();
    assert_eq!(bits(&out), bits(&expected));

    let mut in_place = x.clone();
    model.evaluate_in_place(&mut in_place).unwrap();
    assert_eq!(bits(&in_place), bits(&expected));

    let mut short = vec![0.0; 3];
    assert_eq!(
        model.evaluate_into(&x, &mut short).unwrap_err(),
        DilogError::MismatchedLengths {
            input: 5_000,
            output: 3
        }
    );
}

#[test]
fn test_input_containers() {
    let model = Dilog::new().adapter(Batch).build().unwrap();

    let vec = vec![0.1, 0.9, 3.0];
    let arr = [0.1, 0.9, 3.0];
    let nd = Array1::from_vec(vec.clone());

    let from_vec = model.evaluate(&vec).unwrap();
    assert_eq!(model.evaluate(&arr).unwrap(), from_vec);
    assert_eq!(model.evaluate(&nd).unwrap(), from_vec);
    assert_eq!(model.evaluate(&nd.view()).unwrap(), from_vec);
    assert_eq!(model.evaluate(vec.as_slice()).unwrap(), from_vec);
}

#[test]
fn test_non_contiguous_input_rejected() {
    let model = Dilog::new().adapter(Batch).build().unwrap();
    let a = Array1::from_vec(wide_inputs(10));

    let strided = a.slice(s![..;2]);
    let err = model.evaluate(&strided).unwrap_err();
    assert!(matches!(err, DilogError::InvalidInput(_)));
    assert!(err.to_string().contains("contiguous"));

    // The array entry point accepts any layout
    let values = model.evaluate_array(&strided).unwrap();
    for (v, &xi) in values.iter().zip(strided.iter()) {
        assert_eq!(v.to_bits(), li2(xi).to_bits());
    }
}

#[test]
fn test_evaluate_array_preserves_shape() {
    let model = Dilog::new().adapter(Batch).build().unwrap();

    let grid = Array3::from_shape_fn((4, 5, 6), |(i, j, k)| {
        -10.0 + i as f64 * 3.0 + j as f64 * 0.7 + k as f64 * 0.11
    });
    let values = model.evaluate_array(&grid).unwrap();

    assert_eq!(values.shape(), grid.shape());
    for (idx, &xi) in grid.indexed_iter() {
        assert_eq!(values[idx].to_bits(), li2(xi).to_bits());
    }
}

#[test]
fn test_evaluate_array_layouts() {
    let data: Vec<f64> = (0..12).map(|i| -3.0 + 0.5 * i as f64).collect();

    let fortran = Array2::from_shape_vec((3, 4).f(), data.clone()).unwrap();
    let c_order = Array2::from_shape_vec((3, 4), data).unwrap();

    for parallel in [true, false] {
        let model = Dilog::new().adapter(Batch).parallel(parallel).build().unwrap();

        for input in [fortran.view(), c_order.view(), c_order.t()] {
            let values = model.evaluate_array(&input).unwrap();
            assert_eq!(values.dim(), input.dim());

            for (idx, &xi) in input.indexed_iter() {
                assert_eq!(values[idx].to_bits(), li2(xi).to_bits());
            }
        }
    }
}

#[test]
fn test_evaluate_array_empty() {
    let model = Dilog::<f64>::new().non_finite(Reject).adapter(Batch).build().unwrap();
    let empty = Array2::<f64>::zeros((0, 3));

    let values = model.evaluate_array(&empty).unwrap();
    assert_eq!(values.shape(), &[0, 3]);
}

#[test]
fn test_non_finite_policies() {
    let x = [0.5, f64::NAN, f64::NEG_INFINITY];

    let propagate = Dilog::new().adapter(Batch).build().unwrap();
    let res = propagate.evaluate(&x).unwrap();
    assert!(res[0].is_finite());
    assert!(res[1].is_nan());
    assert!(res[2].is_nan());

    let reject = Dilog::new().non_finite(Reject).adapter(Batch).build().unwrap();
    assert_eq!(
        reject.evaluate(&x).unwrap_err(),
        DilogError::InvalidNumericValue("x[1]=NaN".to_string())
    );

    let grid = array![[0.0, 1.0], [f64::INFINITY, 2.0]];
    assert_eq!(
        reject.evaluate_array(&grid).unwrap_err(),
        DilogError::InvalidNumericValue("x[2]=inf".to_string())
    );

    let values = propagate.evaluate_array(&grid).unwrap();
    assert!(values[[1, 0]].is_nan());
    assert_eq!(values[[0, 0]], 0.0);
}

#[test]
fn test_build_errors_propagate() {
    let err = Dilog::<f64>::new()
        .tolerance(2.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(err, DilogError::InvalidTolerance(2.0));

    let err = Dilog::<f64>::new()
        .method(Series)
        .method(Series)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(err, DilogError::DuplicateParameter { parameter: "method" });
}

#[test]
fn test_execution_builder_setters() {
    let model = Dilog::<f64>::new()
        .adapter(Batch)
        .method(Chebyshev)
        .tolerance(1e-9)
        .non_finite(Reject)
        .build()
        .unwrap();

    assert_eq!(model.kernel(), DilogKernel::new(Chebyshev, 1e-9));
    assert_eq!(model.non_finite_policy(), Reject);
    assert!(model.evaluate_scalar(f64::NAN).is_err());
}

#[test]
fn test_f32_parallel() {
    let x: Vec<f32> = (0..4_000).map(|i| -20.0 + 0.01 * i as f32).collect();
    let model = Dilog::<f32>::new().adapter(Batch).build().unwrap();

    let values = model.evaluate(&x).unwrap();
    for (v, &xi) in values.iter().zip(&x) {
        assert_relative_eq!(*v as f64, li2(xi as f64), epsilon = 1e-5, max_relative = 1e-5);
    }
}

#[test]
fn test_logging_with_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("fastDilog=debug"))
        .with_test_writer()
        .try_init();

    let model = Dilog::new().adapter(Batch).build().unwrap();
    let res = model.evaluate(&[0.25, f64::NAN]).unwrap();

    assert!(res[1].is_nan());
}
