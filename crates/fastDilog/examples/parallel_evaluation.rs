//! fastDilog Parallel Evaluation Examples
//!
//! This example demonstrates features specific to `fastDilog`:
//! - Parallel execution using `rayon`
//! - Sequential fallback
//! - `ndarray` integration for arrays of any shape
//! - `tracing` output

use fastDilog::prelude::*;
use ndarray::Array2;
use std::time::Instant;

fn main() -> Result<(), DilogError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(80));
    println!("fastDilog Parallel Evaluation Examples");
    println!("{}", "=".repeat(80));
    println!();

    let n = 2_000_000;
    let x: Vec<f64> = (0..n).map(|i| -100.0 + 200.0 * i as f64 / n as f64).collect();

    example_1_parallel_execution(&x)?;
    example_2_sequential_fallback(&x)?;
    example_3_ndarray_integration()?;

    Ok(())
}

/// Example 1: Parallel Execution
/// Demonstrates the default parallel execution mode
fn example_1_parallel_execution(x: &[f64]) -> Result<(), DilogError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let model = Dilog::new()
        .adapter(Batch) // Batch from fastDilog
        .parallel(true) // Enable parallel execution (default)
        .build()?;

    let values = model.evaluate(x)?;
    let duration = start.elapsed();

    println!("Evaluated {} points in {:?}", x.len(), duration);
    println!("Li2({}) = {}", x[0], values[0]);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback(x: &[f64]) -> Result<(), DilogError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let model = Dilog::new()
        .adapter(Batch)
        .parallel(false) // Disable parallel execution
        .build()?;

    let values = model.evaluate(x)?;
    let duration = start.elapsed();

    println!("Evaluated {} points in {:?}", x.len(), duration);
    println!("Li2({}) = {}", x[0], values[0]);

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
/// Evaluates a 2-D grid and keeps its shape
fn example_3_ndarray_integration() -> Result<(), DilogError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let grid = Array2::from_shape_fn((3, 4), |(i, j)| -1.0 + 0.5 * i as f64 + 0.25 * j as f64);

    let model = Dilog::new().method(Chebyshev).adapter(Batch).build()?;
    let values = model.evaluate_array(&grid)?;

    println!("x =\n{grid:.3}");
    println!("Li2(x) =\n{values:.6}");

    println!();
    Ok(())
}
