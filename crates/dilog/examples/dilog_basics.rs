//! dilog Basic Evaluation Examples
//!
//! This example demonstrates:
//! - The `li2` convenience function
//! - Choosing between the power series and the Chebyshev expansion
//! - Rejecting non-finite input
//! - Evaluating into a preallocated buffer

use dilog::prelude::*;

fn main() -> Result<(), DilogError> {
    println!("{}", "=".repeat(80));
    println!("dilog Basic Evaluation Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_special_values();
    example_2_compare_methods()?;
    example_3_reject_non_finite()?;
    example_4_preallocated_output()?;

    Ok(())
}

/// Example 1: Special Values
fn example_1_special_values() {
    println!("Example 1: Special Values");
    println!("{}", "-".repeat(80));

    for x in [-1.0_f64, 0.0, 0.5, 1.0, 2.0] {
        println!("Li2({x:>5}) = {:+.17}", li2(x));
    }

    println!();
}

/// Example 2: Series vs Chebyshev
fn example_2_compare_methods() -> Result<(), DilogError> {
    println!("Example 2: Series vs Chebyshev");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..9).map(|i| -40.0 + 10.0 * i as f64).collect();

    let series = Dilog::new().method(Series).adapter(Batch).build()?;
    let chebyshev = Dilog::new().method(Chebyshev).adapter(Batch).build()?;

    let a = series.evaluate(&x)?;
    let b = chebyshev.evaluate(&x)?;

    println!("{:>8} {:>24} {:>24} {:>10}", "x", "series", "chebyshev", "diff");
    for i in 0..x.len() {
        println!(
            "{:>8} {:>24.17} {:>24.17} {:>10.1e}",
            x[i],
            a[i],
            b[i],
            (a[i] - b[i]).abs()
        );
    }

    println!();
    Ok(())
}

/// Example 3: Non-finite Policies
fn example_3_reject_non_finite() -> Result<(), DilogError> {
    println!("Example 3: Non-finite Policies");
    println!("{}", "-".repeat(80));

    let x = [0.25, f64::NAN, 4.0];

    let propagating = Dilog::new().adapter(Batch).build()?;
    println!("Propagate: {:?}", propagating.evaluate(&x)?);

    let rejecting = Dilog::new().non_finite(Reject).adapter(Batch).build()?;
    match rejecting.evaluate(&x) {
        Ok(values) => println!("Reject:    {values:?}"),
        Err(e) => println!("Reject:    error: {e}"),
    }

    println!();
    Ok(())
}

/// Example 4: Preallocated Output
fn example_4_preallocated_output() -> Result<(), DilogError> {
    println!("Example 4: Preallocated Output");
    println!("{}", "-".repeat(80));

    let x: Vec<f32> = (1..=5).map(|i| i as f32 / 4.0).collect();
    let mut out = vec![0.0_f32; x.len()];

    Dilog::new()
        .tolerance(1e-4) // Coarser series truncation for single precision
        .adapter(Batch)
        .build()?
        .evaluate_into(&x, &mut out)?;

    for (xi, yi) in x.iter().zip(&out) {
        println!("Li2({xi:.2}) = {yi:.6}");
    }

    println!();
    Ok(())
}
