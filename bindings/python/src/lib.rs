//! Python bindings for fastDilog.

#![allow(non_snake_case)]

use numpy::{PyArrayDyn, PyReadonlyArrayDyn, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt};
use std::fmt::Display;

use ::fastDilog::internals::api::{Method, NonFinitePolicy};
use ::fastDilog::prelude::{Batch, Dilog as DilogBuilder};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a DilogError to a PyErr
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Parse approximation method from string
fn parse_method(name: &str) -> PyResult<Method> {
    match name.to_lowercase().as_str() {
        "series" | "power_series" => Ok(Method::Series),
        "chebyshev" | "cernlib" => Ok(Method::Chebyshev),
        _ => Err(PyValueError::new_err(format!(
            "Unknown method: {}. Valid options: series, chebyshev",
            name
        ))),
    }
}

/// Parse non-finite policy from string
fn parse_non_finite(name: &str) -> PyResult<NonFinitePolicy> {
    match name.to_lowercase().as_str() {
        "propagate" | "nan" => Ok(NonFinitePolicy::Propagate),
        "reject" | "raise" => Ok(NonFinitePolicy::Reject),
        _ => Err(PyValueError::new_err(format!(
            "Unknown non-finite policy: {}. Valid options: propagate, reject",
            name
        ))),
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Real dilogarithm (Spence's function) of a scalar or array.
///
/// Returns a float for a Python float or int and an array of the same shape
/// otherwise. For x > 1 the real part is returned.
#[pyfunction]
#[pyo3(signature = (
    x,
    method="series",
    tolerance=None,
    non_finite="propagate",
    parallel=true
))]
fn rdilog<'py>(
    py: Python<'py>,
    x: &Bound<'py, PyAny>,
    method: &str,
    tolerance: Option<f64>,
    non_finite: &str,
    parallel: bool,
) -> PyResult<Bound<'py, PyAny>> {
    let mut builder = DilogBuilder::<f64>::new();
    builder = builder.method(parse_method(method)?);
    builder = builder.non_finite(parse_non_finite(non_finite)?);
    builder = builder.parallel(parallel);

    if let Some(tol) = tolerance {
        builder = builder.tolerance(tol);
    }

    let model = builder.adapter(Batch).build().map_err(to_py_error)?;

    if x.is_instance_of::<PyFloat>() || x.is_instance_of::<PyInt>() {
        let value = model
            .evaluate_scalar(x.extract::<f64>()?)
            .map_err(to_py_error)?;
        return Ok(PyFloat::new(py, value).into_any());
    }

    let numpy = py.import("numpy")?;
    let array = numpy.call_method1("asarray", (x, "float64"))?;
    let array: PyReadonlyArrayDyn<'py, f64> = array.extract()?;

    if array.ndim() == 0 {
        let value = model
            .evaluate_scalar(array.as_array().iter().next().copied().unwrap_or(f64::NAN))
            .map_err(to_py_error)?;
        return Ok(PyFloat::new(py, value).into_any());
    }

    let view = array.as_array();
    let values = py
        .allow_threads(|| model.evaluate_array(&view))
        .map_err(to_py_error)?;

    Ok(PyArrayDyn::from_owned_array(py, values).into_any())
}

// ============================================================================
// Module Registration
// ============================================================================

#[pymodule]
fn dilogarithm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rdilog, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
