//! # flatjson-python
//!
//! Python bindings for the flat JSON parser and serializer, built with PyO3.
//!
//! Exposes the following functions to Python as the `cjson` module:
//!
//! - `loads(text)` -- flat JSON string -> `dict`
//! - `dumps(mapping)` -- `dict` -> canonical flat JSON string
//!
//! Python callers can pass anything, so the input-shape checks that the Rust
//! signatures make unnecessary happen here. Every failure raises `TypeError`
//! carrying the exact message of the underlying error.

use flatjson_core::{Document, ParseErrorKind, SerializeError, Value};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyString};

fn type_error(message: impl ToString) -> PyErr {
    PyTypeError::new_err(message.to_string())
}

/// Parse a flat JSON string into a dictionary.
///
/// Args:
///     text: A flat JSON object, e.g. '{"name": "John", "age": 30}'.
///
/// Returns:
///     A dict in document order. Numbers without a decimal point become
///     `int`; numbers with one become `float`.
///
/// Raises:
///     TypeError: If the argument is not a str, or the text is not a valid
///     flat JSON object.
#[pyfunction]
fn loads<'py>(py: Python<'py>, text: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyDict>> {
    let text = text
        .downcast::<PyString>()
        .map_err(|_| type_error(ParseErrorKind::ExpectedStringInput))?
        .to_cow()
        .map_err(|_| type_error(ParseErrorKind::ExpectedStringInput))?;
    let doc = flatjson_core::parse(&text).map_err(type_error)?;

    let dict = PyDict::new(py);
    for (key, value) in &doc {
        match value {
            Value::String(s) => dict.set_item(key, s.as_str())?,
            Value::Integer(n) => dict.set_item(key, *n)?,
            Value::Float(f) => dict.set_item(key, *f)?,
        }
    }
    Ok(dict)
}

/// Serialize a dictionary into a flat JSON string.
///
/// Args:
///     mapping: A dict with str keys and str, int or float values.
///
/// Returns:
///     The canonical text, e.g. '{"name": "John", "age": 30}'.
///
/// Raises:
///     TypeError: If the argument is not a dict, a key is not a str, or a
///     value is not a str, int or float.
#[pyfunction]
fn dumps(mapping: &Bound<'_, PyAny>) -> PyResult<String> {
    let dict = mapping
        .downcast::<PyDict>()
        .map_err(|_| type_error(SerializeError::ExpectedDictionary))?;

    let mut doc = Document::with_capacity(dict.len());
    for (key, value) in dict.iter() {
        let key = key
            .downcast::<PyString>()
            .map_err(|_| type_error(SerializeError::KeyNotString))?
            .to_cow()?
            .into_owned();
        doc.insert(key, extract_value(&value)?);
    }
    flatjson_core::serialize(&doc).map_err(type_error)
}

/// `bool` is a subclass of `int` in Python but has no place in the grammar.
/// Integers outside the `i64` range are rejected as well.
fn extract_value(value: &Bound<'_, PyAny>) -> PyResult<Value> {
    let unsupported = || type_error(SerializeError::UnsupportedValue);

    if let Ok(s) = value.downcast::<PyString>() {
        return Ok(Value::String(s.to_cow()?.into_owned()));
    }
    if value.is_instance_of::<PyBool>() {
        return Err(unsupported());
    }
    if value.is_instance_of::<PyInt>() {
        return value
            .extract::<i64>()
            .map(Value::Integer)
            .map_err(|_| unsupported());
    }
    if let Ok(f) = value.downcast::<PyFloat>() {
        return Ok(Value::Float(f.value()));
    }
    Err(unsupported())
}

/// The `cjson` Python module, implemented in Rust via PyO3.
#[pymodule]
fn cjson(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(loads, m)?)?;
    m.add_function(wrap_pyfunction!(dumps, m)?)?;
    Ok(())
}
