//! Python bindings for pal
//!
//! Thin wrapper around `pal-core` - ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Validate a phrase.
///
/// Ignores letter case, punctuation, whitespace and diacritics.
/// A phrase with nothing left after normalization is not a palindrome.
///
/// Args:
///     text: phrase to validate
///
/// Returns:
///     (is_palindrome, canonical) tuple
#[pyfunction]
fn validate(text: &str) -> (bool, String) {
    let (ok, canonical) = pal_core::validate(text).into_parts();
    (ok, canonical.into_string())
}

/// Returns True if the phrase is a palindrome.
#[pyfunction]
fn is_palindrome(text: &str) -> bool {
    pal_core::validate(text).is_palindrome()
}

/// Normalize a phrase to its canonical comparison form.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Idempotent: normalize(normalize(x)) == normalize(x)
#[pyfunction]
fn normalize(text: &str) -> String {
    pal_core::normalize(text).into_string()
}

/// Validate a phrase and return the result as JSON.
///
/// Returns:
///     JSON string: {"palindrome": bool, "canonical": "..."}
///
/// Raises:
///     ValueError: If the result cannot be serialized
#[pyfunction]
fn validate_json(text: &str) -> PyResult<String> {
    pal_core::validate(text)
        .to_json()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// pal Python module - Unicode palindrome validation
#[pymodule]
fn pal(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(is_palindrome, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(validate_json, m)?)?;
    Ok(())
}
