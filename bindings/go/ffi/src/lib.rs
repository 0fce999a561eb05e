//! C-FFI layer for pal - used by Go (cgo) and other FFI consumers.
//!
//! ZERO logic here. All calls delegate to `pal-core`.
//!
//! # Memory Contract
//!
//! All functions that return `*mut c_char` allocate via `CString`.
//! The caller MUST free the returned string by calling `pal_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Result from a pal FFI call.
/// If `error` is null, the call succeeded and `result` contains the output.
/// If `error` is non-null, the call failed and `error` contains the error message.
/// The caller MUST free both `result` and `error` with `pal_free_string()`.
#[repr(C)]
pub struct PalResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl PalResult {
    fn ok(value: String) -> Self {
        let c = CString::new(value).unwrap_or_default();
        PalResult {
            result: c.into_raw(),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        let c = CString::new(msg).unwrap_or_default();
        PalResult {
            result: std::ptr::null_mut(),
            error: c.into_raw(),
        }
    }
}

/// Helper: decode a C string pointer into a Rust &str.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Result<&'a str, String> {
    if ptr.is_null() {
        return Err("null input".into());
    }
    std::str::from_utf8(CStr::from_ptr(ptr).to_bytes())
        .map_err(|e| pal_core::Error::from(e).to_string())
}

/// Validate a phrase.
/// Returns JSON: { "palindrome": bool, "canonical": "..." }
///
/// # Safety
/// `text` must be null or a valid null-terminated C string.
/// The caller must free the returned strings with `pal_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn pal_validate(text: *const c_char) -> PalResult {
    let text = match cstr_to_str(text) {
        Ok(s) => s,
        Err(e) => return PalResult::err(e),
    };

    match pal_core::validate(text).to_json() {
        Ok(json) => PalResult::ok(json),
        Err(e) => PalResult::err(e.to_string()),
    }
}

/// Normalize a phrase to its canonical comparison form.
///
/// # Safety
/// `text` must be null or a valid null-terminated C string.
/// The caller must free the returned strings with `pal_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn pal_normalize(text: *const c_char) -> PalResult {
    match cstr_to_str(text) {
        Ok(s) => PalResult::ok(pal_core::normalize(s).into_string()),
        Err(e) => PalResult::err(e),
    }
}

/// Free a string previously returned by a pal FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a pal FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn pal_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(result: PalResult) -> (Option<String>, Option<String>) {
        let read = |ptr: *mut c_char| {
            if ptr.is_null() {
                None
            } else {
                let s = CStr::from_ptr(ptr).to_string_lossy().into_owned();
                pal_free_string(ptr);
                Some(s)
            }
        };
        (read(result.result), read(result.error))
    }

    #[test]
    fn test_validate_returns_json() {
        let input = CString::new("Was it a cat I saw?").unwrap();
        let (result, error) = unsafe { take(pal_validate(input.as_ptr())) };
        assert!(error.is_none());
        let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(json["palindrome"], true);
        assert_eq!(json["canonical"], "wasitacatisaw");
    }

    #[test]
    fn test_normalize() {
        let input = CString::new("たけやぶやけた").unwrap();
        let (result, error) = unsafe { take(pal_normalize(input.as_ptr())) };
        assert!(error.is_none());
        assert_eq!(result.unwrap(), "たけやふやけた");
    }

    #[test]
    fn test_null_input_is_error() {
        let (result, error) = unsafe { take(pal_validate(std::ptr::null())) };
        assert!(result.is_none());
        assert_eq!(error.unwrap(), "null input");
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let input = CString::new(vec![b'a', 0xFF]).unwrap();
        let (result, error) = unsafe { take(pal_normalize(input.as_ptr())) };
        assert!(result.is_none());
        assert!(error.unwrap().contains("Invalid UTF-8"));
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { pal_free_string(std::ptr::null_mut()) };
    }
}
