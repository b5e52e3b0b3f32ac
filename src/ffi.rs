//! C FFI exports for .NET P/Invoke.
//!
//! These functions provide a C-compatible interface for calling Rust functions from C#.
//! All functions use JSON strings for input/output to simplify marshalling.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::evaluate::{evaluate, IntegerOp};
use crate::integer::SrpInteger;

/// Run a single integer operation.
///
/// # Safety
///
/// - `input_json` must be a valid null-terminated C string
/// - The returned pointer must be freed by calling `free_string`
///
/// # Returns
///
/// A null-terminated C string containing the JSON result (IntegerOpOutput).
/// Returns null on error.
#[no_mangle]
pub unsafe extern "C" fn evaluate_json_ffi(input_json: *const c_char) -> *mut c_char {
    if input_json.is_null() {
        return ptr::null_mut();
    }

    let c_str = match CStr::from_ptr(input_json).to_str() {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    let op: IntegerOp = match serde_json::from_str(c_str) {
        Ok(op) => op,
        Err(e) => {
            return create_error_response(&format!("Failed to parse input: {}", e));
        }
    };

    let output = match evaluate(op) {
        Ok(o) => o,
        Err(e) => {
            return create_error_response(&format!("Operation failed: {}", e));
        }
    };

    match serde_json::to_string(&output) {
        Ok(json) => string_to_c_char(json),
        Err(e) => create_error_response(&format!("Failed to serialize output: {}", e)),
    }
}

/// Generate a random integer of `bytes` bytes as lowercase hex.
///
/// # Safety
///
/// - The returned pointer must be freed by calling `free_string`
///
/// # Returns
///
/// A null-terminated C string with `2 * bytes` hex characters.
/// Returns null if the random source fails or `bytes` cannot be reserved.
#[no_mangle]
pub extern "C" fn random_integer_hex_ffi(bytes: usize) -> *mut c_char {
    match SrpInteger::random_integer(bytes).and_then(|value| value.to_hex()) {
        Ok(hex) => string_to_c_char(hex),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string that was allocated by Rust.
///
/// # Safety
///
/// - `s` must be a pointer that was returned by one of the FFI functions
/// - This function must only be called once per pointer
/// - After calling this function, the pointer is invalid
#[no_mangle]
pub unsafe extern "C" fn free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Convert a Rust string to a C string pointer.
fn string_to_c_char(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Create an error response JSON string.
fn create_error_response(message: &str) -> *mut c_char {
    let error = serde_json::json!({ "success": false, "error": message });
    string_to_c_char(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn read_and_free(result: *mut c_char) -> String {
        assert!(!result.is_null());
        unsafe {
            let json = CStr::from_ptr(result).to_str().unwrap().to_string();
            free_string(result);
            json
        }
    }

    #[test]
    fn test_evaluate_json_ffi() {
        let input = CString::new(r#"{"op": "pad", "value": "ff", "length": 4}"#).unwrap();
        let json = read_and_free(unsafe { evaluate_json_ffi(input.as_ptr()) });

        let output: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(output["success"], true);
        assert_eq!(output["hex"], "00ff");
    }

    #[test]
    fn test_random_integer_hex_ffi() {
        let hex = read_and_free(random_integer_hex_ffi(16));
        assert_eq!(hex.len(), 32);

        // Zero bytes is zero with width 0, rendered as a single digit
        assert_eq!(read_and_free(random_integer_hex_ffi(0)), "0");

        assert!(random_integer_hex_ffi(usize::MAX).is_null());
    }

    #[test]
    fn test_oversized_length_returns_error_response() {
        let input =
            CString::new(r#"{"op":"pad","value":"ff","length":18446744073709551615}"#).unwrap();
        let json = read_and_free(unsafe { evaluate_json_ffi(input.as_ptr()) });

        let output: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(output["success"], false);
        assert!(output["error"].as_str().unwrap().contains("Allocation failed"));
    }

    #[test]
    fn test_null_input() {
        unsafe {
            let result = evaluate_json_ffi(ptr::null());
            assert!(result.is_null());
        }
    }

    #[test]
    fn test_invalid_json_input() {
        let invalid_json = CString::new("not valid json").unwrap();
        let json = read_and_free(unsafe { evaluate_json_ffi(invalid_json.as_ptr()) });

        let output: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(output["success"], false);
        assert!(output["error"].as_str().unwrap().contains("Failed to parse input"));
    }

    #[test]
    fn test_operation_error() {
        let input = CString::new(r#"{"op": "from_hex", "hex": "0a"}"#).unwrap();
        let json = read_and_free(unsafe { evaluate_json_ffi(input.as_ptr()) });
        assert!(json.contains("\"success\":true"));

        let input = CString::new(r#"{"op": "mod", "value": "0a", "modulus": "0"}"#).unwrap();
        let json = read_and_free(unsafe { evaluate_json_ffi(input.as_ptr()) });
        assert!(json.contains("Invalid modulus"));
    }
}
