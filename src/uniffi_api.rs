//! UniFFI API module for Swift and Kotlin bindings.
//!
//! Integer values cross the boundary as hex strings; the widths they carry
//! are the string lengths.

pub use crate::error::SrpIntegerError;
pub use crate::integer::PadMode;

/// Get the version of the srp-integer library.
#[uniffi::export]
pub fn get_core_version() -> String {
    crate::get_core_version().to_string()
}

/// Run a single integer operation.
///
/// # Arguments
/// * `input_json` - JSON string with format:
///   ```json
///   {"op": "mod_pow", "base": "02", "exponent": "0a", "modulus": "03e8"}
///   ```
///
/// # Returns
/// JSON string with format:
///   ```json
///   {"success": true, "hex": "0018", "decimal": "24", "length": 4}
///   ```
#[uniffi::export]
pub fn evaluate_json(input_json: String) -> Result<String, SrpIntegerError> {
    crate::evaluate::evaluate_json(&input_json)
}

/// Generate a random integer of `bytes` bytes.
/// Returns `2 * bytes` lowercase hex characters.
#[uniffi::export]
pub fn random_integer_hex(bytes: u32) -> Result<String, SrpIntegerError> {
    crate::evaluate::random_integer_hex(bytes as usize)
}

/// Compute `base^exponent mod modulus`, padded to the width of `modulus`.
#[uniffi::export]
pub fn mod_pow_hex(
    base: String,
    exponent: String,
    modulus: String,
) -> Result<String, SrpIntegerError> {
    crate::evaluate::mod_pow_hex(&base, &exponent, &modulus)
}

/// Re-pad a hex value to `length` digits.
#[uniffi::export]
pub fn pad_hex(value: String, length: u32, mode: PadMode) -> Result<String, SrpIntegerError> {
    crate::evaluate::pad_hex(&value, length as usize, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_json() {
        let input = r#"{"op": "xor", "a": "0a", "b": "05"}"#;

        let result = evaluate_json(input.to_string());
        assert!(result.is_ok());

        let output: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(output["success"], true);
        assert_eq!(output["hex"], "0f");
    }

    #[test]
    fn test_mod_pow_hex() {
        let hex = mod_pow_hex("02".to_string(), "0a".to_string(), "03e8".to_string()).unwrap();
        assert_eq!(hex, "0018");
    }

    #[test]
    fn test_pad_hex() {
        assert_eq!(pad_hex("ff".to_string(), 4, PadMode::Lenient).unwrap(), "00ff");
        assert!(pad_hex("00ff".to_string(), 2, PadMode::Strict).is_err());
    }

    #[test]
    fn test_random_integer_hex() {
        assert_eq!(random_integer_hex(4).unwrap().len(), 8);
    }
}
