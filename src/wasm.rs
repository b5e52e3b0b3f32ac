//! WASM bindings for browser extension.

use wasm_bindgen::prelude::*;

use crate::evaluate::{evaluate, IntegerOp, IntegerOpOutput};
use crate::integer::PadMode;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Run a single integer operation.
///
/// Takes a JsValue (IntegerOp) and returns a JsValue (IntegerOpOutput).
#[wasm_bindgen(js_name = evaluate)]
pub fn evaluate_js(input: JsValue) -> Result<JsValue, JsValue> {
    let op: IntegerOp = serde_wasm_bindgen::from_value(input)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;

    let output: IntegerOpOutput = evaluate(op)
        .map_err(|e| JsValue::from_str(&format!("Operation failed: {}", e)))?;

    serde_wasm_bindgen::to_value(&output)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Run a single integer operation using JSON strings (alternative API).
#[wasm_bindgen(js_name = evaluateJson)]
pub fn evaluate_json_js(input_json: &str) -> Result<String, JsValue> {
    crate::evaluate::evaluate_json(input_json)
        .map_err(|e| JsValue::from_str(&format!("Operation failed: {}", e)))
}

/// Generate a random integer of `bytes` bytes as lowercase hex.
#[wasm_bindgen(js_name = randomIntegerHex)]
pub fn random_integer_hex_js(bytes: usize) -> Result<String, JsValue> {
    crate::evaluate::random_integer_hex(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute `base^exponent mod modulus`, padded to the modulus width.
#[wasm_bindgen(js_name = modPowHex)]
pub fn mod_pow_hex_js(base: &str, exponent: &str, modulus: &str) -> Result<String, JsValue> {
    crate::evaluate::mod_pow_hex(base, exponent, modulus)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Re-pad a hex value. With `strict`, shrinking the width is an error.
#[wasm_bindgen(js_name = padHex)]
pub fn pad_hex_js(value: &str, length: usize, strict: bool) -> Result<String, JsValue> {
    let mode = if strict { PadMode::Strict } else { PadMode::Lenient };
    crate::evaluate::pad_hex(value, length, mode).map_err(|e| JsValue::from_str(&e.to_string()))
}
