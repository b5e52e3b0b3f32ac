//! JSON operation surface for platform bindings.
//!
//! Each request names one [`SrpInteger`] operation with its operands as hex
//! strings. Operand widths follow `from_hex`, so `"000f"` is a 4-digit value.
//! The result carries the hex form when the result has a width (and is
//! non-negative), and always carries the decimal form.
//!
//! # Example
//! ```ignore
//! let output = evaluate_json(r#"{"op": "mod", "value": "14", "modulus": "000f"}"#)?;
//! // {"success":true,"hex":"0005","decimal":"5","length":4}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SrpIntegerError, SrpIntegerResult};
use crate::integer::{PadMode, SrpInteger};

/// A single operation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum IntegerOp {
    FromHex { hex: String },
    FromDecimal { decimal: String },
    Random { bytes: usize },
    Add { a: String, b: String },
    Subtract { a: String, b: String },
    Multiply { a: String, b: String },
    #[serde(rename = "mod")]
    Modulo { value: String, modulus: String },
    ModPow {
        base: String,
        exponent: String,
        modulus: String,
    },
    Xor { a: String, b: String },
    Pad {
        value: String,
        length: usize,
        #[serde(default)]
        mode: PadMode,
    },
    Equals { a: String, b: String },
}

/// Result of an operation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerOpOutput {
    /// Whether the operation succeeded
    pub success: bool,
    /// Zero-padded hex, absent when the result has no width or is negative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Decimal value (absent for `equals`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal: Option<String>,
    /// Hex width of the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Comparison result for `equals`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<bool>,
}

impl IntegerOpOutput {
    fn from_value(value: &SrpInteger) -> SrpIntegerResult<Self> {
        let hex = match value.to_hex() {
            Ok(hex) => Some(hex),
            Err(SrpIntegerError::UnspecifiedWidth | SrpIntegerError::NegativeValue) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            success: true,
            hex,
            decimal: Some(value.to_string()),
            length: value.length(),
            equal: None,
        })
    }

    fn from_comparison(equal: bool) -> Self {
        Self {
            success: true,
            hex: None,
            decimal: None,
            length: None,
            equal: Some(equal),
        }
    }
}

/// Run a single operation.
pub fn evaluate(op: IntegerOp) -> SrpIntegerResult<IntegerOpOutput> {
    let parse = |s: &str| SrpInteger::from_hex(s);

    let value = match op {
        IntegerOp::FromHex { hex } => parse(&hex)?,
        IntegerOp::FromDecimal { decimal } => SrpInteger::from_decimal(&decimal)?,
        IntegerOp::Random { bytes } => SrpInteger::random_integer(bytes)?,
        IntegerOp::Add { a, b } => parse(&a)?.add(&parse(&b)?),
        IntegerOp::Subtract { a, b } => parse(&a)?.subtract(&parse(&b)?),
        IntegerOp::Multiply { a, b } => parse(&a)?.multiply(&parse(&b)?),
        IntegerOp::Modulo { value, modulus } => parse(&value)?.modulo(&parse(&modulus)?)?,
        IntegerOp::ModPow {
            base,
            exponent,
            modulus,
        } => parse(&base)?.mod_pow(&parse(&exponent)?, &parse(&modulus)?)?,
        IntegerOp::Xor { a, b } => parse(&a)?.xor(&parse(&b)?),
        IntegerOp::Pad {
            value,
            length,
            mode,
        } => parse(&value)?.pad_with(length, mode)?,
        IntegerOp::Equals { a, b } => {
            return Ok(IntegerOpOutput::from_comparison(
                parse(&a)?.equals(&parse(&b)?),
            ));
        }
    };

    IntegerOpOutput::from_value(&value)
}

/// Run a single operation using JSON strings.
///
/// Takes a JSON [`IntegerOp`] and returns a JSON [`IntegerOpOutput`].
pub fn evaluate_json(input_json: &str) -> SrpIntegerResult<String> {
    let op: IntegerOp = serde_json::from_str(input_json)?;
    let output = evaluate(op)?;
    let output_json = serde_json::to_string(&output)?;
    Ok(output_json)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Hex-string shortcuts
// ═══════════════════════════════════════════════════════════════════════════════

/// Random value of `bytes` bytes as hex (`2 * bytes` characters).
pub fn random_integer_hex(bytes: usize) -> SrpIntegerResult<String> {
    SrpInteger::random_integer(bytes)?.to_hex()
}

/// `base^exponent mod modulus`, padded to the width of `modulus`.
pub fn mod_pow_hex(base: &str, exponent: &str, modulus: &str) -> SrpIntegerResult<String> {
    let base = SrpInteger::from_hex(base)?;
    let exponent = SrpInteger::from_hex(exponent)?;
    let modulus = SrpInteger::from_hex(modulus)?;
    base.mod_pow(&exponent, &modulus)?.to_hex()
}

/// Re-pad a hex value to `length` digits.
pub fn pad_hex(value: &str, length: usize, mode: PadMode) -> SrpIntegerResult<String> {
    SrpInteger::from_hex(value)?.pad_with(length, mode)?.to_hex()
}
