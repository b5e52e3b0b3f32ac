//! Fixed-width hex integer used as the numeric substrate for SRP.
//!
//! An [`SrpInteger`] pairs an arbitrary-precision value with an optional hex
//! width: the number of hex digits it is zero-padded to when serialized.
//!
//! # Width rules
//! - `from_hex`: width is the input length
//! - `from_decimal`: width is the length of the minimal hex encoding
//! - `random_integer(n)`: width is `2 * n`
//! - `add`, `multiply`: width is dropped (intermediates, not wire fields)
//! - `subtract`, `xor`: width of the left operand
//! - `modulo`, `mod_pow`: width of the modulus
//!
//! A value without width cannot be rendered with [`SrpInteger::to_hex`] until
//! it is reduced or explicitly padded.

mod serde_impl;

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;
use std::str::FromStr;

use crate::error::{SrpIntegerError, SrpIntegerResult};
use crate::hex::{pad_start, validate_digits};
use crate::random::random_hex;

/// How [`SrpInteger::pad_with`] treats a request to shrink the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum PadMode {
    /// Ignore the request and keep the current width
    #[default]
    Lenient,
    /// Fail with [`SrpIntegerError::PadShrink`]
    Strict,
}

/// Immutable integer with an optional hex width.
///
/// Equality and hashing only look at the value; `from_hex("03")` equals
/// `from_hex("0003")`.
#[derive(Clone)]
pub struct SrpInteger {
    value: BigInt,
    hex_length: Option<usize>,
}

impl SrpInteger {
    /// Zero with unspecified width.
    pub const ZERO: SrpInteger = SrpInteger {
        value: BigInt::ZERO,
        hex_length: None,
    };

    fn new(value: BigInt, hex_length: Option<usize>) -> Self {
        Self { value, hex_length }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════════

    /// Parse a hex string (no `0x` prefix, either case).
    ///
    /// The width is the exact length of `input`, so leading zeros are kept.
    /// An empty string is zero with width 0.
    pub fn from_hex(input: &str) -> SrpIntegerResult<Self> {
        let value = parse_digits(input, 16)?;
        Ok(Self::new(value, Some(input.len())))
    }

    /// Parse a decimal string.
    ///
    /// The width comes from the value's own minimal hex encoding, not from
    /// the length of `input`.
    pub fn from_decimal(input: &str) -> SrpIntegerResult<Self> {
        let value = parse_digits(input, 10)?;
        Self::from_hex(&value.to_str_radix(16))
    }

    /// Random value drawn from `bytes` secure random bytes, width `2 * bytes`.
    pub fn random_integer(bytes: usize) -> SrpIntegerResult<Self> {
        Self::from_hex(&random_hex(bytes)?)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Arithmetic
    // ═══════════════════════════════════════════════════════════════════════════

    /// `self + other`, width dropped.
    pub fn add(&self, other: &SrpInteger) -> SrpInteger {
        Self::new(&self.value + &other.value, None)
    }

    /// `self - other`, keeping the width of `self`. The result may be negative.
    pub fn subtract(&self, other: &SrpInteger) -> SrpInteger {
        Self::new(&self.value - &other.value, self.hex_length)
    }

    /// `self * other`, width dropped.
    pub fn multiply(&self, other: &SrpInteger) -> SrpInteger {
        Self::new(&self.value * &other.value, None)
    }

    /// `self mod m` in `[0, m)`, taking the width of `m`.
    pub fn modulo(&self, m: &SrpInteger) -> SrpIntegerResult<SrpInteger> {
        m.check_modulus()?;

        let mut rem = &self.value % &m.value;
        if rem.sign() == Sign::Minus {
            rem += &m.value;
        }
        Ok(Self::new(rem, m.hex_length))
    }

    /// `self^exponent mod m` in `[0, m)`, taking the width of `m`.
    pub fn mod_pow(&self, exponent: &SrpInteger, m: &SrpInteger) -> SrpIntegerResult<SrpInteger> {
        m.check_modulus()?;
        if exponent.value.sign() == Sign::Minus {
            return Err(SrpIntegerError::NegativeExponent);
        }

        Ok(Self::new(
            self.value.modpow(&exponent.value, &m.value),
            m.hex_length,
        ))
    }

    /// Bitwise xor, keeping the width of `self`.
    pub fn xor(&self, other: &SrpInteger) -> SrpInteger {
        Self::new(&self.value ^ &other.value, self.hex_length)
    }

    /// Value comparison, ignoring width.
    pub fn equals(&self, other: &SrpInteger) -> bool {
        self.value == other.value
    }

    // `BigInt::modpow` and `%` panic on a zero modulus.
    fn check_modulus(&self) -> SrpIntegerResult<()> {
        if self.value.sign() != Sign::Plus {
            return Err(SrpIntegerError::InvalidModulus(format!(
                "modulus must be positive, got {}",
                self.value
            )));
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Width and serialization
    // ═══════════════════════════════════════════════════════════════════════════

    /// Widen to `hex_length` digits.
    ///
    /// A request narrower than the current width is ignored and the value is
    /// returned unchanged. Use [`SrpInteger::pad_with`] with
    /// [`PadMode::Strict`] to turn that into an error.
    pub fn pad(&self, hex_length: usize) -> SrpInteger {
        match self.hex_length {
            Some(current) if hex_length < current => {
                log::warn!(
                    "ignoring pad to {} hex digits on value of width {}",
                    hex_length,
                    current
                );
                self.clone()
            }
            _ => Self::new(self.value.clone(), Some(hex_length)),
        }
    }

    /// [`SrpInteger::pad`] with an explicit policy for shrink requests.
    pub fn pad_with(&self, hex_length: usize, mode: PadMode) -> SrpIntegerResult<SrpInteger> {
        match (mode, self.hex_length) {
            (PadMode::Strict, Some(current)) if hex_length < current => {
                Err(SrpIntegerError::PadShrink {
                    current,
                    requested: hex_length,
                })
            }
            _ => Ok(self.pad(hex_length)),
        }
    }

    /// Lowercase hex, left-padded with zeros to exactly the width.
    ///
    /// A value wider than its declared width is rendered in full.
    pub fn to_hex(&self) -> SrpIntegerResult<String> {
        let hex_length = self.hex_length.ok_or(SrpIntegerError::UnspecifiedWidth)?;
        if self.value.sign() == Sign::Minus {
            return Err(SrpIntegerError::NegativeValue);
        }

        let hex = self.value.to_str_radix(16);
        if hex.len() > hex_length {
            log::warn!(
                "value needs {} hex digits but width is {}",
                hex.len(),
                hex_length
            );
        }
        pad_start(&hex, hex_length, '0')
    }

    /// Big-endian bytes, left-padded to `ceil(width / 2)` bytes.
    ///
    /// Used when a fixed-width field is fed into a hash.
    pub fn to_bytes_be(&self) -> SrpIntegerResult<Vec<u8>> {
        let hex_length = self.hex_length.ok_or(SrpIntegerError::UnspecifiedWidth)?;
        let (sign, bytes) = self.value.to_bytes_be();
        if sign == Sign::Minus {
            return Err(SrpIntegerError::NegativeValue);
        }

        // to_bytes_be yields [0] for zero
        let bytes = if sign == Sign::NoSign { Vec::new() } else { bytes };
        let target_len = hex_length.div_ceil(2);
        if bytes.len() >= target_len {
            return Ok(bytes);
        }

        let mut padded = Vec::new();
        padded.try_reserve_exact(target_len)?;
        padded.resize(target_len - bytes.len(), 0u8);
        padded.extend(bytes);
        Ok(padded)
    }

    /// Declared hex width, if any.
    pub fn length(&self) -> Option<usize> {
        self.hex_length
    }

    /// True when the value is zero, whatever the width.
    pub fn is_zero(&self) -> bool {
        self.value.sign() == Sign::NoSign
    }

    /// Borrow the underlying value.
    pub fn as_bigint(&self) -> &BigInt {
        &self.value
    }
}

// Empty input parses as zero.
fn parse_digits(input: &str, radix: u32) -> SrpIntegerResult<BigInt> {
    validate_digits(input, radix)?;
    if input.is_empty() {
        return Ok(BigInt::ZERO);
    }

    BigInt::parse_bytes(input.as_bytes(), radix).ok_or_else(|| {
        SrpIntegerError::Parse(format!("invalid base {} string: {}", radix, input))
    })
}

impl PartialEq for SrpInteger {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for SrpInteger {}

impl Hash for SrpInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Decimal rendering, ignoring the width.
impl fmt::Display for SrpInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for SrpInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.value.to_str_radix(16);
        if hex.len() > 16 {
            write!(f, "<SrpInteger {}...>", &hex[..16])
        } else {
            write!(f, "<SrpInteger {}>", hex)
        }
    }
}

impl FromStr for SrpInteger {
    type Err = SrpIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<'a> ops::Add<&'a SrpInteger> for &'a SrpInteger {
    type Output = SrpInteger;

    fn add(self, rhs: &'a SrpInteger) -> SrpInteger {
        SrpInteger::add(self, rhs)
    }
}

impl<'a> ops::Sub<&'a SrpInteger> for &'a SrpInteger {
    type Output = SrpInteger;

    fn sub(self, rhs: &'a SrpInteger) -> SrpInteger {
        self.subtract(rhs)
    }
}

impl<'a> ops::Mul<&'a SrpInteger> for &'a SrpInteger {
    type Output = SrpInteger;

    fn mul(self, rhs: &'a SrpInteger) -> SrpInteger {
        self.multiply(rhs)
    }
}

impl<'a> ops::BitXor<&'a SrpInteger> for &'a SrpInteger {
    type Output = SrpInteger;

    fn bitxor(self, rhs: &'a SrpInteger) -> SrpInteger {
        SrpInteger::xor(self, rhs)
    }
}
