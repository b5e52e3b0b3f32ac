//! Hex string helpers shared by the integer type and the random source.

use crate::error::{SrpIntegerError, SrpIntegerResult};

/// Left-pad `input` with `fill` until it is `target_len` characters long.
///
/// Returns the input unchanged when it is already at or above `target_len`.
/// Fails with [`SrpIntegerError::Allocation`] instead of aborting when the
/// padded string cannot be reserved.
pub fn pad_start(input: &str, target_len: usize, fill: char) -> SrpIntegerResult<String> {
    let len = input.chars().count();
    if len >= target_len {
        return Ok(input.to_string());
    }

    let fill_len = target_len - len;
    let mut padded = String::new();
    let capacity = fill_len
        .saturating_mul(fill.len_utf8())
        .saturating_add(input.len());
    padded.try_reserve_exact(capacity)?;
    padded.extend(std::iter::repeat(fill).take(fill_len));
    padded.push_str(input);
    Ok(padded)
}

/// Convert bytes to lowercase hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

/// Reject anything outside the digits of `radix`. Empty input is accepted.
///
/// `num-bigint` tolerates `_` separators and a sign prefix, so digits are
/// checked here before handing the string over.
pub(crate) fn validate_digits(input: &str, radix: u32) -> SrpIntegerResult<()> {
    match input.char_indices().find(|(_, c)| !c.is_digit(radix)) {
        Some((i, c)) => Err(SrpIntegerError::Parse(format!(
            "invalid base {} digit {:?} at position {}",
            radix, c, i
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_start() {
        assert_eq!(pad_start("ff", 4, '0').unwrap(), "00ff");
        assert_eq!(pad_start("ff", 2, '0').unwrap(), "ff");
        assert_eq!(pad_start("abcdef", 2, '0').unwrap(), "abcdef");
        assert_eq!(pad_start("", 3, '0').unwrap(), "000");
    }

    #[test]
    fn test_pad_start_unreservable_length() {
        assert!(matches!(
            pad_start("ff", usize::MAX, '0'),
            Err(SrpIntegerError::Allocation(_))
        ));
    }

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0x00, 0x01, 0x0A, 0xFF, 0x10]), "00010aff10");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_validate_digits() {
        assert!(validate_digits("00ff", 16).is_ok());
        assert!(validate_digits("DEADbeef", 16).is_ok());
        assert!(validate_digits("1234567890", 10).is_ok());

        assert!(validate_digits("", 16).is_ok());
        assert!(validate_digits("", 10).is_ok());
        assert!(validate_digits("0x10", 16).is_err());
        assert!(validate_digits("ff_ff", 16).is_err());
        assert!(validate_digits("-1", 10).is_err());
        assert!(validate_digits("12a", 10).is_err());
        assert!(validate_digits(" ff", 16).is_err());
    }
}
