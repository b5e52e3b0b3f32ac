//! Secure random hex source.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::SrpIntegerResult;
use crate::hex::bytes_to_hex;

/// Generate `bytes` cryptographically secure random bytes as lowercase hex.
///
/// The result is always `2 * bytes` characters long. Failures of the OS
/// random source are returned as-is, never retried. A byte count that cannot
/// be reserved fails with [`SrpIntegerError::Allocation`](crate::SrpIntegerError::Allocation).
pub fn random_hex(bytes: usize) -> SrpIntegerResult<String> {
    log::debug!("drawing {} random bytes", bytes);

    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)?;
    buf.resize(bytes, 0u8);
    OsRng.try_fill_bytes(&mut buf)?;
    Ok(bytes_to_hex(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_hex_length() {
        assert_eq!(random_hex(4).unwrap().len(), 8);
        assert_eq!(random_hex(32).unwrap().len(), 64);
        assert_eq!(random_hex(0).unwrap(), "");
    }

    #[test]
    fn test_random_hex_unreservable_count() {
        assert!(matches!(
            random_hex(usize::MAX),
            Err(crate::error::SrpIntegerError::Allocation(_))
        ));
    }

    #[test]
    fn test_random_hex_is_lowercase_hex() {
        let hex = random_hex(64).unwrap();
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_hex_differs() {
        // 32 bytes colliding would mean the source is broken
        assert_ne!(random_hex(32).unwrap(), random_hex(32).unwrap());
    }
}
