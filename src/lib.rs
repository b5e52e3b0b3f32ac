//! SRP Integer Library
//!
//! Fixed-width hex integers used as the numeric substrate for SRP
//! (Secure Remote Password), including:
//! - **integer**: `SrpInteger`, an immutable big integer with a hex width
//!   that follows "the modulus defines the width"
//! - **evaluate**: JSON operation surface used by the platform bindings
//! - **random**: Secure random hex source
//! - **hex**: Zero-padding and hex helpers
//!
//! Each platform (browser, iOS, Android, .NET) calls this library with hex
//! strings and receives zero-padded hex strings sized for the wire.
//!
//! # Example
//! ```
//! use srp_integer::SrpInteger;
//!
//! let m = SrpInteger::from_hex("000f").unwrap();
//! let a = SrpInteger::from_hex("14").unwrap();
//!
//! // Reduction takes the width of the modulus
//! assert_eq!(a.modulo(&m).unwrap().to_hex().unwrap(), "0005");
//!
//! // Intermediates have no width until reduced or padded
//! let sum = a.add(&m);
//! assert!(sum.to_hex().is_err());
//! assert_eq!(sum.pad(4).to_hex().unwrap(), "0023");
//! ```

pub mod error;
pub mod evaluate;
pub mod hex;
pub mod integer;
pub mod random;

pub use error::{SrpIntegerError, SrpIntegerResult};
pub use evaluate::{
    evaluate, evaluate_json, mod_pow_hex, pad_hex, random_integer_hex, IntegerOp,
    IntegerOpOutput,
};
pub use integer::{PadMode, SrpInteger};
pub use random::random_hex;

/// Get the version of the srp-integer library.
pub fn get_core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// WASM bindings
#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

// C FFI exports for .NET P/Invoke
#[cfg(feature = "ffi")]
pub mod ffi;

// UniFFI bindings for Swift/Kotlin
#[cfg(feature = "uniffi")]
pub mod uniffi_api;

#[cfg(feature = "uniffi")]
pub use uniffi_api::*;

// UniFFI scaffolding - generates the FFI glue code
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
