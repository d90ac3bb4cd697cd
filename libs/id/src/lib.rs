//! # s10-id
//!
//! UPU S10 tracking identifiers: check digit, parsing, validation, and
//! generation.
//!
//! ## Identifier Format
//!
//! An S10 identifier is 13 characters with no separators:
//!
//! ```text
//! RA 00000010 2 US
//! │  │        │ └─ country code (2 letters)
//! │  │        └─── check digit (1 digit)
//! │  └──────────── serial number (8 digits, zero padded)
//! └─────────────── service indicator (2 letters)
//! ```
//!
//! ## Design Principles
//!
//! - Identifiers are immutable `Copy` values with strict parsing
//! - Parsing checks layout only; [`S10Identifier::verify`] checks the digit
//! - Randomness is injected through [`DigitSource`] so output can be scripted
//! - Serial capacity is enforced: generation past `99999999` is an error
//!
//! ## Example
//!
//! ```
//! use s10_id::{Engine, EngineConfig, ServiceIndicator};
//!
//! let config = EngineConfig::default().with_indicator(ServiceIndicator::REGISTERED);
//! let mut engine = Engine::new(config)?;
//! let ids = engine.generate_sequential(10, 1)?;
//! assert_eq!(ids[0].to_string(), "RA000000102US");
//! assert_eq!(s10_id::validate("RA000000102US"), Ok(true));
//! # Ok::<(), s10_id::S10Error>(())
//! ```

mod checksum;
mod engine;
mod error;
mod identifier;
mod macros;
mod serial;
mod source;
mod types;

pub use checksum::{check_digit, check_digit_for, CheckDigit, SERIAL_LEN, WEIGHTS};
pub use engine::{Engine, EngineConfig};
pub use error::S10Error;
pub use identifier::{validate, S10Identifier, Verdict, S10_LEN};
pub use serial::SerialNumber;
pub use source::{seeded, DigitSource};
pub use types::*;
