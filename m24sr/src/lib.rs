// m24sr/src/lib.rs

//! m24sr
//!
//! Pure Rust protocol driver for ST M24SR NFC Type 4 EEPROM tags on an I2C bus.
//!
//! The crate is split into a leaf CRC-16 engine ([`protocol::crc`]), APDU
//! frame builders ([`protocol::commands`]), and the [`tag::NfcTag`] driver
//! that sequences the tag operations over an injected [`transport::I2cTransport`].
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
