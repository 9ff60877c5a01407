// m24sr/src/error.rs

//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by the transport layer and the protocol driver.
///
/// Transport failures (`Transport`, `I2c`) abort the in-progress operation
/// immediately; there is no retry at this layer. The remaining variants are
/// protocol-level: malformed or short responses, checksum disagreement, and
/// tag-side status words other than `90 00`.
#[derive(Error, Debug)]
pub enum Error {
    /// The bus reported a non-zero status for a raw write or read.
    #[error("i2c transport error: status={status}")]
    Transport {
        /// Raw status code as reported by the bus binding.
        status: i32,
    },

    /// Failure reported by the Linux i2c-dev binding. The binding is an
    /// optional dependency so the protocol core builds on non-Linux hosts.
    #[cfg(feature = "linux")]
    #[error("i2c device error: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),

    /// The response was shorter than the frame layout requires.
    #[error("response too short: expected {expected} bytes, got {actual}")]
    ShortResponse {
        /// Minimum byte count the frame layout requires.
        expected: usize,
        /// Byte count actually received.
        actual: usize,
    },

    /// The trailing CRC of a response frame did not match the recomputed one.
    #[error("crc mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch {
        /// CRC recomputed over the frame body.
        expected: u16,
        /// CRC carried by the frame.
        actual: u16,
    },

    /// A frame field carried a value the protocol does not allow.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The tag answered with a status word other than `90 00`.
    #[error("tag status: sw=({sw1:#04x}, {sw2:#04x})")]
    Status {
        /// First status byte.
        sw1: u8,
        /// Second status byte.
        sw2: u8,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
