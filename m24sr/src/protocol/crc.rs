// m24sr/src/protocol/crc.rs

//! CRC-16 engine for the M24SR I2C frames.
//!
//! The tag computes its frame check sequence as defined in ISO/IEC 13239
//! with an initial register of 0x6363 and no inversion of the final
//! register (ST application note AN4433). The CRC covers every byte of the
//! frame except the device select and the CRC itself, and is transmitted
//! low byte first.

use crate::{Error, Result};

/// Initial register content mandated by AN4433.
pub const CRC_SEED: u16 = 0x6363;

/// Stateful frame check sequence accumulator.
///
/// One instance covers exactly one frame: seed with [`Crc16::new`] (or reset
/// an existing instance with [`Crc16::start`]), fold in each frame byte with
/// [`Crc16::update`], then extract the two wire bytes with
/// [`Crc16::finalize`]. `finalize` does not reset the register.
#[derive(Debug, Clone)]
pub struct Crc16 {
    fcs: u16,
}

impl Crc16 {
    /// A freshly seeded register.
    pub fn new() -> Self {
        Self { fcs: CRC_SEED }
    }

    /// Reset the register to the seed for a new frame computation.
    pub fn start(&mut self) {
        self.fcs = CRC_SEED;
    }

    /// Fold one frame byte into the register and return the updated value.
    pub fn update(&mut self, byte: u8) -> u16 {
        let mut x = byte ^ (self.fcs as u8);
        x ^= x << 4;
        self.fcs = (self.fcs >> 8)
            ^ (u16::from(x) << 8)
            ^ (u16::from(x) << 3)
            ^ (u16::from(x) >> 4);
        self.fcs
    }

    /// Current register value.
    pub fn value(&self) -> u16 {
        self.fcs
    }

    /// Extract the register as wire bytes, low byte first.
    pub fn finalize(&self) -> [u8; 2] {
        self.fcs.to_le_bytes()
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the CRC over a whole frame in one call, returning the two wire
/// bytes (low first). This is the entry point most callers need.
pub fn compute(frame: &[u8]) -> [u8; 2] {
    let mut crc = Crc16::new();
    for &byte in frame {
        crc.update(byte);
    }
    crc.finalize()
}

/// Append the CRC of the buffer's current contents to the buffer.
pub fn append(frame: &mut Vec<u8>) {
    let crc = compute(frame);
    frame.extend_from_slice(&crc);
}

/// Verify the trailing 2-byte CRC of a received frame against a CRC
/// recomputed over the preceding bytes.
pub fn verify(frame: &[u8]) -> Result<()> {
    // Smallest checked frame is one body byte plus the CRC.
    if frame.len() < 3 {
        return Err(Error::ShortResponse {
            expected: 3,
            actual: frame.len(),
        });
    }

    let (body, trailer) = frame.split_at(frame.len() - 2);
    let expected = compute(body);
    if trailer != expected {
        return Err(Error::ChecksumMismatch {
            expected: u16::from_le_bytes(expected),
            actual: u16::from_le_bytes([trailer[0], trailer[1]]),
        });
    }
    Ok(())
}
