// m24sr/src/protocol/response.rs

//! Parsing of CRC-closed response frames.

use crate::constants::SW_SUCCESS;
use crate::protocol::crc;
use crate::types::Pcb;
use crate::{Error, Result};

/// A parsed response frame: `[PCB, payload.., SW1, SW2, CRC0, CRC1]`.
///
/// Parsing verifies the trailing CRC; callers that want the raw bytes of an
/// exchange use [`crate::tag::NfcTag::read_frame`] directly and skip this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    /// Protocol control byte echoed (toggled) by the tag.
    pub pcb: Pcb,
    /// Response payload; empty for select exchanges.
    pub payload: Vec<u8>,
    /// First status byte.
    pub sw1: u8,
    /// Second status byte.
    pub sw2: u8,
}

impl ApduResponse {
    /// Parse a raw response frame, verifying its CRC.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        // PCB + SW(2) + CRC(2) is the smallest complete response.
        if raw.len() < 5 {
            return Err(Error::ShortResponse {
                expected: 5,
                actual: raw.len(),
            });
        }

        crc::verify(raw)?;

        let pcb = Pcb::try_from(raw[0])?;
        let body_end = raw.len() - 4; // strip SW + CRC
        Ok(Self {
            pcb,
            payload: raw[1..body_end].to_vec(),
            sw1: raw[body_end],
            sw2: raw[body_end + 1],
        })
    }

    /// The status word as a single 16-bit value (`0x9000` on success).
    pub fn status(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }

    /// Return the payload if the tag reported success, otherwise surface
    /// the status word as an error.
    pub fn require_success(&self) -> Result<&[u8]> {
        if self.status() == SW_SUCCESS {
            Ok(&self.payload)
        } else {
            Err(Error::Status {
                sw1: self.sw1,
                sw2: self.sw2,
            })
        }
    }
}
