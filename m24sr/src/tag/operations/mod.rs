// m24sr/src/tag/operations/mod.rs

//! Multi-exchange convenience sequences built on the primitive operations.
//!
//! These helpers parse responses, check status words, and advance the
//! caller-owned [`Pcb`] after every exchange so the 1-bit sequence stays in
//! step with the tag. The primitives in [`crate::tag::NfcTag`] stay raw.

pub mod ndef;
pub mod system;

pub use ndef::read_ndef;
pub use system::{read_memory_size, read_system_file};

use crate::protocol::ApduResponse;
use crate::tag::NfcTag;
use crate::transport::I2cTransport;
use crate::types::Pcb;
use crate::Result;

/// Claim the I2C session and select the NFC Type 4 Tag application.
///
/// Resets the caller's PCB sequence: the first CRC-closed exchange after a
/// kill-RF uses 0x02.
pub fn start_session<T: I2cTransport>(tag: &mut NfcTag<T>, pcb: &mut Pcb) -> Result<()> {
    tag.kill_rf_select_i2c()?;
    *pcb = Pcb::SEQ_0;
    let raw = tag.select_application(pcb.advance())?;
    ApduResponse::parse(&raw)?.require_success()?;
    Ok(())
}

/// Release the I2C session so RF access can resume.
pub fn end_session<T: I2cTransport>(tag: &mut NfcTag<T>) -> Result<()> {
    tag.deselect()
}

/// One checked exchange: select a file and require a success status word.
pub(crate) fn select_file_checked<T: I2cTransport>(
    tag: &mut NfcTag<T>,
    file: crate::types::FileId,
    pcb: &mut Pcb,
) -> Result<()> {
    let raw = tag.select_file(file, pcb.advance())?;
    ApduResponse::parse(&raw)?.require_success()?;
    Ok(())
}

/// One checked exchange: read a binary range and return its payload.
pub(crate) fn read_binary_checked<T: I2cTransport>(
    tag: &mut NfcTag<T>,
    offset: u16,
    length: u8,
    pcb: &mut Pcb,
) -> Result<Vec<u8>> {
    let raw = tag.read_binary(offset, length, pcb.advance())?;
    let resp = ApduResponse::parse(&raw)?;
    resp.require_success().map(<[u8]>::to_vec)
}
