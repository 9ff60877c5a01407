// m24sr/src/tag/operations/ndef.rs

use log::debug;

use crate::tag::operations::{read_binary_checked, select_file_checked};
use crate::tag::NfcTag;
use crate::transport::I2cTransport;
use crate::types::{FileId, Pcb};
use crate::{Error, Result};

/// Largest read-binary payload requested per exchange. The length field of
/// the command is a single byte, so longer messages are read in chunks.
const MAX_READ_LEN: u8 = 0xF0;

/// Read the NDEF message from the tag.
///
/// Selects the NDEF file, probes the 2-byte message length at offset 0,
/// then reads the message starting at offset 2, chunking as needed. Assumes
/// the caller holds the I2C session with the application selected (see
/// [`crate::tag::operations::start_session`]); the file stays selected
/// afterwards and no deselect is issued.
pub fn read_ndef<T: I2cTransport>(tag: &mut NfcTag<T>, pcb: &mut Pcb) -> Result<Vec<u8>> {
    select_file_checked(tag, FileId::NDEF, pcb)?;

    let len_field = read_binary_checked(tag, 0x0000, 2, pcb)?;
    let message_len = u16::from_be_bytes([len_field[0], len_field[1]]);
    debug!("ndef message length: {message_len}");

    // The message body starts at offset 2 and read-binary offsets are
    // 16-bit, so the last byte must sit at or below 0xFFFF. The length
    // field is tag-supplied; reject anything that cannot fit.
    if u32::from(message_len) > 0x1_0000 - 2 {
        return Err(Error::FrameFormat(format!(
            "ndef length field {message_len:#06x} exceeds the file address space"
        )));
    }

    let mut message = Vec::with_capacity(message_len as usize);
    // Widened cursor: the offset of the byte after the final chunk can be
    // 0x10000, one past what a u16 holds.
    let mut offset: u32 = 0x0002;
    let mut remaining = message_len;
    while remaining > 0 {
        let chunk = remaining.min(u16::from(MAX_READ_LEN)) as u8;
        let payload = read_binary_checked(tag, offset as u16, chunk, pcb)?;
        message.extend_from_slice(&payload);
        offset += u32::from(chunk);
        remaining -= u16::from(chunk);
    }
    Ok(message)
}
