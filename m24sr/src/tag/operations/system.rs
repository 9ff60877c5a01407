// m24sr/src/tag/operations/system.rs

use crate::tag::operations::{read_binary_checked, select_file_checked};
use crate::tag::NfcTag;
use crate::transport::I2cTransport;
use crate::types::{FileId, Pcb, SystemFile, SYSTEM_FILE_LEN};
use crate::{Error, Result};

/// Read and parse the system file (identifier 0xE101).
///
/// Probes the 2-byte length field first, the way the vendor sequence does,
/// then reads the whole documented layout. Assumes the application is
/// selected; leaves the system file selected.
pub fn read_system_file<T: I2cTransport>(
    tag: &mut NfcTag<T>,
    pcb: &mut Pcb,
) -> Result<SystemFile> {
    select_file_checked(tag, FileId::SYSTEM, pcb)?;

    let len_field = read_binary_checked(tag, 0x0000, 2, pcb)?;
    let file_len = u16::from_be_bytes([len_field[0], len_field[1]]) as usize;
    if file_len < SYSTEM_FILE_LEN {
        return Err(Error::FrameFormat(format!(
            "system file reports length {file_len:#06x}, expected at least {SYSTEM_FILE_LEN:#06x}"
        )));
    }

    let raw = read_binary_checked(tag, 0x0000, SYSTEM_FILE_LEN as u8, pcb)?;
    SystemFile::try_from(&raw[..])
}

/// Read just the memory-size field of the system file.
pub fn read_memory_size<T: I2cTransport>(tag: &mut NfcTag<T>, pcb: &mut Pcb) -> Result<u16> {
    read_system_file(tag, pcb).map(|sys| sys.memory_size)
}
