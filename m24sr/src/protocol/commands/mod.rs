// m24sr/src/protocol/commands/mod.rs

//! Command frame builders for the five tag operations.

pub mod read;
pub mod select;
pub mod session;

pub use read::encode_read_binary;
pub use select::{encode_select_application, encode_select_file};
pub use session::{encode_deselect, encode_kill_rf};

use crate::constants::{READ_RESPONSE_OVERHEAD, SELECT_RESPONSE_LEN};
use crate::types::{FileId, Pcb};

/// High-level Command enum. New commands should be added here and their
/// per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Kill any RF session and claim the I2C session (bare `0x52`).
    KillRfSelectI2c,
    /// Select the NFC Type 4 Tag application by its fixed AID.
    SelectApplication {
        /// Protocol control byte for this exchange.
        pcb: Pcb,
    },
    /// Select a logical file by 16-bit identifier.
    SelectFile {
        /// Protocol control byte for this exchange.
        pcb: Pcb,
        /// Identifier of the file to select.
        file: FileId,
    },
    /// Read a binary range from the currently selected file.
    ReadBinary {
        /// Protocol control byte for this exchange.
        pcb: Pcb,
        /// Byte offset into the file.
        offset: u16,
        /// Number of payload bytes to read.
        length: u8,
    },
    /// Release the I2C session so RF can resume (bare `0xC2`).
    Deselect,
}

impl Command {
    /// Encode the command frame, without the trailing CRC.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::KillRfSelectI2c => encode_kill_rf(),
            Self::SelectApplication { pcb } => encode_select_application(*pcb),
            Self::SelectFile { pcb, file } => encode_select_file(*pcb, *file),
            Self::ReadBinary {
                pcb,
                offset,
                length,
            } => encode_read_binary(*pcb, *offset, *length),
            Self::Deselect => encode_deselect(),
        }
    }

    /// Whether the frame is closed with a CRC on the wire. Only the kill-RF
    /// command goes out bare.
    pub fn carries_crc(&self) -> bool {
        !matches!(self, Self::KillRfSelectI2c)
    }

    /// Number of response bytes the driver requests from the transport
    /// after sending this command. Zero means no read is issued at all
    /// (kill-RF) or a zero-length read is issued (deselect).
    pub fn expected_response_len(&self) -> usize {
        match self {
            Self::KillRfSelectI2c | Self::Deselect => 0,
            Self::SelectApplication { .. } | Self::SelectFile { .. } => SELECT_RESPONSE_LEN,
            Self::ReadBinary { length, .. } => *length as usize + READ_RESPONSE_OVERHEAD,
        }
    }
}
