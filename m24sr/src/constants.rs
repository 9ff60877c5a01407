// m24sr/src/constants.rs
//! Common protocol constants used across the crate

/// 7-bit I2C bus address of the M24SR family.
pub const I2C_ADDRESS_7BIT: u8 = 0x56;

/// 8-bit write form of the bus address (0x56 << 1); the read form is
/// 0xAD, with the R/W bit set.
pub const I2C_ADDRESS_8BIT_WRITE: u8 = 0xAC;

/// Bare command byte: kill any RF session and claim the I2C session.
pub const CMD_KILL_RF: u8 = 0x52;

/// Bare command byte: release the I2C session so RF can resume.
pub const CMD_DESELECT: u8 = 0xC2;

/// APDU class byte; always zero for this tag family.
pub const APDU_CLA: u8 = 0x00;

/// APDU instruction: select (application or file).
pub const INS_SELECT: u8 = 0xA4;

/// APDU instruction: read binary from the selected file.
pub const INS_READ_BINARY: u8 = 0xB0;

/// Application identifier of the NFC Type 4 Tag application.
pub const NFC_T4_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];

/// Response length of a select exchange: PCB + SW1 + SW2 + CRC(2).
pub const SELECT_RESPONSE_LEN: usize = 5;

/// Framing overhead of a read-binary response on top of the payload:
/// PCB + SW1 + SW2 + CRC(2).
pub const READ_RESPONSE_OVERHEAD: usize = 5;

/// Status word reported by the tag on success.
pub const SW_SUCCESS: u16 = 0x9000;
