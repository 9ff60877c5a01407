// m24sr/src/types.rs

//! Plain data types used by the frame builders and the driver.

use crate::Error;
use std::convert::TryFrom;

/// FileId - 16-bit identifier of a logical file on the tag (Newtype Pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId(u16);

impl FileId {
    /// System file: length, I2C configuration, UID, memory size.
    pub const SYSTEM: Self = Self(0xE101);
    /// Capability container file.
    pub const CC: Self = Self(0xE103);
    /// NDEF file holding the user payload.
    pub const NDEF: Self = Self(0x0001);

    /// Wrap an arbitrary 16-bit identifier.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Big-endian split as it appears on the wire (high byte first).
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Pcb - protocol control byte (Newtype Pattern).
///
/// Either `0x02` or `0x03`; bit 0 acts as a 1-bit exchange sequence number
/// that the tag toggles on every message. The driver does not enforce
/// alternation; callers own the sequence and may use [`Pcb::toggled`] to
/// advance it between exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pcb(u8);

impl Pcb {
    /// Sequence bit clear (0x02).
    pub const SEQ_0: Self = Self(0x02);
    /// Sequence bit set (0x03).
    pub const SEQ_1: Self = Self(0x03);

    /// Raw wire byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// The PCB with the sequence bit flipped.
    pub fn toggled(&self) -> Self {
        Self(self.0 ^ 0x01)
    }

    /// Flip the sequence bit in place and return the previous value.
    /// Convenience for multi-exchange sequences: use the returned PCB for
    /// the current frame, leave `self` ready for the next one.
    pub fn advance(&mut self) -> Self {
        let current = *self;
        *self = self.toggled();
        current
    }
}

impl Default for Pcb {
    fn default() -> Self {
        // First exchange after claiming the I2C session uses 0x02.
        Self::SEQ_0
    }
}

impl TryFrom<u8> for Pcb {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x02 | 0x03 => Ok(Self(byte)),
            other => Err(Error::FrameFormat(format!(
                "invalid PCB byte {other:#04x}"
            ))),
        }
    }
}

/// SystemFile - parsed layout of the 0x12-byte system file (file 0xE101).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemFile {
    /// Length field at offset 0; 0x0012 for this family.
    pub length: u16,
    /// I2C protection byte.
    pub i2c_protect: u8,
    /// I2C watchdog byte.
    pub i2c_watchdog: u8,
    /// GPO configuration byte.
    pub gpo: u8,
    /// RF enable flag (bit 0 of the RF enable byte).
    pub rf_enabled: bool,
    /// NDEF file number.
    pub ndef_file_number: u8,
    /// 7-byte unique identifier.
    pub uid: [u8; 7],
    /// EEPROM size in bytes minus one (0x1FFF for the 64-Kbit part).
    pub memory_size: u16,
    /// Product code (0x84 or 0x8C).
    pub product_code: u8,
}

/// Byte length of the system file.
pub const SYSTEM_FILE_LEN: usize = 0x12;

impl TryFrom<&[u8]> for SystemFile {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < SYSTEM_FILE_LEN {
            return Err(Error::ShortResponse {
                expected: SYSTEM_FILE_LEN,
                actual: bytes.len(),
            });
        }

        let mut uid = [0u8; 7];
        uid.copy_from_slice(&bytes[0x08..0x0F]);

        Ok(Self {
            length: u16::from_be_bytes([bytes[0x00], bytes[0x01]]),
            i2c_protect: bytes[0x02],
            i2c_watchdog: bytes[0x03],
            gpo: bytes[0x04],
            rf_enabled: bytes[0x06] & 0x01 != 0,
            ndef_file_number: bytes[0x07],
            uid,
            memory_size: u16::from_be_bytes([bytes[0x0F], bytes[0x10]]),
            product_code: bytes[0x11],
        })
    }
}
