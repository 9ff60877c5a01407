// m24sr/src/tag/mod.rs

//! The tag driver: sequences the five documented operations over a
//! transport.

use log::{debug, trace};

use crate::constants::I2C_ADDRESS_7BIT;
use crate::protocol::{crc, Command};
use crate::transport::I2cTransport;
use crate::types::{FileId, Pcb};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

pub mod operations;

/// Session handle for one M24SR tag: a bus address plus the transport.
///
/// The handle is stateless beyond the address. It does not track which file
/// is selected or enforce operation order; the tag firmware requires
/// kill-RF, select-application, select-file, read-binary, deselect in that
/// order, and an out-of-order operation surfaces as a tag-side status. PCB
/// alternation is likewise the caller's responsibility (see [`Pcb`]).
pub struct NfcTag<T: I2cTransport> {
    transport: T,
    address: u8,
}

impl<T: I2cTransport> NfcTag<T> {
    /// Bind a transport at the family's fixed 7-bit address (0x56).
    pub fn new(transport: T) -> Self {
        Self::with_address(transport, I2C_ADDRESS_7BIT)
    }

    /// Bind a transport at an explicit 7-bit address.
    pub fn with_address(transport: T, address: u8) -> Self {
        Self { transport, address }
    }

    /// The 7-bit bus address this handle talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back, consuming the handle.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send a frame, optionally closing it with its CRC-16.
    ///
    /// A transport error aborts the operation immediately; the driver never
    /// retries a frame.
    pub fn write_frame(&mut self, frame: &[u8], with_crc: bool) -> Result<()> {
        let mut buf = frame.to_vec();
        if with_crc {
            crc::append(&mut buf);
        }
        debug!(
            "i2c write [{:#04x}] {}",
            self.address,
            bytes_to_hex_spaced(&buf)
        );
        self.transport.write(self.address, &buf)
    }

    /// Read a response of `len` bytes, optionally verifying its trailing
    /// CRC against the engine.
    pub fn read_frame(&mut self, len: usize, check_crc: bool) -> Result<Vec<u8>> {
        let data = self.transport.read(self.address, len)?;
        trace!(
            "i2c read  [{:#04x}] {}",
            self.address,
            bytes_to_hex_spaced(&data)
        );
        if check_crc {
            crc::verify(&data)?;
        }
        Ok(data)
    }

    /// Issue one command: build the frame, send it, read back the expected
    /// number of response bytes. Response CRCs are not checked here; use
    /// [`crate::protocol::ApduResponse::parse`] on the result when
    /// verification is wanted.
    pub fn execute(&mut self, cmd: Command) -> Result<Vec<u8>> {
        self.write_frame(&cmd.encode(), cmd.carries_crc())?;
        self.read_frame(cmd.expected_response_len(), false)
    }

    /// Kill any RF session and claim the I2C session token. Write-only; the
    /// tag sends no response to this command.
    pub fn kill_rf_select_i2c(&mut self) -> Result<()> {
        self.write_frame(&Command::KillRfSelectI2c.encode(), false)
    }

    /// Select the NFC Type 4 Tag application. Returns the raw 5-byte
    /// response.
    pub fn select_application(&mut self, pcb: Pcb) -> Result<Vec<u8>> {
        self.execute(Command::SelectApplication { pcb })
    }

    /// Select a logical file by identifier. Returns the raw 5-byte
    /// response.
    pub fn select_file(&mut self, file: FileId, pcb: Pcb) -> Result<Vec<u8>> {
        self.execute(Command::SelectFile { pcb, file })
    }

    /// Read `length` bytes at `offset` from the currently selected file.
    /// Returns the raw `length + 5` byte response (PCB, payload, status
    /// word, CRC).
    pub fn read_binary(&mut self, offset: u16, length: u8, pcb: Pcb) -> Result<Vec<u8>> {
        self.execute(Command::ReadBinary {
            pcb,
            offset,
            length,
        })
    }

    /// Release the I2C session so RF can resume.
    pub fn deselect(&mut self) -> Result<()> {
        self.execute(Command::Deselect).map(|_| ())
    }
}
