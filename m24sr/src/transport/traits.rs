// m24sr/src/transport/traits.rs

use crate::Result;

/// I2cTransport abstracts the raw bus away from the protocol driver.
///
/// Implementations own start/stop conditions, byte-level transfers, and any
/// timeout behavior; a hung bus call blocks the driver. A non-zero bus
/// status must surface as `Error::Transport` (or a binding-specific error)
/// so the driver can abort the in-progress operation.
pub trait I2cTransport {
    /// Transmit `data` to the 7-bit I2C `address`.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()>;

    /// Read exactly `len` bytes from `address`. The returned buffer length
    /// equals `len` regardless of how many bytes the tag actually produced;
    /// padding semantics belong to the transport.
    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>>;

    /// Bus/session setup, invoked once by the surrounding harness before
    /// the first exchange. Default is a no-op.
    fn init_defaults(&mut self) -> Result<()> {
        Ok(())
    }

    /// Bus/session teardown counterpart of [`I2cTransport::init_defaults`].
    fn finished(&mut self) -> Result<()> {
        Ok(())
    }
}
