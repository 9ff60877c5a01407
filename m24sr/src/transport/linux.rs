// m24sr/src/transport/linux.rs

//! Linux i2c-dev backed transport (feature `linux`).

use std::path::Path;

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::transport::traits::I2cTransport;
use crate::Result;

/// Transport backed by a `/dev/i2c-*` character device.
pub struct LinuxI2c {
    dev: LinuxI2CDevice,
    bound: u8,
}

impl LinuxI2c {
    /// Open the given i2c-dev node bound to the 7-bit `address`.
    ///
    /// On a Raspberry Pi with the tag on SDA/SCL this is typically
    /// `LinuxI2c::open("/dev/i2c-1", constants::I2C_ADDRESS_7BIT)`.
    pub fn open<P: AsRef<Path>>(path: P, address: u8) -> Result<Self> {
        let dev = LinuxI2CDevice::new(path, u16::from(address))?;
        Ok(Self {
            dev,
            bound: address,
        })
    }

    fn rebind(&mut self, address: u8) -> Result<()> {
        if address != self.bound {
            self.dev.set_slave_address(u16::from(address))?;
            self.bound = address;
        }
        Ok(())
    }
}

impl I2cTransport for LinuxI2c {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.rebind(address)?;
        self.dev.write(data)?;
        Ok(())
    }

    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>> {
        self.rebind(address)?;
        let mut buf = vec![0u8; len];
        if len > 0 {
            self.dev.read(&mut buf)?;
        }
        Ok(buf)
    }
}
