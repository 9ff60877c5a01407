// m24sr/src/transport/mod.rs

//! Bus transport abstraction and implementations.

#[cfg(feature = "linux")]
pub mod linux;
pub mod mock;
pub mod traits;

#[cfg(feature = "linux")]
pub use linux::LinuxI2c;
pub use mock::MockI2c;
pub use traits::I2cTransport;
