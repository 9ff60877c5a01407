// m24sr/src/prelude.rs

//! Convenience re-exports of the types most consumers need.

pub use crate::protocol::{ApduResponse, Command, Crc16};
pub use crate::tag::operations::{
    end_session, read_memory_size, read_ndef, read_system_file, start_session,
};
pub use crate::tag::NfcTag;
pub use crate::transport::{I2cTransport, MockI2c};
pub use crate::{Error, FileId, Pcb, Result, SystemFile};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
