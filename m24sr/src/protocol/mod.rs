// m24sr/src/protocol/mod.rs

//! Frame-level protocol engine: CRC-16, command builders, response parsing.

pub mod commands;
pub mod crc;
pub mod response;

pub use commands::Command;
pub use crc::Crc16;
pub use response::ApduResponse;
