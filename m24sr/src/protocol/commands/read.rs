// m24sr/src/protocol/commands/read.rs

use crate::constants::{APDU_CLA, INS_READ_BINARY};
use crate::types::Pcb;

/// Encode the read-binary frame: read `length` bytes at `offset` from the
/// currently selected file. The offset travels big-endian in P1/P2 and the
/// length in Le.
pub fn encode_read_binary(pcb: Pcb, offset: u16, length: u8) -> Vec<u8> {
    let off = offset.to_be_bytes();
    vec![
        pcb.as_u8(),
        APDU_CLA,
        INS_READ_BINARY,
        off[0], // P1: offset high
        off[1], // P2: offset low
        length, // Le
    ]
}
