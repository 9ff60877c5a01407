//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockI2c setup so tests across the crate
//! and tests/ directory can reuse the same response framing.
#![allow(dead_code)]

use crate::protocol::crc;
use crate::transport::MockI2c;

/// Build a MockI2c pre-seeded with the given raw responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockI2c {
    let mut mock = MockI2c::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Build a complete success response frame:
/// `[pcb, payload.., 0x90, 0x00, CRC0, CRC1]`.
#[doc(hidden)]
pub fn ok_response(pcb: u8, payload: &[u8]) -> Vec<u8> {
    status_response(pcb, payload, 0x90, 0x00)
}

/// Build a complete response frame with an explicit status word.
#[doc(hidden)]
pub fn status_response(pcb: u8, payload: &[u8], sw1: u8, sw2: u8) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 5);
    frame.push(pcb);
    frame.extend_from_slice(payload);
    frame.push(sw1);
    frame.push(sw2);
    crc::append(&mut frame);
    frame
}
