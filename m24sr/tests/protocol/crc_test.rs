#[path = "../common/mod.rs"]
mod common;

use m24sr::protocol::crc::{self, Crc16};
use proptest::prelude::*;

#[test]
fn an4433_vectors_reproduce_exactly() {
    for (frame, expected) in common::an4433_vectors() {
        assert_eq!(
            crc::compute(&frame),
            expected,
            "frame {:02x?} must check to {:02x?}",
            frame,
            expected
        );
    }
}

#[test]
fn streaming_update_matches_compute() {
    for (frame, expected) in common::an4433_vectors() {
        let mut crc = Crc16::new();
        for &b in &frame {
            crc.update(b);
        }
        assert_eq!(crc.finalize(), expected);
    }
}

#[test]
fn wire_order_is_low_byte_first() {
    let frame = [0x03, 0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x03];
    assert_eq!(hex::encode(crc::compute(&frame)), "d2af");
}

#[test]
fn finalize_does_not_reset() {
    let mut crc = Crc16::new();
    crc.update(0xC2);
    assert_eq!(crc.finalize(), [0xE0, 0xB4]);
    // A second extraction sees the same register.
    assert_eq!(crc.finalize(), [0xE0, 0xB4]);
    // Only an explicit start() reseeds.
    crc.start();
    crc.update(0xC2);
    assert_eq!(crc.finalize(), [0xE0, 0xB4]);
}

proptest! {
    #[test]
    fn independent_computations_agree(frame in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(crc::compute(&frame), crc::compute(&frame));
    }

    #[test]
    fn append_then_verify_roundtrips(frame in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut closed = frame.clone();
        crc::append(&mut closed);
        prop_assert_eq!(closed.len(), frame.len() + 2);
        prop_assert!(crc::verify(&closed).is_ok());
    }
}
