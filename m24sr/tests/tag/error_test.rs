#[path = "../common/mod.rs"]
mod common;

use m24sr::test_support::mock_with_responses;
use m24sr::transport::MockI2c;
use m24sr::{Error, FileId, NfcTag, Pcb};

#[test]
fn write_failure_aborts_before_any_read() {
    let mut mock = MockI2c::new();
    mock.fail_writes(1);
    mock.push_response(common::select_ok(0x02));
    let mut tag = NfcTag::new(mock);

    assert!(matches!(
        tag.select_application(Pcb::SEQ_0),
        Err(Error::Transport { .. })
    ));

    let mock = tag.into_transport();
    assert!(mock.written.is_empty());
    // The queued response was never consumed.
    assert_eq!(mock.responses.len(), 1);
}

#[test]
fn read_failure_aborts_the_operation() {
    let mut mock = MockI2c::new();
    mock.fail_reads(1);
    let mut tag = NfcTag::new(mock);

    assert!(matches!(
        tag.select_file(FileId::NDEF, Pcb::SEQ_0),
        Err(Error::Transport { .. })
    ));

    // The write itself still went out; the failure hit the response read.
    assert_eq!(tag.into_transport().written.len(), 1);
}

#[test]
fn failure_mid_sequence_stops_further_transport_calls() {
    let mock = mock_with_responses(vec![common::select_ok(0x02)]);
    let mut tag = NfcTag::new(mock);

    tag.kill_rf_select_i2c().unwrap();
    tag.select_application(Pcb::SEQ_0).unwrap();
    // No response queued for select_file: the transport reports an error.
    assert!(tag.select_file(FileId::SYSTEM, Pcb::SEQ_1).is_err());

    // kill-RF + both selects were written; nothing after the failure.
    assert_eq!(tag.into_transport().written.len(), 3);
}

#[test]
fn check_crc_flag_verifies_responses() {
    // A response whose CRC bytes were zeroed by a glitched read.
    let mut bad = common::select_ok(0x02);
    let n = bad.len();
    bad[n - 2] = 0x00;
    bad[n - 1] = 0x00;

    let mock = mock_with_responses(vec![bad]);
    let mut tag = NfcTag::new(mock);

    tag.write_frame(&[0x02, 0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x01], true)
        .unwrap();
    assert!(matches!(
        tag.read_frame(5, true),
        Err(Error::ChecksumMismatch { .. })
    ));
}
