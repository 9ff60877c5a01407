#[path = "../common/mod.rs"]
mod common;

use m24sr::test_support::mock_with_responses;
use m24sr::{
    end_session, read_memory_size, read_ndef, start_session, NfcTag, Pcb,
};

// Replays the AN4433 demonstration flow end to end: claim the session,
// read the memory size from the system file, read the NDEF message, then
// hand the tag back to RF.
#[test]
fn full_session_walkthrough() {
    let ndef_body = b"\xD1\x01\x0ET\x02enhello world";
    let mock = mock_with_responses(vec![
        common::select_ok(0x02),                  // select application
        common::select_ok(0x03),                  // select system file
        common::read_ok(0x02, &[0x00, 0x12]),     // system length probe
        common::read_ok(0x03, &common::system_file_bytes()),
        common::select_ok(0x02),                  // select NDEF file
        common::read_ok(0x03, &[0x00, ndef_body.len() as u8]),
        common::read_ok(0x02, ndef_body),
    ]);
    let mut tag = NfcTag::new(mock);
    let mut pcb = Pcb::SEQ_0;

    start_session(&mut tag, &mut pcb).unwrap();
    assert_eq!(read_memory_size(&mut tag, &mut pcb).unwrap(), 0x1FFF);
    assert_eq!(read_ndef(&mut tag, &mut pcb).unwrap(), ndef_body.to_vec());
    end_session(&mut tag).unwrap();

    let mock = tag.into_transport();
    let frames = mock.frames();
    // kill RF + 7 exchanges + deselect
    assert_eq!(frames.len(), 9);
    assert!(mock.responses.is_empty());

    // The kill-RF and deselect frames carry no PCB; every exchange in
    // between alternates the sequence bit starting at 0x02.
    assert_eq!(frames[0], vec![0x52]);
    let pcbs: Vec<u8> = frames[1..8].iter().map(|f| f[0]).collect();
    assert_eq!(pcbs, vec![0x02, 0x03, 0x02, 0x03, 0x02, 0x03, 0x02]);
    assert_eq!(frames[8], vec![0xC2, 0xE0, 0xB4]);
}

#[test]
fn start_session_resets_pcb_sequence() {
    let mock = mock_with_responses(vec![common::select_ok(0x02)]);
    let mut tag = NfcTag::new(mock);
    // Stale sequence from an earlier session.
    let mut pcb = Pcb::SEQ_1;

    start_session(&mut tag, &mut pcb).unwrap();

    let frames = tag.into_transport().frames();
    assert_eq!(frames[1][0], 0x02);
    assert_eq!(pcb, Pcb::SEQ_1);
}

#[test]
fn start_session_surfaces_tag_rejection() {
    use m24sr::test_support::status_response;

    let mock = mock_with_responses(vec![status_response(0x02, &[], 0x6A, 0x82)]);
    let mut tag = NfcTag::new(mock);
    let mut pcb = Pcb::SEQ_0;

    match start_session(&mut tag, &mut pcb) {
        Err(m24sr::Error::Status { sw1: 0x6A, sw2: 0x82 }) => {}
        other => panic!("expected tag status error, got {:?}", other),
    }
}
