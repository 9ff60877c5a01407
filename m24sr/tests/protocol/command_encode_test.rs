#[path = "../common/mod.rs"]
mod common;

use m24sr::protocol::{crc, Command};
use m24sr::{FileId, Pcb};

fn closed(cmd: &Command) -> Vec<u8> {
    let mut frame = cmd.encode();
    if cmd.carries_crc() {
        crc::append(&mut frame);
    }
    frame
}

#[test]
fn kill_rf_goes_out_bare() {
    let cmd = Command::KillRfSelectI2c;
    assert_eq!(closed(&cmd), vec![0x52]);
    assert_eq!(cmd.expected_response_len(), 0);
}

#[test]
fn select_application_matches_an4433() {
    let cmd = Command::SelectApplication { pcb: Pcb::SEQ_0 };
    assert_eq!(
        closed(&cmd),
        vec![
            0x02, 0x00, 0xA4, 0x04, 0x00, 0x07, 0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01, 0x00,
            0x35, 0xC0
        ]
    );
    assert_eq!(cmd.expected_response_len(), 5);
}

#[test]
fn select_cc_file_matches_an4433() {
    let cmd = Command::SelectFile {
        pcb: Pcb::SEQ_1,
        file: FileId::CC,
    };
    assert_eq!(
        closed(&cmd),
        vec![0x03, 0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x03, 0xD2, 0xAF]
    );
}

#[test]
fn select_file_is_deterministic_across_invocations() {
    let cmd = Command::SelectFile {
        pcb: Pcb::SEQ_1,
        file: FileId::CC,
    };
    let first = closed(&cmd);
    for _ in 0..10 {
        assert_eq!(closed(&cmd), first);
    }
}

#[test]
fn read_binary_matches_an4433() {
    let cmd = Command::ReadBinary {
        pcb: Pcb::SEQ_0,
        offset: 0x0000,
        length: 0x02,
    };
    assert_eq!(
        closed(&cmd),
        vec![0x02, 0x00, 0xB0, 0x00, 0x00, 0x02, 0x6B, 0x7D]
    );
    assert_eq!(cmd.expected_response_len(), 7);
}

#[test]
fn read_ndef_message_matches_an4433() {
    let cmd = Command::ReadBinary {
        pcb: Pcb::SEQ_0,
        offset: 0x0002,
        length: 0x14,
    };
    assert_eq!(
        closed(&cmd),
        vec![0x02, 0x00, 0xB0, 0x00, 0x02, 0x14, 0x6C, 0x3B]
    );
}

#[test]
fn deselect_matches_an4433() {
    let cmd = Command::Deselect;
    assert_eq!(closed(&cmd), vec![0xC2, 0xE0, 0xB4]);
    assert_eq!(cmd.expected_response_len(), 0);
}
