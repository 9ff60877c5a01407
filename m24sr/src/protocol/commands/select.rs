// m24sr/src/protocol/commands/select.rs

use crate::constants::{APDU_CLA, INS_SELECT, NFC_T4_AID};
use crate::types::{FileId, Pcb};

/// Encode the select-application frame: select the NFC Type 4 Tag
/// application by its fixed 7-byte AID (P1=0x04 "select by name").
pub fn encode_select_application(pcb: Pcb) -> Vec<u8> {
    let mut buf = Vec::with_capacity(6 + NFC_T4_AID.len() + 1);
    buf.push(pcb.as_u8());
    buf.push(APDU_CLA);
    buf.push(INS_SELECT);
    buf.push(0x04); // P1: select by DF name
    buf.push(0x00); // P2
    buf.push(NFC_T4_AID.len() as u8); // Lc
    buf.extend_from_slice(&NFC_T4_AID);
    buf.push(0x00); // Le
    buf
}

/// Encode the select-file frame for a 16-bit file identifier
/// (P1=0x00, P2=0x0C "select by identifier, no response data").
pub fn encode_select_file(pcb: Pcb, file: FileId) -> Vec<u8> {
    let id = file.to_be_bytes();
    vec![
        pcb.as_u8(),
        APDU_CLA,
        INS_SELECT,
        0x00, // P1
        0x0C, // P2
        0x02, // Lc: identifier length
        id[0],
        id[1],
    ]
}
