// m24sr/src/protocol/commands/session.rs

use crate::constants::{CMD_DESELECT, CMD_KILL_RF};

/// Encode the kill-RF frame. Sent bare, without a CRC; the tag drops any RF
/// session and grants the I2C host the session token.
pub fn encode_kill_rf() -> Vec<u8> {
    vec![CMD_KILL_RF]
}

/// Encode the deselect frame. CRC-closed single byte; the tag releases the
/// I2C session so RF access can resume.
pub fn encode_deselect() -> Vec<u8> {
    vec![CMD_DESELECT]
}
