#![cfg(feature = "linux")]

//! Read the NDEF message from a tag on the default Raspberry Pi bus.
//!
//! Usage:
//!   cargo run -p m24sr --example read_ndef --features linux

use anyhow::Result;
use m24sr::constants::I2C_ADDRESS_7BIT;
use m24sr::transport::LinuxI2c;
use m24sr::{end_session, read_ndef, read_system_file, start_session, NfcTag, Pcb};

fn main() -> Result<()> {
    env_logger::init();

    let transport = LinuxI2c::open("/dev/i2c-1", I2C_ADDRESS_7BIT)?;
    let mut tag = NfcTag::new(transport);
    let mut pcb = Pcb::SEQ_0;

    start_session(&mut tag, &mut pcb)?;

    let sys = read_system_file(&mut tag, &mut pcb)?;
    println!(
        "uid {}  memory {} bytes  product {:#04x}",
        m24sr::bytes_to_hex(&sys.uid),
        u32::from(sys.memory_size) + 1,
        sys.product_code
    );

    let message = read_ndef(&mut tag, &mut pcb)?;
    println!("ndef ({} bytes): {}", message.len(), m24sr::bytes_to_hex_spaced(&message));

    end_session(&mut tag)?;
    Ok(())
}
