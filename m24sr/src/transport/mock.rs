// m24sr/src/transport/mock.rs

use crate::transport::traits::I2cTransport;
use crate::{Error, Result};

/// Status code the mock reports when a failure is injected or no response
/// is queued.
pub const MOCK_FAIL_STATUS: i32 = -1;

/// Mock transport for unit tests. It records written frames and returns
/// queued responses, padded or truncated to the requested read length the
/// way a real bus binding pads short tag responses.
#[derive(Debug, Default)]
pub struct MockI2c {
    /// Every write, in order, as `(address, frame bytes)`.
    pub written: Vec<(u8, Vec<u8>)>,
    /// Queued read responses, consumed front to back.
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of upcoming `write` calls that should fail.
    pub write_failures: usize,
    /// Testing hook: number of upcoming `read` calls that should fail.
    pub read_failures: usize,
}

impl MockI2c {
    /// An empty mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for a subsequent `read`.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Set how many subsequent `write` calls should fail (for tests).
    pub fn fail_writes(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Set how many subsequent `read` calls should fail (for tests).
    pub fn fail_reads(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// The frames written so far, without addresses.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.written.iter().map(|(_, f)| f.clone()).collect()
    }
}

impl I2cTransport for MockI2c {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport {
                status: MOCK_FAIL_STATUS,
            });
        }
        self.written.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, len: usize) -> Result<Vec<u8>> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Transport {
                status: MOCK_FAIL_STATUS,
            });
        }
        if len == 0 {
            return Ok(Vec::new());
        }
        if self.responses.is_empty() {
            return Err(Error::Transport {
                status: MOCK_FAIL_STATUS,
            });
        }
        let mut resp = self.responses.remove(0);
        // Real bus reads return exactly the requested length.
        resp.resize(len, 0x00);
        Ok(resp)
    }
}
