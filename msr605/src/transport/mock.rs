// msr605/src/transport/mock.rs

use crate::error::CommFailure;
use crate::transport::traits::Transport;

/// Mock transport for unit tests. Records sent payloads and returns queued
/// response chunks; an empty queue behaves as a device that never answers.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    closed: bool,
    /// Testing hook: number of send calls that should fail with WriteError
    write_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response chunk. Chunks are returned one per `receive` call,
    /// so a frame split across chunks exercises reassembly.
    pub fn push_response(&mut self, chunk: Vec<u8>) {
        self.responses.push(chunk);
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), CommFailure> {
        if self.closed {
            return Err(CommFailure::Closed);
        }
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(CommFailure::WriteError);
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>, CommFailure> {
        if self.closed {
            return Err(CommFailure::Closed);
        }
        if self.responses.is_empty() {
            Err(CommFailure::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn close(&mut self) -> Result<(), CommFailure> {
        self.closed = true;
        Ok(())
    }
}
