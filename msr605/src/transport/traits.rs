// msr605/src/transport/traits.rs

use crate::error::CommFailure;

/// Transport trait abstracts the serial byte stream away from framing and
/// device logic. The device session owns its transport exclusively; no
/// other component reads or writes it directly.
pub trait Transport {
    /// Write raw bytes to the device. Must complete fully or fail with
    /// [`CommFailure::WriteError`].
    fn send(&mut self, data: &[u8]) -> Result<(), CommFailure>;

    /// Read whatever bytes are available within `timeout_ms`. A return of
    /// [`CommFailure::Timeout`] means nothing arrived in time; partial
    /// frames are legitimate and are reassembled by the framing layer.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>, CommFailure>;

    /// Close the byte stream. Subsequent calls observe
    /// [`CommFailure::Closed`].
    fn close(&mut self) -> Result<(), CommFailure>;
}
