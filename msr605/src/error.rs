// msr605/src/error.rs

use thiserror::Error;

use crate::types::{DeviceStatus, SelfTest, TrackNumber};

/// Transport/framing level failures.
///
/// Anything other than a clean [`CommFailure::Closed`] faults the session;
/// the caller must reopen the device before issuing further commands.
#[derive(Error, Debug)]
pub enum CommFailure {
    #[error("transport write did not complete")]
    WriteError,

    #[error("operation timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("transport closed")]
    Closed,
}

/// Track-codec encoding failures.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("track {track} position {pos}: byte {byte:#04x} not encodable")]
    InvalidCharacter {
        track: TrackNumber,
        pos: usize,
        byte: u8,
    },

    #[error("track {track}: {len} characters exceed capacity of {max}")]
    TooLong {
        track: TrackNumber,
        len: usize,
        max: usize,
    },
}

/// Track-codec decoding failures.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("track {track}: checksum mismatch, expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        track: TrackNumber,
        expected: u8,
        actual: u8,
    },

    #[error("track {track}: payload truncated before end sentinel")]
    Truncated { track: TrackNumber },

    #[error("track {track} position {pos}: byte {byte:#04x} outside track alphabet")]
    BadCharacter {
        track: TrackNumber,
        pos: usize,
        byte: u8,
    },

    #[error("track {track}: payload does not begin with the start sentinel")]
    MissingStartSentinel { track: TrackNumber },

    #[error("track {track}: unexpected data after the LRC character")]
    TrailingData { track: TrackNumber },
}

/// Device-semantic failures for command/query operations.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("{0} test failed")]
    TestFailed(SelfTest),

    #[error("device rejected command: {0}")]
    Rejected(DeviceStatus),

    #[error("unexpected response byte: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error(transparent)]
    Comm(#[from] CommFailure),
}

/// Failures of a card read operation.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("no card swiped before timeout")]
    NoCard,

    #[error("track {track} failed to decode: {source}")]
    DecodeFailed {
        track: TrackNumber,
        source: DecodeError,
    },

    #[error("device reported read failure: {0}")]
    Device(DeviceStatus),

    #[error(transparent)]
    Comm(#[from] CommFailure),
}

/// Failures of a card write operation.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    EncodeFailed(#[from] EncodeError),

    #[error("device rejected write: {0}")]
    DeviceRejected(DeviceStatus),

    #[error(transparent)]
    Comm(#[from] CommFailure),
}

/// Aggregate error for callers that want a single error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Comm(#[from] CommFailure),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("bits per character must be in 5..=8, got {0}")]
    InvalidBpc(u8),

    #[error("bits per inch must be 75 or 210, got {0}")]
    InvalidBpi(u16),

    #[error("track number must be 1, 2 or 3, got {0}")]
    InvalidTrack(u8),

    // serialport is an optional dependency, so its error only exists with
    // the serial transport compiled in
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
