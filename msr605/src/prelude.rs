// msr605/src/prelude.rs

//! Convenience re-exports for driver consumers.

pub use crate::device::{Closed, Device, Open};
pub use crate::protocol::{Command, Response};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;
pub use crate::{
    Bpc, Bpi, Coercivity, DeviceStatus, Error, LedColor, LedState, Result, SelfTest, Track,
    TrackFormat, TrackNumber, TrackSettings,
};

// Re-export small utilities for convenience
pub use crate::utils::{DEFAULT_COMMAND_TIMEOUT_MS, SWIPE_TIMEOUT_MS, bytes_to_hex, ms};
