// msr605/src/device/write.rs

//! Card write operation. Tracks are encoded by the codec before anything
//! touches the wire, the device must acknowledge explicitly, and a write is
//! never re-issued automatically.

use crate::codec;
use crate::device::{Device, Open};
use crate::error::WriteError;
use crate::protocol::Command;
use crate::types::{Track, TrackFormat};
use crate::utils::SWIPE_TIMEOUT_MS;

impl Device<Open> {
    /// Write a card with the default swipe timeout.
    pub fn write(&mut self, format: TrackFormat, tracks: &[Track; 3]) -> Result<(), WriteError> {
        self.write_with_timeout(format, tracks, SWIPE_TIMEOUT_MS)
    }

    /// Write a card, waiting at most `timeout_ms` for the swipe. Empty
    /// tracks produce no section and are left untouched on the card.
    pub fn write_with_timeout(
        &mut self,
        format: TrackFormat,
        tracks: &[Track; 3],
        timeout_ms: u64,
    ) -> Result<(), WriteError> {
        let mut payloads: [Vec<u8>; 3] = Default::default();
        for track in tracks {
            if track.is_empty() {
                continue;
            }
            payloads[track.number.index()] = match format {
                TrackFormat::Iso => codec::encode_iso(track)?,
                TrackFormat::Raw => codec::encode_raw(track)?,
            };
        }

        let cmd = match format {
            TrackFormat::Iso => Command::WriteIso { tracks: payloads },
            TrackFormat::Raw => Command::WriteRaw { tracks: payloads },
        };

        let status = self.execute(&cmd, timeout_ms)?.status();
        if status.is_ok() {
            Ok(())
        } else {
            Err(WriteError::DeviceRejected(status))
        }
    }
}
