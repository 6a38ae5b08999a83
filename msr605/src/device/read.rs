// msr605/src/device/read.rs

//! Card read operation. The device answers after a swipe, so the receive
//! window is the long swipe timeout; a window that elapses with no swipe is
//! the `NoCard` outcome, not a session fault.

use crate::codec;
use crate::device::{Device, Open};
use crate::error::{CommFailure, ReadError};
use crate::protocol::{Command, Response};
use crate::types::{Track, TrackFormat, TrackNumber};
use crate::utils::SWIPE_TIMEOUT_MS;

impl Device<Open> {
    /// Read a card with the default swipe timeout.
    pub fn read(&mut self, format: TrackFormat) -> Result<[Track; 3], ReadError> {
        self.read_with_timeout(format, SWIPE_TIMEOUT_MS)
    }

    /// Read a card, waiting at most `timeout_ms` for the swipe. Tracks the
    /// card does not carry come back as empty content, stamped with the
    /// session's current settings.
    pub fn read_with_timeout(
        &mut self,
        format: TrackFormat,
        timeout_ms: u64,
    ) -> Result<[Track; 3], ReadError> {
        let cmd = match format {
            TrackFormat::Iso => Command::ReadIso,
            TrackFormat::Raw => Command::ReadRaw,
        };

        let resp = match self.execute_opts(&cmd, timeout_ms, false) {
            Ok(resp) => resp,
            Err(CommFailure::Timeout) => return Err(ReadError::NoCard),
            Err(other) => return Err(other.into()),
        };

        let (sections, status) = match resp {
            Response::CardData { sections, status } => (sections, status),
            other => return Err(ReadError::Device(other.status())),
        };
        if !status.is_ok() {
            return Err(ReadError::Device(status));
        }

        let mut tracks = TrackNumber::ALL.map(Track::empty);
        for track in tracks.iter_mut() {
            let i = track.number.index();
            track.settings = self.session.tracks[i];
            let section = &sections[i];
            if section.is_empty() {
                continue;
            }
            track.content = match format {
                TrackFormat::Iso => {
                    codec::decode_iso(track.number, track.settings, section).map_err(
                        |source| ReadError::DecodeFailed {
                            track: track.number,
                            source,
                        },
                    )?
                }
                TrackFormat::Raw => codec::decode_raw(track.settings, section),
            };
        }
        Ok(tracks)
    }
}
