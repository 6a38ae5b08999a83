// msr605/src/protocol/commands/config.rs

//! Parameter bytes for the configuration commands.

use crate::constants;
use crate::types::{Bpi, TrackNumber};

/// Erase select byte: bit 0 = track 1, bit 1 = track 2, bit 2 = track 3.
pub fn erase_select_byte(track1: bool, track2: bool, track3: bool) -> u8 {
    (track1 as u8) | (track2 as u8) << 1 | (track3 as u8) << 2
}

/// Density byte for SetBpi; the device uses a distinct constant per
/// track-and-density pair.
pub fn bpi_density_byte(track: TrackNumber, bpi: Bpi) -> u8 {
    match (track, bpi) {
        (TrackNumber::One, Bpi::Bpi210) => constants::BPI_TRACK1_210,
        (TrackNumber::One, Bpi::Bpi75) => constants::BPI_TRACK1_75,
        (TrackNumber::Two, Bpi::Bpi210) => constants::BPI_TRACK2_210,
        (TrackNumber::Two, Bpi::Bpi75) => constants::BPI_TRACK2_75,
        (TrackNumber::Three, Bpi::Bpi210) => constants::BPI_TRACK3_210,
        (TrackNumber::Three, Bpi::Bpi75) => constants::BPI_TRACK3_75,
    }
}
