// fixtures.rs — provides commonly used tracks and wire frames
#![allow(dead_code)]

use msr605::test_support;
use msr605::{Track, TrackNumber};

pub fn sample_track1() -> Track {
    Track::with_content(TrackNumber::One, *b"ABC123")
}

pub fn sample_track2() -> Track {
    Track::with_content(TrackNumber::Two, *b"4111")
}

pub fn sample_card() -> [Track; 3] {
    [
        sample_track1(),
        sample_track2(),
        Track::empty(TrackNumber::Three),
    ]
}

pub fn ack_frame() -> Vec<u8> {
    test_support::ack_frame()
}

pub fn status_frame(status: u8) -> Vec<u8> {
    test_support::status_frame(status)
}

/// The wire frame a device would answer with after reading the sample card.
pub fn sample_card_read_frame() -> Vec<u8> {
    test_support::iso_read_frame(b"ABC123", b"4111", b"")
}
