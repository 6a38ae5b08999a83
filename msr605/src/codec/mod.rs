// msr605/src/codec/mod.rs

//! ISO7811 track codec: conversion between logical track content and the
//! payload bytes carried in the device's data blocks. Stateless; every
//! function takes track values and returns new buffers.

pub mod alphabet;
pub mod bits;
pub mod iso;
pub mod lrc;
pub mod raw;

pub use iso::{decode_iso, encode_iso};
pub use raw::{decode_raw, encode_raw};

use crate::constants::{TRACK_CAPACITY_BITS, TRACK_NOMINAL_BPI};
use crate::types::{Bpi, TrackNumber, TrackSettings};

/// Physical bit capacity of a track at the given recording density.
/// Scales the nominal capacity linearly with the configured BPI.
pub fn capacity_bits(number: TrackNumber, bpi: Bpi) -> usize {
    let i = number.index();
    TRACK_CAPACITY_BITS[i] * bpi.as_u16() as usize / TRACK_NOMINAL_BPI[i] as usize
}

/// Capacity of a track in characters at the given settings, including
/// sentinels and the LRC character.
pub fn capacity_chars(number: TrackNumber, settings: TrackSettings) -> usize {
    capacity_bits(number, settings.bpi) / settings.bpc.as_u8() as usize
}
