// msr605/src/codec/raw.rs

//! Raw mode: content units packed verbatim at the track's bit width, no
//! alphabet validation and no sentinel framing. The escape hatch for
//! non-ISO card data.

use crate::codec::bits::{BitReader, BitWriter};
use crate::error::EncodeError;
use crate::types::{Track, TrackSettings};

/// Pack a track's units into payload bytes, LSB first.
///
/// Units must fit the configured bits-per-character; capacity is enforced
/// in bits, as the stripe does.
pub fn encode_raw(track: &Track) -> Result<Vec<u8>, EncodeError> {
    let bpc = track.settings.bpc.as_u8();

    let capacity = super::capacity_bits(track.number, track.settings.bpi);
    if track.content.len() * bpc as usize > capacity {
        return Err(EncodeError::TooLong {
            track: track.number,
            len: track.content.len(),
            max: capacity / bpc as usize,
        });
    }

    let mut writer = BitWriter::new();
    for (pos, &unit) in track.content.iter().enumerate() {
        if bpc < 8 && unit >> bpc != 0 {
            return Err(EncodeError::InvalidCharacter {
                track: track.number,
                pos,
                byte: unit,
            });
        }
        writer.push(unit, bpc);
    }
    Ok(writer.finish())
}

/// Unpack payload bytes back into bpc-wide units.
///
/// Every whole group is returned; when the packed bit count is not a
/// multiple of eight the final byte's padding can surface as extra zero
/// units, exactly as the device reports raw reads.
pub fn decode_raw(settings: TrackSettings, payload: &[u8]) -> Vec<u8> {
    let bpc = settings.bpc.as_u8();
    let mut reader = BitReader::new(payload);
    let mut units = Vec::with_capacity(payload.len() * 8 / bpc as usize);
    while let Some(unit) = reader.read(bpc) {
        units.push(unit);
    }
    units
}
