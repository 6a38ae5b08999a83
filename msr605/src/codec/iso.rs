// msr605/src/codec/iso.rs

//! ISO mode encoding: alphabet-checked character data framed with the
//! track's start sentinel, the shared end sentinel and a trailing LRC
//! character. Decoding validates the frame and never drops characters
//! silently.

use crate::codec::alphabet;
use crate::codec::lrc::lrc;
use crate::error::{DecodeError, EncodeError};
use crate::types::{Track, TrackNumber, TrackSettings};

/// Encode a track's content into its framed ISO payload.
///
/// Every content byte must be a data character of the track's alphabet and
/// representable in the configured bits-per-character (one bit of each
/// character is parity on the stripe, so the code must fit `bpc - 1` bits).
pub fn encode_iso(track: &Track) -> Result<Vec<u8>, EncodeError> {
    let number = track.number;
    let limit = track.settings.bpc.code_limit();

    let max = super::capacity_chars(number, track.settings);
    if track.content.len() + 3 > max {
        return Err(EncodeError::TooLong {
            track: number,
            len: track.content.len(),
            max: max.saturating_sub(3),
        });
    }

    let mut payload = Vec::with_capacity(track.content.len() + 3);
    payload.push(alphabet::start_sentinel(number));
    for (pos, &byte) in track.content.iter().enumerate() {
        if !alphabet::is_data_character(number, byte)
            || alphabet::code_of(number, byte) >= limit
        {
            return Err(EncodeError::InvalidCharacter {
                track: number,
                pos,
                byte,
            });
        }
        payload.push(byte);
    }
    payload.push(alphabet::END_SENTINEL);

    let check = lrc(payload.iter().map(|&b| alphabet::code_of(number, b)));
    payload.push(alphabet::char_of(number, check));
    Ok(payload)
}

/// Decode a framed ISO payload back into track content.
///
/// An empty payload decodes to empty content: a track with no swipe data is
/// a legitimate outcome, not an error.
pub fn decode_iso(
    number: TrackNumber,
    settings: TrackSettings,
    payload: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }

    if payload[0] != alphabet::start_sentinel(number) {
        return Err(DecodeError::MissingStartSentinel { track: number });
    }

    let limit = settings.bpc.code_limit();
    let mut content = Vec::new();
    let mut i = 1usize;
    loop {
        let Some(&byte) = payload.get(i) else {
            return Err(DecodeError::Truncated { track: number });
        };
        if byte == alphabet::END_SENTINEL {
            break;
        }
        if !alphabet::is_data_character(number, byte)
            || alphabet::code_of(number, byte) >= limit
        {
            return Err(DecodeError::BadCharacter {
                track: number,
                pos: i,
                byte,
            });
        }
        content.push(byte);
        i += 1;
    }

    // i sits on the end sentinel; exactly one LRC character must follow
    let Some(&check_char) = payload.get(i + 1) else {
        return Err(DecodeError::Truncated { track: number });
    };
    if !alphabet::in_alphabet(number, check_char) {
        return Err(DecodeError::BadCharacter {
            track: number,
            pos: i + 1,
            byte: check_char,
        });
    }
    if payload.len() != i + 2 {
        return Err(DecodeError::TrailingData { track: number });
    }

    let expected = lrc(
        payload[..=i]
            .iter()
            .map(|&b| alphabet::code_of(number, b)),
    );
    let actual = alphabet::code_of(number, check_char);
    if expected != actual {
        return Err(DecodeError::ChecksumMismatch {
            track: number,
            expected,
            actual,
        });
    }

    Ok(content)
}
