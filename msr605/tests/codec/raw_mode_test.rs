use msr605::codec::{decode_raw, encode_raw};
use msr605::error::EncodeError;
use msr605::{Bpc, Track, TrackNumber};
use proptest::prelude::*;

fn raw_track(bpc: u8, units: Vec<u8>) -> Track {
    let mut track = Track::with_content(TrackNumber::Three, units);
    track.settings.bpc = Bpc::new(bpc).unwrap();
    track
}

#[test]
fn raw_mode_accepts_non_iso_units() {
    // 0x00 and 0x1B have no ISO meaning in raw mode
    let track = raw_track(6, vec![0x00, 0x1B, 0x3F, 0x2A]);
    let payload = encode_raw(&track).unwrap();
    let decoded = decode_raw(track.settings, &payload);
    assert_eq!(&decoded[..4], &[0x00, 0x1B, 0x3F, 0x2A]);
}

#[test]
fn raw_mode_still_enforces_bit_width() {
    let track = raw_track(5, vec![0x1F, 0x2F]);
    assert!(matches!(
        encode_raw(&track),
        Err(EncodeError::InvalidCharacter { pos: 1, byte: 0x2F, .. })
    ));
}

proptest! {
    // Packed-then-unpacked units always come back as a prefix, with only
    // zero units from byte padding after them.
    #[test]
    fn raw_roundtrip_prefix_prop(
        bpc in 5u8..=8,
        units in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let masked: Vec<u8> = units
            .iter()
            .map(|&u| if bpc == 8 { u } else { u & ((1u8 << bpc) - 1) })
            .collect();
        let track = raw_track(bpc, masked.clone());
        let payload = encode_raw(&track).unwrap();
        let decoded = decode_raw(track.settings, &payload);

        prop_assert!(decoded.len() >= masked.len());
        prop_assert_eq!(&decoded[..masked.len()], &masked[..]);
        prop_assert!(decoded[masked.len()..].iter().all(|&u| u == 0));
    }
}
