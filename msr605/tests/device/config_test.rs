use msr605::constants::{ESC, STATUS_OK};
use msr605::error::DeviceError;
use msr605::test_support::{ack_frame, open_mock_device, open_shared_mock_device};
use msr605::{Bpc, Bpi, Coercivity, TrackNumber};

#[test]
fn bpc_acked_values_are_source_of_truth() {
    // request 8 bits on track 1; the device clamps to 7
    let mut dev = open_mock_device(vec![vec![ESC, STATUS_OK, 7, 5, 5]]).unwrap();
    let (t1, t2, t3) = dev
        .set_bpc(
            Bpc::new(8).unwrap(),
            Bpc::new(5).unwrap(),
            Bpc::new(5).unwrap(),
        )
        .unwrap();
    assert_eq!((t1.as_u8(), t2.as_u8(), t3.as_u8()), (7, 5, 5));
    assert_eq!(dev.track_settings()[0].bpc.as_u8(), 7);
}

#[test]
fn select_bpi_sends_one_command_per_track() {
    let (mut dev, mock) =
        open_shared_mock_device(vec![ack_frame(), ack_frame(), ack_frame()]).unwrap();
    let sent_after_open = mock.borrow().sent.len();

    dev.select_bpi(Bpi::Bpi210, Bpi::Bpi75, Bpi::Bpi210).unwrap();

    let sent = mock.borrow().sent.clone();
    assert_eq!(sent.len(), sent_after_open + 3);
    assert_eq!(sent[sent_after_open], vec![ESC, 0x62, 0xA1]);
    assert_eq!(sent[sent_after_open + 1], vec![ESC, 0x62, 0x4B]);
    assert_eq!(sent[sent_after_open + 2], vec![ESC, 0x62, 0xC1]);
}

#[test]
fn bpi_rejection_leaves_mirror_untouched() {
    let mut dev = open_mock_device(vec![msr605::test_support::status_frame(0x41)]).unwrap();
    let before = *dev.track_settings();
    assert!(matches!(
        dev.set_bpi(TrackNumber::One, Bpi::Bpi75),
        Err(DeviceError::Rejected(_))
    ));
    assert_eq!(*dev.track_settings(), before);
}

#[test]
fn coercivity_round_trip_updates_mirror() {
    let mut dev = open_mock_device(vec![ack_frame(), vec![ESC, b'H']]).unwrap();
    dev.set_coercivity(Coercivity::High).unwrap();
    assert_eq!(dev.coercivity_status().unwrap(), Coercivity::High);
    assert_eq!(dev.cached_coercivity(), Some(Coercivity::High));
}

#[test]
fn narrow_bpc_applies_to_codec_validation() {
    // after the device acks 5 bits on track 1, characters above code 15
    // stop being encodable at the session's settings
    let mut dev = open_mock_device(vec![vec![ESC, STATUS_OK, 5, 5, 5]]).unwrap();
    dev.set_bpc(
        Bpc::new(5).unwrap(),
        Bpc::new(5).unwrap(),
        Bpc::new(5).unwrap(),
    )
    .unwrap();

    let settings = dev.track_settings()[0];
    let mut track = msr605::Track::with_content(TrackNumber::One, *b"0");
    track.settings = settings;
    // '0' is code 0x10 on track 1, out of range at 5 bpc
    assert!(msr605::codec::encode_iso(&track).is_err());

    let mut track = msr605::Track::with_content(TrackNumber::One, *b"!");
    track.settings = settings;
    // '!' is code 0x01, still encodable
    assert!(msr605::codec::encode_iso(&track).is_ok());
}
