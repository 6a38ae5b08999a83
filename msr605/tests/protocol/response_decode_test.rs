#[path = "../common/mod.rs"]
mod common;

use msr605::constants::{ESC, STATUS_OK};
use msr605::protocol::{Command, Response, ResponseShape, Scan, frame};
use msr605::{Coercivity, DeviceStatus};

fn complete(shape: ResponseShape, buf: &[u8]) -> msr605::protocol::ResponseFrame {
    match frame::scan(shape, buf).unwrap() {
        Scan::Complete(f) => f,
        Scan::Incomplete => panic!("fixture frame incomplete"),
    }
}

#[test]
fn read_response_splits_tracks() {
    let wire = common::fixtures::sample_card_read_frame();
    let frame = complete(ResponseShape::IsoData, &wire);
    match Response::decode(&Command::ReadIso, &frame).unwrap() {
        Response::CardData { sections, status } => {
            assert_eq!(status, DeviceStatus::Ok);
            assert!(sections[0].starts_with(b"%"));
            assert!(sections[1].starts_with(b";"));
            assert!(sections[2].is_empty());
        }
        other => panic!("expected CardData, got {:?}", other),
    }
}

#[test]
fn raw_read_response_keeps_packed_bytes() {
    let packed = vec![0x1B, 0x3F, 0x00, 0xFF];
    let wire = msr605::test_support::raw_read_frame(&[packed.clone(), Vec::new(), Vec::new()]);
    let frame = complete(ResponseShape::RawData, &wire);
    match Response::decode(&Command::ReadRaw, &frame).unwrap() {
        Response::CardData { sections, .. } => assert_eq!(sections[0], packed),
        other => panic!("expected CardData, got {:?}", other),
    }
}

#[test]
fn model_and_firmware_strings() {
    let frame = complete(ResponseShape::Model, &[ESC, b'3', b'S']);
    assert_eq!(
        Response::decode(&Command::GetModel, &frame).unwrap(),
        Response::Model("3".into())
    );

    let mut wire = vec![ESC];
    wire.extend_from_slice(b"REV 2.05");
    let frame = complete(ResponseShape::Firmware, &wire);
    assert_eq!(
        Response::decode(&Command::GetFirmware, &frame).unwrap(),
        Response::Firmware("REV 2.05".into())
    );
}

#[test]
fn coercivity_and_bpc_replies() {
    let frame = complete(ResponseShape::Status, &[ESC, b'H']);
    assert_eq!(
        Response::decode(&Command::GetCoercivity, &frame).unwrap(),
        Response::Coercivity(Coercivity::High)
    );

    let frame = complete(ResponseShape::BpcReply, &[ESC, STATUS_OK, 7, 5, 5]);
    let cmd = Command::SetBpc {
        track1: msr605::Bpc::new(7).unwrap(),
        track2: msr605::Bpc::new(5).unwrap(),
        track3: msr605::Bpc::new(5).unwrap(),
    };
    assert_eq!(
        Response::decode(&cmd, &frame).unwrap(),
        Response::BpcSettings {
            track1: 7,
            track2: 5,
            track3: 5
        }
    );
}

#[test]
fn rejection_never_reads_as_success() {
    let frame = complete(ResponseShape::Status, &[ESC, 0x41]);
    let resp = Response::decode(&Command::RamTest, &frame).unwrap();
    assert!(!resp.status().is_ok());
}
