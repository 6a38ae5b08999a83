use msr605::constants::{DATA_HEADER, END_MARK, ESC, FS, STATUS_OK};
use msr605::error::CommFailure;
use msr605::protocol::{Command, ResponseShape, link};
use msr605::transport::{MockTransport, Transport};
use std::time::Instant;

#[test]
fn send_then_receive_round_trip() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![ESC, STATUS_OK]);
    link::send(&mut mock, &Command::Reset).unwrap();
    let frame = link::receive(&mut mock, ResponseShape::Status, 1000).unwrap();
    assert_eq!(frame.payload, vec![STATUS_OK]);
    assert_eq!(mock.sent, vec![vec![ESC, 0x61]]);
}

#[test]
fn receive_reassembles_byte_at_a_time() {
    let mut wire = vec![ESC, DATA_HEADER, ESC, 0x01];
    wire.extend_from_slice(b"%AB?F");
    wire.extend_from_slice(&[END_MARK, FS, ESC, STATUS_OK]);

    let mut mock = MockTransport::new();
    for byte in &wire {
        mock.push_response(vec![*byte]);
    }
    let frame = link::receive(&mut mock, ResponseShape::IsoData, 1000).unwrap();
    assert_eq!(frame.raw_length, wire.len());
}

#[test]
fn receive_times_out_promptly() {
    // the mock's empty queue answers Timeout immediately; the link layer
    // must pass it through rather than spin until the deadline
    let mut mock = MockTransport::new();
    let started = Instant::now();
    let err = link::receive(&mut mock, ResponseShape::Status, 5_000).unwrap_err();
    assert!(matches!(err, CommFailure::Timeout));
    assert!(started.elapsed().as_secs() < 5);
}

#[test]
fn write_failure_is_write_error() {
    let mut mock = MockTransport::new();
    mock.set_write_failures(1);
    assert!(matches!(
        link::send(&mut mock, &Command::Reset),
        Err(CommFailure::WriteError)
    ));
}

#[test]
fn closed_transport_surfaces_closed() {
    let mut mock = MockTransport::new();
    mock.close().unwrap();
    assert!(matches!(
        link::receive(&mut mock, ResponseShape::Status, 100),
        Err(CommFailure::Closed)
    ));
}
