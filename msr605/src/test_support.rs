//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup so tests across the crate
//! and the tests/ directory build sessions and wire fixtures the same way.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{DATA_HEADER, END_MARK, ESC, FS, STATUS_OK};
use crate::device::{Closed, Device, Open};
use crate::error::CommFailure;
use crate::transport::{MockTransport, Transport};
use crate::types::{Track, TrackNumber};

/// A plain status acknowledgement frame.
#[doc(hidden)]
pub fn ack_frame() -> Vec<u8> {
    status_frame(STATUS_OK)
}

/// A status frame carrying the given status byte.
#[doc(hidden)]
pub fn status_frame(status: u8) -> Vec<u8> {
    vec![ESC, status]
}

/// An ISO read response carrying the given track contents, encoded exactly
/// as the codec would put them on the card. Empty contents produce no
/// section.
#[doc(hidden)]
pub fn iso_read_frame(track1: &[u8], track2: &[u8], track3: &[u8]) -> Vec<u8> {
    let contents = [track1, track2, track3];
    let mut frame = vec![ESC, DATA_HEADER];
    for (i, content) in contents.iter().enumerate() {
        if content.is_empty() {
            continue;
        }
        let number = TrackNumber::new(i as u8 + 1).expect("fixture track number");
        let track = Track::with_content(number, content.to_vec());
        let payload = crate::codec::encode_iso(&track).expect("fixture track encodes");
        frame.push(ESC);
        frame.push(number.tag());
        frame.extend_from_slice(&payload);
    }
    frame.extend_from_slice(&[END_MARK, FS, ESC, STATUS_OK]);
    frame
}

/// A raw read response from already-packed per-track payloads.
#[doc(hidden)]
pub fn raw_read_frame(tracks: &[Vec<u8>; 3]) -> Vec<u8> {
    let mut frame = vec![ESC, DATA_HEADER];
    for (i, payload) in tracks.iter().enumerate() {
        if payload.is_empty() {
            continue;
        }
        frame.push(ESC);
        frame.push(i as u8 + 1);
        frame.push(payload.len() as u8);
        frame.extend_from_slice(payload);
    }
    frame.extend_from_slice(&[END_MARK, FS, ESC, STATUS_OK]);
    frame
}

/// Build a closed Device over a MockTransport pre-seeded with the open-time
/// reset ack and then the given frames.
#[doc(hidden)]
pub fn closed_mock_device(responses: Vec<Vec<u8>>) -> Device<Closed> {
    let mut mock = MockTransport::new();
    mock.push_response(ack_frame());
    for resp in responses {
        mock.push_response(resp);
    }
    Device::new_with_transport(Box::new(mock))
}

/// Convenience: an opened Device backed by a seeded MockTransport. The
/// reset ack consumed by `open` is seeded automatically; `responses` are
/// the frames subsequent operations will see.
#[doc(hidden)]
pub fn open_mock_device(responses: Vec<Vec<u8>>) -> crate::Result<Device<Open>> {
    Ok(closed_mock_device(responses).open()?)
}

/// Mock transport wrapper that leaves the underlying MockTransport
/// inspectable after the Device has taken ownership, for tests that assert
/// on the exact bytes sent.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), CommFailure> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>, CommFailure> {
        self.inner.borrow_mut().receive(timeout_ms)
    }

    fn close(&mut self) -> Result<(), CommFailure> {
        self.inner.borrow_mut().close()
    }
}

/// As [`open_mock_device`], but also returns a handle onto the mock for
/// inspecting recorded traffic.
#[doc(hidden)]
pub fn open_shared_mock_device(
    responses: Vec<Vec<u8>>,
) -> crate::Result<(Device<Open>, Rc<RefCell<MockTransport>>)> {
    let mut mock = MockTransport::new();
    mock.push_response(ack_frame());
    for resp in responses {
        mock.push_response(resp);
    }
    let inner = Rc::new(RefCell::new(mock));
    let device = Device::new_with_transport(Box::new(SharedTransport {
        inner: inner.clone(),
    }));
    Ok((device.open()?, inner))
}
