// msr605/src/protocol/frame.rs

//! Wire envelope for the MSR605 protocol.
//!
//! Commands are `ESC + opcode + payload`. Responses come in a small set of
//! structural shapes; [`scan`] assembles them incrementally so the link
//! layer can feed it partial reads until a frame completes or the shape is
//! violated.

use crate::constants::{
    DATA_HEADER, END_MARK, ESC, FIRMWARE_LEN, FS, MODEL_MAX_LEN, MODEL_TERMINATOR, STATUS_OK,
};
use crate::error::CommFailure;
use crate::protocol::commands::Command;
use crate::types::DeviceStatus;

/// Acknowledgement classification of a response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Ack,
    Nack,
    Unknown,
}

impl FrameStatus {
    pub fn classify(byte: u8) -> Self {
        match DeviceStatus::from_byte(byte) {
            DeviceStatus::Ok => Self::Ack,
            DeviceStatus::Unknown(_) => Self::Unknown,
            _ => Self::Nack,
        }
    }
}

/// Structural shape of the response a command elicits. Every command maps
/// to exactly one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `ESC + one byte` (status acks, communication test, coercivity query)
    Status,
    /// `ESC + 0x30 + three acked values`, or a plain status on rejection
    BpcReply,
    /// `ESC + model bytes + 'S'`
    Model,
    /// `ESC + fixed-length version string`
    Firmware,
    /// `ESC 's' + delimiter-parsed sections + '? FS' + ESC + status`
    IsoData,
    /// `ESC 's' + length-prefixed sections + '? FS' + ESC + status`
    RawData,
}

/// A structurally validated response. Constructed only by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    pub status: FrameStatus,
    pub payload: Vec<u8>,
    /// Total wire length, for diagnostics
    pub raw_length: usize,
    /// The literal status byte, where the shape carries one
    pub status_byte: Option<u8>,
}

impl ResponseFrame {
    fn new(status: FrameStatus, payload: Vec<u8>, raw_length: usize, status_byte: Option<u8>) -> Self {
        Self {
            status,
            payload,
            raw_length,
            status_byte,
        }
    }

    pub fn device_status(&self) -> DeviceStatus {
        match self.status_byte {
            Some(b) => DeviceStatus::from_byte(b),
            None => DeviceStatus::Ok,
        }
    }
}

/// Outcome of scanning an accumulated buffer against a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    Complete(ResponseFrame),
    Incomplete,
}

/// Encode a command into its full wire form.
pub fn encode(cmd: &Command) -> Vec<u8> {
    let payload = cmd.payload();
    let mut out = Vec::with_capacity(2 + payload.len());
    out.push(ESC);
    out.push(cmd.opcode());
    out.extend_from_slice(&payload);
    out
}

/// Scan an accumulated receive buffer for one complete frame of `shape`.
///
/// Returns `Incomplete` while more bytes could still complete the frame,
/// `Malformed` as soon as the bytes cannot be a frame of this shape, and
/// never interprets a malformed buffer as success. Trailing bytes beyond
/// a complete frame are malformed: the protocol has one response in flight
/// at a time.
pub fn scan(shape: ResponseShape, buf: &[u8]) -> Result<Scan, CommFailure> {
    match shape {
        ResponseShape::Status => scan_status(buf),
        ResponseShape::BpcReply => scan_bpc_reply(buf),
        ResponseShape::Model => scan_model(buf),
        ResponseShape::Firmware => scan_firmware(buf),
        ResponseShape::IsoData => scan_data(buf, false),
        ResponseShape::RawData => scan_data(buf, true),
    }
}

fn need(buf: &[u8], len: usize) -> bool {
    buf.len() < len
}

fn expect_esc(buf: &[u8], idx: usize) -> Result<(), CommFailure> {
    if buf[idx] != ESC {
        return Err(CommFailure::Malformed(format!(
            "expected ESC at offset {}, got {:#04x}",
            idx, buf[idx]
        )));
    }
    Ok(())
}

fn exact_length(buf: &[u8], len: usize) -> Result<(), CommFailure> {
    if buf.len() > len {
        return Err(CommFailure::Malformed(format!(
            "{} trailing bytes after complete frame",
            buf.len() - len
        )));
    }
    Ok(())
}

fn scan_status(buf: &[u8]) -> Result<Scan, CommFailure> {
    if need(buf, 2) {
        return Ok(Scan::Incomplete);
    }
    expect_esc(buf, 0)?;
    exact_length(buf, 2)?;
    let byte = buf[1];
    Ok(Scan::Complete(ResponseFrame::new(
        FrameStatus::classify(byte),
        vec![byte],
        2,
        Some(byte),
    )))
}

fn scan_bpc_reply(buf: &[u8]) -> Result<Scan, CommFailure> {
    if need(buf, 2) {
        return Ok(Scan::Incomplete);
    }
    expect_esc(buf, 0)?;
    if buf[1] != STATUS_OK {
        // rejected: plain status frame
        exact_length(buf, 2)?;
        return Ok(Scan::Complete(ResponseFrame::new(
            FrameStatus::classify(buf[1]),
            vec![buf[1]],
            2,
            Some(buf[1]),
        )));
    }
    if need(buf, 5) {
        return Ok(Scan::Incomplete);
    }
    exact_length(buf, 5)?;
    Ok(Scan::Complete(ResponseFrame::new(
        FrameStatus::Ack,
        buf[1..5].to_vec(),
        5,
        Some(buf[1]),
    )))
}

fn scan_model(buf: &[u8]) -> Result<Scan, CommFailure> {
    if need(buf, 2) {
        return Ok(Scan::Incomplete);
    }
    expect_esc(buf, 0)?;
    match buf[1..].iter().position(|&b| b == MODEL_TERMINATOR) {
        Some(pos) => {
            let end = 1 + pos; // index of the terminator
            exact_length(buf, end + 1)?;
            Ok(Scan::Complete(ResponseFrame::new(
                FrameStatus::Ack,
                buf[1..end].to_vec(),
                end + 1,
                None,
            )))
        }
        None if buf.len() > 1 + MODEL_MAX_LEN => Err(CommFailure::Malformed(
            "model reply exceeds maximum length".into(),
        )),
        None => Ok(Scan::Incomplete),
    }
}

fn scan_firmware(buf: &[u8]) -> Result<Scan, CommFailure> {
    if need(buf, 1 + FIRMWARE_LEN) {
        if !buf.is_empty() {
            expect_esc(buf, 0)?;
        }
        return Ok(Scan::Incomplete);
    }
    expect_esc(buf, 0)?;
    exact_length(buf, 1 + FIRMWARE_LEN)?;
    Ok(Scan::Complete(ResponseFrame::new(
        FrameStatus::Ack,
        buf[1..1 + FIRMWARE_LEN].to_vec(),
        1 + FIRMWARE_LEN,
        None,
    )))
}

/// Data blocks end with `? FS` followed by `ESC status`. ISO sections are
/// delimiter-parsed (payload bytes are printable ASCII, so ESC and FS are
/// unambiguous); raw sections carry a length byte and arbitrary payload.
fn scan_data(buf: &[u8], length_prefixed: bool) -> Result<Scan, CommFailure> {
    if need(buf, 2) {
        return Ok(Scan::Incomplete);
    }
    expect_esc(buf, 0)?;
    if buf[1] != DATA_HEADER {
        return Err(CommFailure::Malformed(format!(
            "expected data header, got {:#04x}",
            buf[1]
        )));
    }

    let mut i = 2usize;
    loop {
        if need(buf, i + 1) {
            return Ok(Scan::Incomplete);
        }
        match buf[i] {
            ESC => {
                if need(buf, i + 2) {
                    return Ok(Scan::Incomplete);
                }
                let tag = buf[i + 1];
                if !(1..=3).contains(&tag) {
                    return Err(CommFailure::Malformed(format!(
                        "unexpected section tag {:#04x}",
                        tag
                    )));
                }
                i += 2;
                if length_prefixed {
                    if need(buf, i + 1) {
                        return Ok(Scan::Incomplete);
                    }
                    let len = buf[i] as usize;
                    i += 1 + len;
                } else {
                    // delimiter-parsed: data runs to the next ESC or to the
                    // block end mark; a '?' followed by anything else is the
                    // track's own end sentinel and stays in the data
                    loop {
                        if need(buf, i + 1) {
                            return Ok(Scan::Incomplete);
                        }
                        match buf[i] {
                            ESC => break,
                            END_MARK => {
                                if need(buf, i + 2) {
                                    return Ok(Scan::Incomplete);
                                }
                                if buf[i + 1] == FS {
                                    break;
                                }
                                i += 1;
                            }
                            _ => i += 1,
                        }
                    }
                }
            }
            END_MARK => {
                if need(buf, i + 4) {
                    return Ok(Scan::Incomplete);
                }
                if buf[i + 1] != FS {
                    return Err(CommFailure::Malformed(
                        "data block end mark not followed by FS".into(),
                    ));
                }
                expect_esc(buf, i + 2)?;
                let status = buf[i + 3];
                exact_length(buf, i + 4)?;
                return Ok(Scan::Complete(ResponseFrame::new(
                    FrameStatus::classify(status),
                    buf[2..i].to_vec(),
                    i + 4,
                    Some(status),
                )));
            }
            other => {
                return Err(CommFailure::Malformed(format!(
                    "unexpected byte {:#04x} in data block",
                    other
                )));
            }
        }
    }
}
