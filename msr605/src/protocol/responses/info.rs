// msr605/src/protocol/responses/info.rs

use crate::constants::STATUS_OK;
use crate::error::CommFailure;
use crate::protocol::frame::ResponseFrame;
use crate::protocol::parser;
use crate::protocol::responses::Response;

/// Model and firmware replies carry plain ASCII; anything unprintable the
/// device might emit is replaced rather than dropped.
pub fn decode_text(frame: &ResponseFrame) -> String {
    String::from_utf8_lossy(&frame.payload).into_owned()
}

/// A SetBpc acknowledgement echoes the three values the device actually
/// applied; a rejection collapses to a plain status frame.
pub fn decode_bpc(frame: &ResponseFrame) -> Result<Response, CommFailure> {
    if frame.status_byte != Some(STATUS_OK) {
        return Ok(Response::Status(frame.device_status()));
    }
    parser::expect_byte(&frame.payload, 0, STATUS_OK, "bpc ack status")?;
    let track1 = parser::byte_at(&frame.payload, 1)?;
    let track2 = parser::byte_at(&frame.payload, 2)?;
    let track3 = parser::byte_at(&frame.payload, 3)?;
    Ok(Response::BpcSettings {
        track1,
        track2,
        track3,
    })
}
