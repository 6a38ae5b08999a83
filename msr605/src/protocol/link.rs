// msr605/src/protocol/link.rs

//! Framing-layer I/O: one command out, one response back.
//!
//! `receive` accumulates transport reads under a single deadline and feeds
//! them to the frame scanner, so a response split across serial reads is
//! reassembled and a response that never completes fails with `Timeout`
//! instead of hanging. No retries happen here; retry policy belongs to the
//! controller.

use std::time::Instant;

use crate::error::CommFailure;
use crate::protocol::commands::Command;
use crate::protocol::frame::{self, ResponseFrame, ResponseShape, Scan};
use crate::transport::Transport;
use crate::utils::{bytes_to_hex, ms};

/// Serialize and write one command.
pub fn send(transport: &mut dyn Transport, cmd: &Command) -> Result<(), CommFailure> {
    let bytes = frame::encode(cmd);
    log::debug!("-> {}", bytes_to_hex(&bytes));
    transport.send(&bytes)
}

/// Read until one complete frame of `shape` is assembled or the deadline
/// elapses.
pub fn receive(
    transport: &mut dyn Transport,
    shape: ResponseShape,
    timeout_ms: u64,
) -> Result<ResponseFrame, CommFailure> {
    let deadline = Instant::now() + ms(timeout_ms);
    let mut buf: Vec<u8> = Vec::new();

    loop {
        if let Scan::Complete(frame) = frame::scan(shape, &buf)? {
            log::debug!("<- {}", bytes_to_hex(&buf));
            return Ok(frame);
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(CommFailure::Timeout);
        }
        let remaining = (deadline - now).as_millis() as u64;

        let chunk = transport.receive(remaining.max(1))?;
        log::trace!("<~ {} ({} bytes buffered)", bytes_to_hex(&chunk), buf.len());
        buf.extend_from_slice(&chunk);
    }
}
