// msr605/src/protocol/responses/mod.rs

pub mod data;
pub mod info;
pub mod status;

pub use data::{parse_iso_sections, parse_raw_sections};

use crate::error::CommFailure;
use crate::protocol::commands::Command;
use crate::protocol::frame::ResponseFrame;
use crate::types::{Coercivity, DeviceStatus};

/// High-level Response enum. Per-family decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here against the
/// command that was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A plain acknowledgement or rejection
    Status(DeviceStatus),
    /// Communication-test pass pattern
    TestAck,
    Coercivity(Coercivity),
    /// Acked bits-per-character values, the device's source of truth
    BpcSettings { track1: u8, track2: u8, track3: u8 },
    Model(String),
    Firmware(String),
    /// Per-track payloads from a card read plus the trailing status
    CardData {
        sections: [Vec<u8>; 3],
        status: DeviceStatus,
    },
}

impl Response {
    /// The device status this response conveys; data-bearing replies imply
    /// the device accepted the command.
    pub fn status(&self) -> DeviceStatus {
        match self {
            Self::Status(s) => *s,
            Self::CardData { status, .. } => *status,
            _ => DeviceStatus::Ok,
        }
    }

    /// Decode a structurally validated frame in the context of the command
    /// that elicited it. Semantic mismatches (a rejection where data was
    /// expected) surface as [`Response::Status`] so the controller can map
    /// them to the operation's error type; structural problems inside the
    /// payload are [`CommFailure::Malformed`].
    pub fn decode(cmd: &Command, frame: &ResponseFrame) -> Result<Self, CommFailure> {
        match cmd {
            Command::CommunicationTest => Ok(status::decode_comm_test(frame)),
            Command::GetCoercivity => Ok(status::decode_coercivity(frame)),
            Command::SetBpc { .. } => info::decode_bpc(frame),
            Command::GetModel => Ok(Self::Model(info::decode_text(frame))),
            Command::GetFirmware => Ok(Self::Firmware(info::decode_text(frame))),
            Command::ReadIso => {
                let sections = data::parse_iso_sections(&frame.payload)?;
                Ok(Self::CardData {
                    sections,
                    status: frame.device_status(),
                })
            }
            Command::ReadRaw => {
                let sections = data::parse_raw_sections(&frame.payload)?;
                Ok(Self::CardData {
                    sections,
                    status: frame.device_status(),
                })
            }
            _ => Ok(Self::Status(frame.device_status())),
        }
    }
}
