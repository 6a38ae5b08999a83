// msr605/src/protocol/commands/mod.rs

pub mod config;
pub mod write;

pub use config::{bpi_density_byte, erase_select_byte};
pub use write::{encode_iso_block, encode_raw_block};

use crate::constants;
use crate::protocol::frame::ResponseShape;
use crate::types::{Bpc, Bpi, Coercivity, LedColor, TrackNumber};

/// High-level Command enum. Every device operation is one variant with one
/// authoritative opcode, payload encoder and response shape; new commands
/// are added here and dispatch stays exhaustive.
#[derive(Debug, Clone)]
pub enum Command {
    Reset,
    ReadIso,
    ReadRaw,
    /// Track payloads already encoded by the codec; empty tracks produce
    /// empty sections
    WriteIso {
        tracks: [Vec<u8>; 3],
    },
    WriteRaw {
        tracks: [Vec<u8>; 3],
    },
    Erase {
        track1: bool,
        track2: bool,
        track3: bool,
    },
    CommunicationTest,
    RamTest,
    SensorTest,
    AllLedsOff,
    AllLedsOn,
    LedOn {
        color: LedColor,
    },
    SetBpi {
        track: TrackNumber,
        bpi: Bpi,
    },
    SetBpc {
        track1: Bpc,
        track2: Bpc,
        track3: Bpc,
    },
    SetCoercivity {
        coercivity: Coercivity,
    },
    GetCoercivity,
    GetModel,
    GetFirmware,
}

impl Command {
    /// Opcode byte following the ESC prefix.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Reset => constants::CMD_RESET,
            Self::ReadIso => constants::CMD_READ_ISO,
            Self::ReadRaw => constants::CMD_READ_RAW,
            Self::WriteIso { .. } => constants::CMD_WRITE_ISO,
            Self::WriteRaw { .. } => constants::CMD_WRITE_RAW,
            Self::Erase { .. } => constants::CMD_ERASE,
            Self::CommunicationTest => constants::CMD_COMM_TEST,
            Self::RamTest => constants::CMD_RAM_TEST,
            Self::SensorTest => constants::CMD_SENSOR_TEST,
            Self::AllLedsOff => constants::CMD_ALL_LEDS_OFF,
            Self::AllLedsOn => constants::CMD_ALL_LEDS_ON,
            Self::LedOn { color } => match color {
                LedColor::Green => constants::CMD_LED_GREEN_ON,
                LedColor::Yellow => constants::CMD_LED_YELLOW_ON,
                LedColor::Red => constants::CMD_LED_RED_ON,
            },
            Self::SetBpi { .. } => constants::CMD_SET_BPI,
            Self::SetBpc { .. } => constants::CMD_SET_BPC,
            Self::SetCoercivity { coercivity } => match coercivity {
                Coercivity::High => constants::CMD_SET_HICO,
                Coercivity::Low => constants::CMD_SET_LOWCO,
            },
            Self::GetCoercivity => constants::CMD_GET_COERCIVITY,
            Self::GetModel => constants::CMD_GET_MODEL,
            Self::GetFirmware => constants::CMD_GET_FIRMWARE,
        }
    }

    /// Payload bytes following the opcode; empty for most commands.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Self::WriteIso { tracks } => encode_iso_block(tracks),
            Self::WriteRaw { tracks } => encode_raw_block(tracks),
            Self::Erase {
                track1,
                track2,
                track3,
            } => vec![erase_select_byte(*track1, *track2, *track3)],
            Self::SetBpi { track, bpi } => vec![bpi_density_byte(*track, *bpi)],
            Self::SetBpc {
                track1,
                track2,
                track3,
            } => vec![track1.as_u8(), track2.as_u8(), track3.as_u8()],
            _ => Vec::new(),
        }
    }

    /// The one response shape this command elicits.
    pub fn response_shape(&self) -> ResponseShape {
        match self {
            Self::ReadIso => ResponseShape::IsoData,
            Self::ReadRaw => ResponseShape::RawData,
            Self::SetBpc { .. } => ResponseShape::BpcReply,
            Self::GetModel => ResponseShape::Model,
            Self::GetFirmware => ResponseShape::Firmware,
            _ => ResponseShape::Status,
        }
    }
}
