// msr605/src/types.rs

use derive_more::Display;

use crate::constants;
use crate::{Error, Result};

/// Track number - Newtype-style enum over the three ISO7811 tracks
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackNumber {
    #[display(fmt = "1")]
    One,
    #[display(fmt = "2")]
    Two,
    #[display(fmt = "3")]
    Three,
}

impl TrackNumber {
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    pub fn new(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(Error::InvalidTrack(other)),
        }
    }

    /// Zero-based index into per-track tables
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Section tag byte used inside data blocks
    pub fn tag(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        Self::new(tag)
    }
}

/// Bits per character, constrained to 5..=8. One bit of each character is
/// parity, so a track at bpc `b` carries codes in `0..2^(b-1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bpc(u8);

impl Bpc {
    pub fn new(bits: u8) -> Result<Self> {
        if (5..=8).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(Error::InvalidBpc(bits))
        }
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// Number of data bits per character (excluding parity)
    pub fn data_bits(self) -> u8 {
        self.0 - 1
    }

    /// Highest encodable character code (exclusive)
    pub fn code_limit(self) -> u8 {
        1 << self.data_bits()
    }
}

/// Bits per inch, one of the two densities the device supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bpi {
    Bpi75,
    Bpi210,
}

impl Bpi {
    pub fn new(density: u16) -> Result<Self> {
        match density {
            75 => Ok(Self::Bpi75),
            210 => Ok(Self::Bpi210),
            other => Err(Error::InvalidBpi(other)),
        }
    }

    pub fn as_u16(self) -> u16 {
        match self {
            Self::Bpi75 => 75,
            Self::Bpi210 => 210,
        }
    }
}

/// Per-track density and character-width configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSettings {
    pub bpc: Bpc,
    pub bpi: Bpi,
}

impl TrackSettings {
    /// ISO7811 nominal settings for the given track: (7, 210) for track 1,
    /// (5, 75) for track 2, (5, 210) for track 3.
    pub fn nominal(number: TrackNumber) -> Self {
        let (bpc, bpi) = match number {
            TrackNumber::One => (7, Bpi::Bpi210),
            TrackNumber::Two => (5, Bpi::Bpi75),
            TrackNumber::Three => (5, Bpi::Bpi210),
        };
        Self {
            // nominal widths are always in range
            bpc: Bpc(bpc),
            bpi,
        }
    }
}

/// One track's worth of card data plus the settings it was (or will be)
/// encoded with. `content` holds ASCII characters in ISO mode and bpc-wide
/// units in raw mode; an empty content means "no data on this track".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub number: TrackNumber,
    pub settings: TrackSettings,
    pub content: Vec<u8>,
}

impl Track {
    /// Empty track at the nominal settings for its number.
    pub fn empty(number: TrackNumber) -> Self {
        Self {
            number,
            settings: TrackSettings::nominal(number),
            content: Vec::new(),
        }
    }

    /// Track carrying the given ASCII content at nominal settings.
    pub fn with_content(number: TrackNumber, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            ..Self::empty(number)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Pure configuration mutation; the validated newtype carries the
    /// range constraint.
    pub fn set_bpc(&mut self, bpc: Bpc) {
        self.settings.bpc = bpc;
    }

    /// Pure configuration mutation; the validated newtype carries the
    /// density constraint.
    pub fn set_bpi(&mut self, bpi: Bpi) {
        self.settings.bpi = bpi;
    }

    /// Content as a string, with non-ASCII bytes replaced. Intended for
    /// display; ISO-mode content is always plain ASCII.
    pub fn content_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// Magnetic coercivity class of the stripe being written.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coercivity {
    #[display(fmt = "hi-co")]
    High,
    #[display(fmt = "low-co")]
    Low,
}

/// The three indicator LEDs on the device face.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedColor {
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "yellow")]
    Yellow,
    #[display(fmt = "red")]
    Red,
}

/// On/off mirror of the device LEDs, updated only on acknowledged commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedState {
    pub green: bool,
    pub yellow: bool,
    pub red: bool,
}

impl LedState {
    pub fn all_on() -> Self {
        Self {
            green: true,
            yellow: true,
            red: true,
        }
    }

    /// State after a single-color command: the device turns the other two off.
    pub fn only(color: LedColor) -> Self {
        let mut s = Self::default();
        match color {
            LedColor::Green => s.green = true,
            LedColor::Yellow => s.yellow = true,
            LedColor::Red => s.red = true,
        }
        s
    }
}

/// Card data format used by read and write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    /// ISO7811 character data, alphabet-checked and LRC-framed by the codec
    Iso,
    /// bpc-wide units packed verbatim, no alphabet validation
    Raw,
}

/// The three self-tests the device implements.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SelfTest {
    #[display(fmt = "communication")]
    Communication,
    #[display(fmt = "ram")]
    Ram,
    #[display(fmt = "sensor")]
    Sensor,
}

/// Classified device status byte from a status frame.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    #[display(fmt = "ok")]
    Ok,
    #[display(fmt = "read/write error")]
    ReadWriteError,
    #[display(fmt = "command format error")]
    CommandFormat,
    #[display(fmt = "invalid command")]
    InvalidCommand,
    #[display(fmt = "invalid card swipe")]
    InvalidSwipe,
    #[display(fmt = "failed")]
    Failed,
    #[display(fmt = "unknown status {:#04x}", _0)]
    Unknown(u8),
}

impl DeviceStatus {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            constants::STATUS_OK => Self::Ok,
            constants::STATUS_READ_WRITE_ERROR => Self::ReadWriteError,
            constants::STATUS_COMMAND_FORMAT => Self::CommandFormat,
            constants::STATUS_INVALID_COMMAND => Self::InvalidCommand,
            constants::STATUS_INVALID_SWIPE => Self::InvalidSwipe,
            constants::STATUS_FAILED => Self::Failed,
            other => Self::Unknown(other),
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The wire byte this status was classified from.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Ok => constants::STATUS_OK,
            Self::ReadWriteError => constants::STATUS_READ_WRITE_ERROR,
            Self::CommandFormat => constants::STATUS_COMMAND_FORMAT,
            Self::InvalidCommand => constants::STATUS_INVALID_COMMAND,
            Self::InvalidSwipe => constants::STATUS_INVALID_SWIPE,
            Self::Failed => constants::STATUS_FAILED,
            Self::Unknown(byte) => byte,
        }
    }
}
