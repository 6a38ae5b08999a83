// msr605/src/constants.rs
//! Wire protocol constants for the MSR605 command/response envelope

/// Every command and most response frames start with ESC
pub const ESC: u8 = 0x1B;

/// File separator byte, second half of the data-block end mark
pub const FS: u8 = 0x1C;

/// First half of the data-block end mark ('?')
pub const END_MARK: u8 = 0x3F;

/// Data-block header byte following ESC ('s')
pub const DATA_HEADER: u8 = 0x73;

// Command opcodes (sent as ESC + opcode)
pub const CMD_RESET: u8 = 0x61; // 'a'
pub const CMD_READ_ISO: u8 = 0x72; // 'r'
pub const CMD_WRITE_ISO: u8 = 0x77; // 'w'
pub const CMD_READ_RAW: u8 = 0x6D; // 'm'
pub const CMD_WRITE_RAW: u8 = 0x6E; // 'n'
pub const CMD_COMM_TEST: u8 = 0x65; // 'e'
pub const CMD_SENSOR_TEST: u8 = 0x86;
pub const CMD_RAM_TEST: u8 = 0x87;
pub const CMD_ERASE: u8 = 0x63; // 'c'
pub const CMD_ALL_LEDS_OFF: u8 = 0x81;
pub const CMD_ALL_LEDS_ON: u8 = 0x82;
pub const CMD_LED_GREEN_ON: u8 = 0x83;
pub const CMD_LED_YELLOW_ON: u8 = 0x84;
pub const CMD_LED_RED_ON: u8 = 0x85;
pub const CMD_SET_BPI: u8 = 0x62; // 'b'
pub const CMD_SET_BPC: u8 = 0x6F; // 'o'
pub const CMD_SET_HICO: u8 = 0x78; // 'x'
pub const CMD_SET_LOWCO: u8 = 0x79; // 'y'
pub const CMD_GET_COERCIVITY: u8 = 0x64; // 'd'
pub const CMD_GET_MODEL: u8 = 0x74; // 't'
pub const CMD_GET_FIRMWARE: u8 = 0x76; // 'v'

// Device status bytes (second byte of a status frame)
pub const STATUS_OK: u8 = 0x30;
pub const STATUS_READ_WRITE_ERROR: u8 = 0x31;
pub const STATUS_COMMAND_FORMAT: u8 = 0x32;
pub const STATUS_INVALID_COMMAND: u8 = 0x34;
pub const STATUS_INVALID_SWIPE: u8 = 0x39;
pub const STATUS_FAILED: u8 = 0x41;

/// Communication-test pass byte ('y')
pub const COMM_TEST_ACK: u8 = 0x79;

/// Coercivity status reply bytes
pub const COERCIVITY_HI: u8 = b'H';
pub const COERCIVITY_LOW: u8 = b'L';

/// Terminator of the device-model reply
pub const MODEL_TERMINATOR: u8 = b'S';

/// Firmware version replies carry a fixed number of bytes after ESC
pub const FIRMWARE_LEN: usize = 8;

/// Upper bound on a model reply before the terminator; anything longer is
/// treated as a framing error rather than buffered forever
pub const MODEL_MAX_LEN: usize = 64;

// Per-track BPI density bytes (one SetBpi command per track)
pub const BPI_TRACK1_210: u8 = 0xA1;
pub const BPI_TRACK1_75: u8 = 0xA0;
pub const BPI_TRACK2_210: u8 = 0xD2;
pub const BPI_TRACK2_75: u8 = 0x4B;
pub const BPI_TRACK3_210: u8 = 0xC1;
pub const BPI_TRACK3_75: u8 = 0xC0;

/// Physical bit capacity per track at its nominal density. Track 1 holds 79
/// seven-bit characters at 210 bpi, track 2 forty five-bit characters at
/// 75 bpi, track 3 a hundred and seven five-bit characters at 210 bpi.
pub const TRACK_CAPACITY_BITS: [usize; 3] = [553, 200, 535];

/// Nominal recording density per track, used to scale capacity when the
/// configured BPI differs
pub const TRACK_NOMINAL_BPI: [u16; 3] = [210, 75, 210];
