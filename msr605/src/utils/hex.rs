//! Hex formatting for wire-traffic logging.

/// Render a byte slice as lowercase hex with a space between bytes, the
/// form used in the crate's debug logs.
///
/// Example: `&[0x1b, 0x61]` -> `"1b 61"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
