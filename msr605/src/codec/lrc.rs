// msr605/src/codec/lrc.rs

/// Longitudinal redundancy check over character codes: the XOR of every
/// code in the framed stream, sentinels included. The result is itself a
/// character code, so it maps back into the track alphabet.
pub fn lrc<I>(codes: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    codes.into_iter().fold(0u8, |acc, c| acc ^ c)
}
