//! Timeout values used across the crate.
//!
//! Command acknowledgements arrive within tens of milliseconds; reads and
//! writes block until a card is swiped, so they get a much longer default
//! that callers can override per operation.

use std::time::Duration;

/// Default timeout for command/query round-trips in milliseconds.
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 1000;

/// Default timeout for operations that wait on a card swipe.
pub const SWIPE_TIMEOUT_MS: u64 = 30_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
