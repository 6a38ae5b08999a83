// msr605/src/lib.rs

//! msr605
//!
//! Pure Rust driver for MSR605 magnetic stripe card reader/writers.
//!
//! The crate is layered the way the wire works: a [`transport`] byte
//! stream, the [`protocol`] framing layer, the ISO7811 [`codec`], and the
//! [`device`] controller that owns the session and exposes the operation
//! surface. All protocol logic is testable against an in-memory transport;
//! the `serial` feature adds the hardware port.
#![warn(missing_docs)]

pub mod codec;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
