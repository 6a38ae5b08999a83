// msr605/src/protocol/mod.rs

pub mod commands;
pub mod frame;
pub mod link;
pub mod parser;
pub mod responses;

pub use commands::Command;
pub use frame::{FrameStatus, ResponseFrame, ResponseShape, Scan};
pub use responses::Response;
