// msr605/src/device/mod.rs

mod control;
mod handle;
mod read;
mod write;

pub use handle::{Closed, Device, Open, Session};
