// msr605/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::time::Duration;

use serialport::SerialPort;

use crate::Error;
use crate::error::CommFailure;
use crate::transport::traits::Transport;

/// Receive buffer size per poll; the longest frame the device produces is a
/// full three-track raw read, well under this.
const READ_CHUNK: usize = 512;

/// Serial transport for a physical MSR605. The device speaks a fixed
/// 9600 8N1 line; only the port path varies. Feature-gated behind
/// `--features serial` so the protocol and codec layers build without the
/// `serialport` crate.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    open: bool,
}

impl SerialTransport {
    /// Device line configuration
    pub const BAUD_RATE: u32 = 9600;

    /// Open the serial port at `path` (e.g. `/dev/ttyUSB0`).
    pub fn open(path: &str) -> Result<Self, Error> {
        let port = serialport::new(path, Self::BAUD_RATE)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .timeout(Duration::from_millis(
                crate::utils::DEFAULT_COMMAND_TIMEOUT_MS,
            ))
            .open()
            .map_err(Error::Serial)?;
        log::debug!("opened serial port {}", path);
        Ok(Self { port, open: true })
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), CommFailure> {
        if !self.open {
            return Err(CommFailure::Closed);
        }
        self.port
            .write_all(data)
            .and_then(|_| self.port.flush())
            .map_err(|_| CommFailure::WriteError)
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>, CommFailure> {
        if !self.open {
            return Err(CommFailure::Closed);
        }
        self.port
            .set_timeout(Duration::from_millis(timeout_ms.max(1)))
            .map_err(|_| CommFailure::Closed)?;

        let mut buf = [0u8; READ_CHUNK];
        match self.port.read(&mut buf) {
            Ok(0) => Err(CommFailure::Closed),
            Ok(n) => Ok(buf[..n].to_vec()),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Err(CommFailure::Timeout),
            Err(_) => Err(CommFailure::Closed),
        }
    }

    fn close(&mut self) -> Result<(), CommFailure> {
        self.open = false;
        Ok(())
    }
}
