// msr605/src/device/handle.rs

use std::marker::PhantomData;

use crate::error::CommFailure;
use crate::protocol::{Command, Response, link};
use crate::transport::Transport;
use crate::types::{Coercivity, LedState, TrackSettings};
use crate::utils::DEFAULT_COMMAND_TIMEOUT_MS;

/// Type-state markers
pub struct Closed;
pub struct Open;

/// Session state mirrored from acknowledged device commands. Never updated
/// speculatively: a rejected command leaves the mirror untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) coercivity: Option<Coercivity>,
    pub(crate) leds: LedState,
    pub(crate) tracks: [TrackSettings; 3],
    pub(crate) faulted: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            coercivity: None,
            leds: LedState::default(),
            tracks: [
                TrackSettings::nominal(crate::types::TrackNumber::One),
                TrackSettings::nominal(crate::types::TrackNumber::Two),
                TrackSettings::nominal(crate::types::TrackNumber::Three),
            ],
            faulted: false,
        }
    }
}

/// Device handle that enforces the session lifecycle at compile time:
/// operations exist only on `Device<Open>`, and a consumed handle cannot be
/// used after `close`. The handle exclusively owns its transport.
pub struct Device<State = Closed> {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) session: Session,
    _state: PhantomData<State>,
}

impl Device<Closed> {
    /// Create a Device from an existing Transport instance. Tests hand in a
    /// MockTransport; production code a SerialTransport.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            session: Session::default(),
            _state: PhantomData,
        }
    }

    /// Open the session: issue a reset and require its acknowledgement.
    /// Consumes the closed handle; on failure the transport is dropped and
    /// the caller starts over.
    pub fn open(mut self) -> Result<Device<Open>, crate::error::DeviceError> {
        let cmd = Command::Reset;
        link::send(self.transport.as_mut(), &cmd)?;
        let frame = link::receive(
            self.transport.as_mut(),
            cmd.response_shape(),
            DEFAULT_COMMAND_TIMEOUT_MS,
        )?;
        let resp = Response::decode(&cmd, &frame)?;
        let status = resp.status();
        if !status.is_ok() {
            return Err(crate::error::DeviceError::Rejected(status));
        }

        log::debug!("session opened");
        Ok(Device {
            transport: self.transport,
            session: self.session,
            _state: PhantomData,
        })
    }
}

impl Device<Open> {
    /// Close the session and the underlying transport.
    pub fn close(mut self) -> Result<(), CommFailure> {
        log::debug!("session closed");
        self.transport.close()
    }

    /// Whether an unrecoverable framing failure has faulted the session.
    pub fn is_faulted(&self) -> bool {
        self.session.faulted
    }

    /// Last coercivity acknowledged by the device, if any was queried or set.
    pub fn cached_coercivity(&self) -> Option<Coercivity> {
        self.session.coercivity
    }

    /// LED mirror, updated on acknowledged LED commands only.
    pub fn led_state(&self) -> LedState {
        self.session.leds
    }

    /// Per-track settings mirror, kept in sync with acknowledged BPC/BPI
    /// commands.
    pub fn track_settings(&self) -> &[TrackSettings; 3] {
        &self.session.tracks
    }

    /// Run one command/response round-trip. A faulted session refuses
    /// immediately with `Closed`; any failure other than a clean `Closed`
    /// faults the session (when `timeout_faults` is false a timeout is
    /// passed through unfaulted, the bounded recovery read operations use
    /// for "no card swiped").
    pub(crate) fn execute_opts(
        &mut self,
        cmd: &Command,
        timeout_ms: u64,
        timeout_faults: bool,
    ) -> Result<Response, CommFailure> {
        if self.session.faulted {
            return Err(CommFailure::Closed);
        }

        let result = (|| {
            link::send(self.transport.as_mut(), cmd)?;
            let frame =
                link::receive(self.transport.as_mut(), cmd.response_shape(), timeout_ms)?;
            Response::decode(cmd, &frame)
        })();

        if let Err(failure) = &result {
            match failure {
                CommFailure::Closed => {}
                CommFailure::Timeout if !timeout_faults => {}
                other => {
                    log::warn!("session faulted: {}", other);
                    self.session.faulted = true;
                }
            }
        }
        result
    }

    pub(crate) fn execute(
        &mut self,
        cmd: &Command,
        timeout_ms: u64,
    ) -> Result<Response, CommFailure> {
        self.execute_opts(cmd, timeout_ms, true)
    }
}
