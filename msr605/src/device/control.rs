// msr605/src/device/control.rs

//! Command and query operations: reset, self-tests, erase, coercivity,
//! LEDs, BPC/BPI configuration and the info queries. Card reads and writes
//! live in their own modules.

use crate::constants::COERCIVITY_HI;
use crate::device::{Device, Open};
use crate::error::DeviceError;
use crate::protocol::{Command, Response};
use crate::types::{Bpc, Bpi, Coercivity, LedColor, LedState, SelfTest, TrackNumber};
use crate::utils::{DEFAULT_COMMAND_TIMEOUT_MS, SWIPE_TIMEOUT_MS};

impl Device<Open> {
    fn ack(&mut self, cmd: Command) -> Result<(), DeviceError> {
        let resp = self.execute(&cmd, DEFAULT_COMMAND_TIMEOUT_MS)?;
        let status = resp.status();
        if status.is_ok() {
            Ok(())
        } else {
            Err(DeviceError::Rejected(status))
        }
    }

    /// Reset the device, clearing any in-progress read or write.
    pub fn reset(&mut self) -> Result<(), DeviceError> {
        self.ack(Command::Reset)
    }

    /// Round-trip a fixed test pattern through the device.
    pub fn communication_test(&mut self) -> Result<(), DeviceError> {
        match self.execute(&Command::CommunicationTest, DEFAULT_COMMAND_TIMEOUT_MS)? {
            Response::TestAck => Ok(()),
            _ => Err(DeviceError::TestFailed(SelfTest::Communication)),
        }
    }

    /// Exercise the device RAM; any reply but an ack is a failure.
    pub fn ram_test(&mut self) -> Result<(), DeviceError> {
        match self
            .execute(&Command::RamTest, DEFAULT_COMMAND_TIMEOUT_MS)?
            .status()
        {
            s if s.is_ok() => Ok(()),
            _ => Err(DeviceError::TestFailed(SelfTest::Ram)),
        }
    }

    /// Exercise the swipe sensor. The device answers after a card passes
    /// the sensor, so this waits on the swipe timeout.
    pub fn sensor_test(&mut self) -> Result<(), DeviceError> {
        match self.execute(&Command::SensorTest, SWIPE_TIMEOUT_MS)?.status() {
            s if s.is_ok() => Ok(()),
            _ => Err(DeviceError::TestFailed(SelfTest::Sensor)),
        }
    }

    /// Run communication, RAM and sensor tests in order, failing fast; the
    /// error names the stage that failed.
    pub fn test(&mut self) -> Result<(), DeviceError> {
        self.communication_test()?;
        self.ram_test()?;
        self.sensor_test()
    }

    /// Erase the selected tracks. Erasing nothing is a legal no-op; it is
    /// logged as suspicious and no command is issued.
    pub fn erase(&mut self, track1: bool, track2: bool, track3: bool) -> Result<(), DeviceError> {
        if !track1 && !track2 && !track3 {
            log::warn!("erase called with no tracks selected; nothing sent");
            return Ok(());
        }
        self.ack(Command::Erase {
            track1,
            track2,
            track3,
        })
    }

    /// Switch the device's write coercivity. The session mirror is updated
    /// only on acknowledgement.
    pub fn set_coercivity(&mut self, coercivity: Coercivity) -> Result<(), DeviceError> {
        self.ack(Command::SetCoercivity { coercivity })?;
        self.session.coercivity = Some(coercivity);
        Ok(())
    }

    /// Query the device's current coercivity; the answer becomes the
    /// session mirror.
    pub fn coercivity_status(&mut self) -> Result<Coercivity, DeviceError> {
        match self.execute(&Command::GetCoercivity, DEFAULT_COMMAND_TIMEOUT_MS)? {
            Response::Coercivity(coercivity) => {
                self.session.coercivity = Some(coercivity);
                Ok(coercivity)
            }
            other => Err(DeviceError::UnexpectedResponse {
                expected: COERCIVITY_HI,
                actual: other.status().as_byte(),
            }),
        }
    }

    pub fn device_model(&mut self) -> Result<String, DeviceError> {
        match self.execute(&Command::GetModel, DEFAULT_COMMAND_TIMEOUT_MS)? {
            Response::Model(model) => Ok(model),
            other => Err(DeviceError::Rejected(other.status())),
        }
    }

    pub fn firmware_version(&mut self) -> Result<String, DeviceError> {
        match self.execute(&Command::GetFirmware, DEFAULT_COMMAND_TIMEOUT_MS)? {
            Response::Firmware(version) => Ok(version),
            other => Err(DeviceError::Rejected(other.status())),
        }
    }

    /// Set bits-per-character for all three tracks. Returns the values the
    /// device acknowledged, which are the source of truth: the device may
    /// clamp a requested value, and the session mirror follows the ack.
    pub fn set_bpc(
        &mut self,
        track1: Bpc,
        track2: Bpc,
        track3: Bpc,
    ) -> Result<(Bpc, Bpc, Bpc), DeviceError> {
        let cmd = Command::SetBpc {
            track1,
            track2,
            track3,
        };
        match self.execute(&cmd, DEFAULT_COMMAND_TIMEOUT_MS)? {
            Response::BpcSettings {
                track1: a,
                track2: b,
                track3: c,
            } => {
                let acked = (
                    Bpc::new(a).map_err(|_| DeviceError::UnexpectedResponse {
                        expected: track1.as_u8(),
                        actual: a,
                    })?,
                    Bpc::new(b).map_err(|_| DeviceError::UnexpectedResponse {
                        expected: track2.as_u8(),
                        actual: b,
                    })?,
                    Bpc::new(c).map_err(|_| DeviceError::UnexpectedResponse {
                        expected: track3.as_u8(),
                        actual: c,
                    })?,
                );
                self.session.tracks[0].bpc = acked.0;
                self.session.tracks[1].bpc = acked.1;
                self.session.tracks[2].bpc = acked.2;
                Ok(acked)
            }
            other => Err(DeviceError::Rejected(other.status())),
        }
    }

    /// Set the recording density of one track. The device and the session
    /// mirror stay synchronized: the mirror changes only on ack.
    pub fn set_bpi(&mut self, track: TrackNumber, bpi: Bpi) -> Result<Bpi, DeviceError> {
        self.ack(Command::SetBpi { track, bpi })?;
        self.session.tracks[track.index()].bpi = bpi;
        Ok(bpi)
    }

    /// Set all three track densities, one device command per track.
    pub fn select_bpi(
        &mut self,
        track1: Bpi,
        track2: Bpi,
        track3: Bpi,
    ) -> Result<(Bpi, Bpi, Bpi), DeviceError> {
        Ok((
            self.set_bpi(TrackNumber::One, track1)?,
            self.set_bpi(TrackNumber::Two, track2)?,
            self.set_bpi(TrackNumber::Three, track3)?,
        ))
    }

    /// Light one LED; the device turns the other two off.
    pub fn led_on(&mut self, color: LedColor) -> Result<(), DeviceError> {
        self.ack(Command::LedOn { color })?;
        self.session.leds = LedState::only(color);
        Ok(())
    }

    pub fn all_leds_on(&mut self) -> Result<(), DeviceError> {
        self.ack(Command::AllLedsOn)?;
        self.session.leds = LedState::all_on();
        Ok(())
    }

    pub fn all_leds_off(&mut self) -> Result<(), DeviceError> {
        self.ack(Command::AllLedsOff)?;
        self.session.leds = LedState::default();
        Ok(())
    }
}
