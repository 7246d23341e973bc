//! Validation and translation of public intents into driver calls
//!
//! Every operation first checks that a driver is bound, then validates its
//! input, and only then talks to the driver. Whatever the driver reports as
//! failed, or answers with an unexpected reply, becomes [`Error::Failed`].
//! Nothing is retried here.

use heapless::String;

use crate::command::coap::types::{CoapMethod, ContentFormat};
use crate::command::coap::MAX_PAYLOAD_LEN;
use crate::command::control::types::ConfigFunction;
use crate::command::network_service::responses::Statistics;
use crate::command::network_service::types::StatisticsType;
use crate::command::power_saving::responses::PowerSavingSettings;
use crate::command::power_saving::types::PsmState;
use crate::driver::{
    CoapPayload, CoapProfile, CoapRequest, CoapResponse, Command, ConnectionStatus, Driver,
    DriverIdentity, Reply,
};
use crate::error::Error;
use crate::fmt::Debug2Format;
use crate::timer::{self, Binary8, TimerFamily, TimerUnit, TimerValue};

pub struct Dispatcher<D: Driver> {
    driver: D,
}

impl<D: Driver> Dispatcher<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn identity(&self) -> DriverIdentity {
        self.driver.identity()
    }

    pub fn release(self) -> D {
        self.driver
    }

    fn bound(&mut self) -> Result<&mut D, Error> {
        match self.driver.identity() {
            DriverIdentity::Undefined => {
                debug!("No modem driver bound");
                Err(Error::DriverUnknown)
            }
            _ => Ok(&mut self.driver),
        }
    }

    fn command(&mut self, command: &Command<'_>) -> Result<Reply, Error> {
        trace!("Dispatching {:?}", Debug2Format(command));
        self.bound()?.send_command(command).map_err(|e| {
            warn!("Driver failed {:?}: {:?}", Debug2Format(command), Debug2Format(&e));
            Error::Failed
        })
    }

    fn acknowledged(&mut self, command: &Command<'_>) -> Result<(), Error> {
        match self.command(command)? {
            Reply::Ack => Ok(()),
            reply => {
                warn!("Unexpected reply {:?}", Debug2Format(&reply));
                Err(Error::Failed)
            }
        }
    }

    pub fn reboot(&mut self) -> Result<(), Error> {
        self.acknowledged(&Command::Reboot)
    }

    pub fn set_power_save_mode(&mut self, enable: bool) -> Result<(), Error> {
        self.acknowledged(&Command::PowerSaveMode(enable))
    }

    pub fn set_feature(&mut self, function: ConfigFunction, enable: bool) -> Result<(), Error> {
        self.acknowledged(&Command::Feature(function, enable))
    }

    pub fn connection_status(&mut self) -> Result<ConnectionStatus, Error> {
        self.bound()?.query_registration().map_err(|e| {
            warn!("Registration query failed: {:?}", Debug2Format(&e));
            Error::Failed
        })
    }

    pub fn stats(&mut self, kind: StatisticsType) -> Result<Statistics, Error> {
        self.bound()?.query_stats(kind).map_err(|e| {
            warn!("Statistics query failed: {:?}", Debug2Format(&e));
            Error::Failed
        })
    }

    /// Current PSM state as reported by `+NPSMR`.
    pub fn power_save_state(&mut self) -> Result<PsmState, Error> {
        match self.command(&Command::GetPowerSaveStatus)? {
            Reply::PowerSaveStatus(status) => status.mode.ok_or_else(|| {
                warn!("Power save status carries no mode");
                Error::Failed
            }),
            reply => {
                warn!("Unexpected reply {:?}", Debug2Format(&reply));
                Err(Error::Failed)
            }
        }
    }

    /// Stores server address and URI in the modem's CoAP profile.
    ///
    /// The URI length and the address literal are validated before either
    /// is sent.
    pub fn configure_coap(&mut self, address: &str, port: u16, uri: &str) -> Result<(), Error> {
        self.bound()?;
        let profile = CoapProfile::new(address, port, uri)?;

        self.acknowledged(&Command::SetCoapServer {
            address: profile.address,
            port: profile.port,
        })?;
        self.acknowledged(&Command::SetCoapUri(&profile.uri))
    }

    /// Sends one CoAP request to the configured profile.
    ///
    /// PUT and POST need a payload, GET and DELETE must not carry one. The
    /// payload travels as a quoted AT string, so `"` and control characters
    /// are rejected.
    pub fn coap(
        &mut self,
        method: CoapMethod,
        payload: Option<(&str, ContentFormat)>,
    ) -> Result<CoapResponse, Error> {
        self.bound()?;

        if method.has_payload() != payload.is_some() {
            return Err(Error::InvalidPayload);
        }
        let payload = match payload {
            Some((data, _)) if data.len() > MAX_PAYLOAD_LEN => return Err(Error::PayloadTooLong),
            Some((data, _)) if data.chars().any(|c| c == '"' || c.is_control()) => {
                return Err(Error::InvalidPayload)
            }
            Some((data, format)) => Some(CoapPayload { data, format }),
            None => None,
        };
        let request = CoapRequest { method, payload };

        let response = self.bound()?.transfer_coap(&request).map_err(|e| {
            warn!("CoAP {:?} failed: {:?}", method, Debug2Format(&e));
            Error::Failed
        })?;
        debug!("CoAP {:?} answered {}", method, response.code);

        Ok(response)
    }

    pub fn set_timer(
        &mut self,
        family: TimerFamily,
        unit: TimerUnit,
        multiplier: u8,
    ) -> Result<(), Error> {
        self.bound()?;
        let raw = timer::encode(family, unit, multiplier)?;
        debug!("Requesting {:?} timer {}", family, raw);

        self.acknowledged(&Command::SetTimer(family, raw))
    }

    fn settings(&mut self) -> Result<PowerSavingSettings, Error> {
        match self.command(&Command::GetPowerSaveSettings)? {
            Reply::PowerSaveSettings(settings) => Ok(settings),
            reply => {
                warn!("Unexpected reply {:?}", Debug2Format(&reply));
                Err(Error::Failed)
            }
        }
    }

    /// The timer field exactly as the modem reports it, which must be 8
    /// binary digits.
    pub fn timer_binary(&mut self, family: TimerFamily) -> Result<String<8>, Error> {
        let settings = self.settings()?;
        let raw = match family {
            TimerFamily::Tau => settings.tau,
            TimerFamily::Active => settings.active,
        };

        match raw {
            Some(raw) if raw.len() == 8 && raw.bytes().all(|b| b == b'0' || b == b'1') => Ok(raw),
            Some(raw) => {
                warn!("Modem reported malformed {:?} timer {}", family, raw.as_str());
                Err(Error::Failed)
            }
            None => {
                warn!("Modem reported no {:?} timer", family);
                Err(Error::Failed)
            }
        }
    }

    pub fn timer(&mut self, family: TimerFamily) -> Result<TimerValue, Error> {
        let raw = self.timer_binary(family)?;
        timer::decode_str(family, &raw)
    }

    /// Decodes a raw field without asking the modem.
    pub fn decode_timer(&self, family: TimerFamily, raw: Binary8) -> Result<TimerValue, Error> {
        timer::decode(family, raw)
    }
}
