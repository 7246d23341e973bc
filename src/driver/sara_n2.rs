//! Driver for the u-blox SARA-N2 NB-IoT module
use core::fmt::Write;

use atat::{blocking::AtatClient, AtatCmd};
use embedded_hal::delay::DelayNs;
use heapless::String;

use super::{
    CoapRequest, CoapResponse, Command, ConnectionStatus, Driver, DriverIdentity, Reply,
};
use crate::command::coap::types::CoapProfileParam;
use crate::command::coap::{CoapCommand, CoapPayloadCommand, SetCoapServer, SetCoapUri};
use crate::command::control::types::ConfigValue;
use crate::command::control::{Reboot, SetConfiguration};
use crate::command::network_service::responses::Statistics;
use crate::command::network_service::types::{SignallingConnectionMode, StatisticsType};
use crate::command::network_service::{
    GetEPSNetworkRegistrationStatus, GetSignallingConnectionStatus, GetStatistics,
};
use crate::command::power_saving::types::{PsmMode, RequestedTimer};
use crate::command::power_saving::{
    GetPowerSavingMode, GetPowerSavingStatus, SetPowerSavingMode,
};
use crate::command::AT;
use crate::config::Config;

pub struct SaraN2<C: AtatClient, D: DelayNs> {
    at_client: C,
    delay: D,
    config: Config,
}

impl<C: AtatClient, D: DelayNs> SaraN2<C, D> {
    pub fn new(at_client: C, delay: D, config: Config) -> Self {
        Self {
            at_client,
            delay,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hands back the transport and delay provider.
    pub fn release(self) -> (C, D) {
        (self.at_client, self.delay)
    }

    fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        self.at_client.send_retry(cmd).map_err(|e| {
            error!("AT command failed: {:?}", e);
            e
        })
    }

    pub fn is_alive(&mut self) -> Result<bool, atat::Error> {
        self.at_client.send(&AT).map(|_| true)
    }

    /// Reboots the module and blocks until it answers `AT` again.
    pub fn reboot(&mut self) -> Result<(), atat::Error> {
        info!("Rebooting modem");

        // The boot banner follows `REBOOTING`, the final `OK` is easily
        // lost while the UART restarts.
        match self.at_client.send(&Reboot) {
            Ok(_) | Err(atat::Error::Timeout) | Err(atat::Error::Parse) => {}
            Err(atat::Error::InvalidResponse) => {}
            Err(err) => {
                error!("Failed to reboot modem: {:?}", err);
                return Err(err);
            }
        }

        self.delay.delay_ms(self.config.boot_wait_ms);

        let mut last = atat::Error::Timeout;
        for _ in 0..self.config.alive_attempts {
            match self.is_alive() {
                Ok(_) => {
                    debug!("Modem rebooted");
                    return Ok(());
                }
                Err(err) => last = err,
            }
            self.delay.delay_ms(self.config.alive_interval_ms);
        }

        warn!("Modem did not come back after reboot");
        Err(last)
    }
}

impl<C: AtatClient, D: DelayNs> Driver for SaraN2<C, D> {
    type Error = atat::Error;

    fn identity(&self) -> DriverIdentity {
        DriverIdentity::SaraN2
    }

    fn send_command(&mut self, command: &Command<'_>) -> Result<Reply, Self::Error> {
        match *command {
            Command::Reboot => self.reboot()?,
            Command::PowerSaveMode(enable) => {
                self.send(&SetPowerSavingMode {
                    mode: if enable {
                        PsmMode::Enabled
                    } else {
                        PsmMode::Disabled
                    },
                    timer: None,
                })?;
            }
            Command::Feature(function, enable) => {
                self.send(&SetConfiguration {
                    function,
                    value: ConfigValue(enable),
                })?;
            }
            Command::GetPowerSaveStatus => {
                return Ok(Reply::PowerSaveStatus(self.send(&GetPowerSavingStatus)?));
            }
            Command::GetPowerSaveSettings => {
                return Ok(Reply::PowerSaveSettings(self.send(&GetPowerSavingMode)?));
            }
            Command::SetCoapServer { address, port } => {
                let mut ip = String::<15>::new();
                write!(ip, "{}", address).map_err(|_| atat::Error::Write)?;
                self.send(&SetCoapServer {
                    param: CoapProfileParam::Server,
                    address: &ip,
                    port,
                })?;
            }
            Command::SetCoapUri(uri) => {
                self.send(&SetCoapUri {
                    param: CoapProfileParam::Uri,
                    uri,
                })?;
            }
            Command::SetTimer(family, value) => {
                self.send(&SetPowerSavingMode {
                    mode: PsmMode::Enabled,
                    timer: Some(RequestedTimer { family, value }),
                })?;
            }
        }

        Ok(Reply::Ack)
    }

    fn query_registration(&mut self) -> Result<ConnectionStatus, Self::Error> {
        let connection = self.send(&GetSignallingConnectionStatus)?;
        let registration = self.send(&GetEPSNetworkRegistrationStatus)?;

        Ok(ConnectionStatus {
            connected: connection.mode == SignallingConnectionMode::Connected,
            registration: registration.stat,
        })
    }

    fn query_stats(&mut self, kind: StatisticsType) -> Result<Statistics, Self::Error> {
        self.send(&GetStatistics { kind })
    }

    fn transfer_coap(&mut self, request: &CoapRequest<'_>) -> Result<CoapResponse, Self::Error> {
        let response = match request.payload {
            Some(payload) => self.send(&CoapPayloadCommand {
                method: request.method,
                payload: payload.data,
                format: payload.format,
            })?,
            None => self.send(&CoapCommand {
                method: request.method,
            })?,
        };

        Ok(CoapResponse {
            code: response.code,
            payload: response.payload.unwrap_or_default(),
        })
    }
}
