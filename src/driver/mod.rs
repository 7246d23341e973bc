//! Modem driver seam
//!
//! The dispatcher only talks to the modem through [`Driver`]. A driver turns
//! a logical [`Command`] into whatever its modem understands, blocks until
//! the modem answered or timed out, and hands back a structured [`Reply`].

pub mod sara_n2;

use core::fmt::Debug;

use heapless::String;
use no_std_net::Ipv4Addr;

use crate::command::coap::types::{CoapMethod, ContentFormat};
use crate::command::coap::{MAX_PAYLOAD_LEN, MAX_URI_LEN};
use crate::command::control::types::ConfigFunction;
use crate::command::network_service::responses::Statistics;
use crate::command::network_service::types::{NetworkRegistrationStat, StatisticsType};
use crate::command::power_saving::responses::{PowerSavingSettings, PowerSavingStatus};
use crate::error::Error;
use crate::timer::{Binary8, TimerFamily};

/// The concrete modem backing a [`Driver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverIdentity {
    Undefined,
    SaraN2,
}

/// One logical modem command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Power cycle the modem and wait until it responds again
    Reboot,
    PowerSaveMode(bool),
    Feature(ConfigFunction, bool),
    GetPowerSaveStatus,
    GetPowerSaveSettings,
    SetCoapServer { address: Ipv4Addr, port: u16 },
    SetCoapUri(&'a str),
    /// Request a timer value, this implicitly enables PSM
    SetTimer(TimerFamily, Binary8),
}

/// Structured result of [`Driver::send_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The modem acknowledged the command
    Ack,
    PowerSaveStatus(PowerSavingStatus),
    PowerSaveSettings(PowerSavingSettings),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionStatus {
    /// An RRC connection is currently established
    pub connected: bool,
    pub registration: NetworkRegistrationStat,
}

/// Destination of CoAP requests, bound to the modem's single profile slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoapProfile {
    pub address: Ipv4Addr,
    pub port: u16,
    pub uri: String<MAX_URI_LEN>,
}

impl CoapProfile {
    pub fn new(address: &str, port: u16, uri: &str) -> Result<Self, Error> {
        if uri.len() > MAX_URI_LEN {
            return Err(Error::UriTooLong);
        }
        let address = address.parse().map_err(|_| Error::InvalidAddress)?;

        Ok(Self {
            address,
            port,
            uri: String::try_from(uri).map_err(|_| Error::UriTooLong)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoapPayload<'a> {
    pub data: &'a str,
    pub format: ContentFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoapRequest<'a> {
    pub method: CoapMethod,
    pub payload: Option<CoapPayload<'a>>,
}

/// What the CoAP server answered.
///
/// `code` is the server's response code and is unrelated to [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoapResponse {
    pub code: u16,
    pub payload: String<MAX_PAYLOAD_LEN>,
}

/// Capabilities a modem driver provides to the dispatcher.
///
/// Every call blocks until the modem reached a terminal response or the
/// driver's own timeout expired. Drivers do not retry on behalf of the
/// dispatcher beyond what their transport does.
pub trait Driver {
    type Error: Debug;

    fn identity(&self) -> DriverIdentity;

    fn send_command(&mut self, command: &Command<'_>) -> Result<Reply, Self::Error>;

    fn query_registration(&mut self) -> Result<ConnectionStatus, Self::Error>;

    fn query_stats(&mut self, kind: StatisticsType) -> Result<Statistics, Self::Error>;

    /// Performs one request against the configured CoAP profile.
    fn transfer_coap(&mut self, request: &CoapRequest<'_>) -> Result<CoapResponse, Self::Error>;
}

/// Placeholder for a system without a modem driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unbound;

impl Driver for NoDriver {
    type Error = Unbound;

    fn identity(&self) -> DriverIdentity {
        DriverIdentity::Undefined
    }

    fn send_command(&mut self, _command: &Command<'_>) -> Result<Reply, Self::Error> {
        Err(Unbound)
    }

    fn query_registration(&mut self) -> Result<ConnectionStatus, Self::Error> {
        Err(Unbound)
    }

    fn query_stats(&mut self, _kind: StatisticsType) -> Result<Statistics, Self::Error> {
        Err(Unbound)
    }

    fn transfer_coap(&mut self, _request: &CoapRequest<'_>) -> Result<CoapResponse, Self::Error> {
        Err(Unbound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coap_profile_validation() {
        let profile = CoapProfile::new("168.134.102.18", 5683, "coap://coap.me:5683/sink").unwrap();
        assert_eq!(profile.address, Ipv4Addr::new(168, 134, 102, 18));
        assert_eq!(profile.uri.as_str(), "coap://coap.me:5683/sink");

        let uri = [b'a'; MAX_URI_LEN];
        let uri = core::str::from_utf8(&uri).unwrap();
        assert!(CoapProfile::new("10.0.0.1", 5683, uri).is_ok());

        let long = [b'a'; MAX_URI_LEN + 1];
        let long = core::str::from_utf8(&long).unwrap();
        assert_eq!(
            CoapProfile::new("10.0.0.1", 5683, long),
            Err(Error::UriTooLong)
        );

        assert_eq!(
            CoapProfile::new("coap.me", 5683, "/sink"),
            Err(Error::InvalidAddress)
        );
        assert_eq!(
            CoapProfile::new("256.1.1.1", 5683, "/sink"),
            Err(Error::InvalidAddress)
        );
    }
}
