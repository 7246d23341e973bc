//! Application facing operations of the NB-IoT modem.
use heapless::String;

use crate::command::coap::types::{CoapMethod, ContentFormat};
use crate::command::control::types::ConfigFunction;
use crate::command::network_service::responses::Statistics;
use crate::command::network_service::types::StatisticsType;
use crate::command::power_saving::types::PsmState;
use crate::dispatcher::Dispatcher;
use crate::driver::{CoapResponse, ConnectionStatus, Driver, DriverIdentity, NoDriver};
use crate::error::Error;
use crate::timer::{TimerFamily, TimerUnit, TimerValue};

/// An NB-IoT modem bound to one driver for its whole life.
///
/// Every call blocks until the driver finished the exchange. Wrap the
/// interface in a mutex, or keep it in one task, when several parts of an
/// application need it.
pub struct NbIotInterface<D: Driver = NoDriver> {
    dispatcher: Dispatcher<D>,
}

impl NbIotInterface<NoDriver> {
    /// An interface without a modem, all operations fail with
    /// [`Error::DriverUnknown`].
    pub fn unbound() -> Self {
        Self::new(NoDriver)
    }
}

impl<D: Driver> NbIotInterface<D> {
    pub fn new(driver: D) -> Self {
        debug!("Binding driver {:?}", driver.identity());
        Self {
            dispatcher: Dispatcher::new(driver),
        }
    }

    pub fn identity(&self) -> DriverIdentity {
        self.dispatcher.identity()
    }

    /// Unbinds and returns the driver.
    pub fn release(self) -> D {
        self.dispatcher.release()
    }

    pub fn reboot_modem(&mut self) -> Result<(), Error> {
        self.dispatcher.reboot()
    }

    pub fn enable_power_save_mode(&mut self) -> Result<(), Error> {
        self.dispatcher.set_power_save_mode(true)
    }

    pub fn disable_power_save_mode(&mut self) -> Result<(), Error> {
        self.dispatcher.set_power_save_mode(false)
    }

    pub fn query_power_save_mode(&mut self) -> Result<PsmState, Error> {
        self.dispatcher.power_save_state()
    }

    pub fn get_connection_status(&mut self) -> Result<ConnectionStatus, Error> {
        self.dispatcher.connection_status()
    }

    /// Raw `+NUESTATS` report, see [`Statistics::value`].
    pub fn get_nuestats(&mut self, kind: StatisticsType) -> Result<Statistics, Error> {
        self.dispatcher.stats(kind)
    }

    pub fn enable_autoconnect(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::AutoConnect, true)
    }

    pub fn disable_autoconnect(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::AutoConnect, false)
    }

    pub fn enable_scrambling(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::Scrambling, true)
    }

    pub fn disable_scrambling(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::Scrambling, false)
    }

    pub fn enable_si_avoid(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::SiAvoid, true)
    }

    pub fn disable_si_avoid(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::SiAvoid, false)
    }

    pub fn enable_combine_attach(&mut self) -> Result<(), Error> {
        self.dispatcher
            .set_feature(ConfigFunction::CombineAttach, true)
    }

    pub fn disable_combine_attach(&mut self) -> Result<(), Error> {
        self.dispatcher
            .set_feature(ConfigFunction::CombineAttach, false)
    }

    pub fn enable_cell_reselection(&mut self) -> Result<(), Error> {
        self.dispatcher
            .set_feature(ConfigFunction::CellReselection, true)
    }

    pub fn disable_cell_reselection(&mut self) -> Result<(), Error> {
        self.dispatcher
            .set_feature(ConfigFunction::CellReselection, false)
    }

    pub fn enable_bip(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::Bip, true)
    }

    pub fn disable_bip(&mut self) -> Result<(), Error> {
        self.dispatcher.set_feature(ConfigFunction::Bip, false)
    }

    pub fn enable_sim_power_save_mode(&mut self) -> Result<(), Error> {
        self.dispatcher
            .set_feature(ConfigFunction::SimPowerSaving, true)
    }

    pub fn disable_sim_power_save_mode(&mut self) -> Result<(), Error> {
        self.dispatcher
            .set_feature(ConfigFunction::SimPowerSaving, false)
    }

    /// Points the modem's CoAP profile at `ipv4:port` and `uri`.
    ///
    /// `uri` may be at most 200 characters.
    pub fn configure_coap(&mut self, ipv4: &str, port: u16, uri: &str) -> Result<(), Error> {
        self.dispatcher.configure_coap(ipv4, port, uri)
    }

    pub fn coap_get(&mut self) -> Result<CoapResponse, Error> {
        self.dispatcher.coap(CoapMethod::Get, None)
    }

    pub fn coap_delete(&mut self) -> Result<CoapResponse, Error> {
        self.dispatcher.coap(CoapMethod::Delete, None)
    }

    pub fn coap_put(&mut self, payload: &str, format: ContentFormat) -> Result<CoapResponse, Error> {
        self.dispatcher.coap(CoapMethod::Put, Some((payload, format)))
    }

    pub fn coap_post(
        &mut self,
        payload: &str,
        format: ContentFormat,
    ) -> Result<CoapResponse, Error> {
        self.dispatcher.coap(CoapMethod::Post, Some((payload, format)))
    }

    /// Requests a periodic TAU interval of `multiplier` times `unit`.
    pub fn set_tau_timer(&mut self, unit: TimerUnit, multiplier: u8) -> Result<(), Error> {
        self.dispatcher.set_timer(TimerFamily::Tau, unit, multiplier)
    }

    pub fn get_tau_timer(&mut self) -> Result<TimerValue, Error> {
        self.dispatcher.timer(TimerFamily::Tau)
    }

    pub fn get_tau_timer_binary(&mut self) -> Result<String<8>, Error> {
        self.dispatcher.timer_binary(TimerFamily::Tau)
    }

    /// Requests an active time of `multiplier` times `unit`.
    pub fn set_active_time(&mut self, unit: TimerUnit, multiplier: u8) -> Result<(), Error> {
        self.dispatcher
            .set_timer(TimerFamily::Active, unit, multiplier)
    }

    pub fn get_active_time(&mut self) -> Result<TimerValue, Error> {
        self.dispatcher.timer(TimerFamily::Active)
    }

    pub fn get_active_time_binary(&mut self) -> Result<String<8>, Error> {
        self.dispatcher.timer_binary(TimerFamily::Active)
    }
}
