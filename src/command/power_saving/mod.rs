//! ### 8 - Power saving
//!
//! 3GPP Power Saving Mode (PSM). While PSM is enabled the module requests the
//! periodic TAU (T3412) and active time (T3324) values from the network, and
//! enters deep sleep once the active timer expires.
mod impl_;
pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use atat::{AtatCmd, InternalError};
use responses::{PowerSavingSettings, PowerSavingStatus};
use types::{PsmMode, RequestedTimer};

use super::NoResponse;
use crate::fmt::Bytes;

/// 8.1 Power saving mode setting +CPSMS
///
/// Enables or disables PSM, optionally requesting one of the two timers. An
/// omitted timer keeps its previous request.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPSMS", NoResponse, timeout_ms = 3000)]
pub struct SetPowerSavingMode {
    #[at_arg(position = 0)]
    pub mode: PsmMode,
    #[at_arg(position = 1)]
    pub timer: Option<RequestedTimer>,
}

/// 8.1 Power saving mode setting +CPSMS
///
/// Reads the PSM mode and the requested timer values, e.g.
/// `+CPSMS: 1,,,"01000011","00000101"`. The unused GERAN/UTRAN fields come
/// back empty, so the line is split by hand.
#[derive(Clone)]
pub struct GetPowerSavingMode;

impl AtatCmd for GetPowerSavingMode {
    type Response = PowerSavingSettings;

    const MAX_LEN: usize = 11;
    const MAX_TIMEOUT_MS: u32 = 3000;

    fn write(&self, buf: &mut [u8]) -> usize {
        let cmd = b"AT+CPSMS?\r\n";
        let len = cmd.len().min(buf.len());
        buf[..len].copy_from_slice(&cmd[..len]);
        len
    }

    fn parse(&self, resp: Result<&[u8], InternalError>) -> Result<Self::Response, atat::Error> {
        let resp = resp.map_err(atat::Error::from)?;
        PowerSavingSettings::from_slice(resp).ok_or_else(|| {
            warn!("Unexpected +CPSMS response {:?}", Bytes(resp));
            atat::Error::Parse
        })
    }
}

/// 8.3 Power saving mode status report +NPSMR
///
/// Reads whether the module is currently in PSM, `<mode>` is only present
/// when the URC is enabled.
#[derive(Clone, AtatCmd)]
#[at_cmd("+NPSMR?", PowerSavingStatus)]
pub struct GetPowerSavingStatus;
