//! ### 7 - Network service
//!
//! Radio connection and EPS registration status, and the operational
//! statistics reported by `+NUESTATS`.

mod impl_;
pub mod responses;
pub mod types;

use core::fmt::Write;

use atat::atat_derive::AtatCmd;
use atat::{AtatCmd, InternalError};
use heapless::String;
use responses::{EPSNetworkRegistrationStatus, SignallingConnectionStatus, Statistics};
use types::StatisticsType;

use crate::fmt::Bytes;

/// 7.3 Signalling connection status +CSCON
///
/// Returns whether the UE currently has an RRC connection to the network.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSCON?", SignallingConnectionStatus)]
pub struct GetSignallingConnectionStatus;

/// 7.9 EPS network registration status +CEREG
///
/// The location information elements `<tac>`, `<ci>` and `<AcT>` are only
/// reported when `<n>` is 2 or higher and the MT is registered.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CEREG?", EPSNetworkRegistrationStatus)]
pub struct GetEPSNetworkRegistrationStatus;

/// 7.20 Report operational statistics +NUESTATS
///
/// The information text spans one line per statistic, e.g.
/// `NUESTATS: "RADIO","Signal power",-795`. It is handed back unparsed, see
/// [`Statistics::value`] for lookups.
#[derive(Clone)]
pub struct GetStatistics {
    pub kind: StatisticsType,
}

impl AtatCmd for GetStatistics {
    type Response = Statistics;

    const MAX_LEN: usize = 26;
    const MAX_TIMEOUT_MS: u32 = 5000;

    fn write(&self, buf: &mut [u8]) -> usize {
        let mut cmd = String::<32>::new();
        // Longest kind is "APPSMEM", the buffer fits every variant
        write!(cmd, "AT+NUESTATS=\"{}\"\r\n", self.kind.as_str()).ok();

        let len = cmd.len().min(buf.len());
        buf[..len].copy_from_slice(&cmd.as_bytes()[..len]);
        len
    }

    fn parse(&self, resp: Result<&[u8], InternalError>) -> Result<Self::Response, atat::Error> {
        let resp = resp.map_err(atat::Error::from)?;
        Statistics::from_slice(self.kind, resp).ok_or_else(|| {
            warn!("Unexpected +NUESTATS response {:?}", Bytes(resp));
            atat::Error::Parse
        })
    }
}
