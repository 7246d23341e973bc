//! Responses for Network service Commands
use super::types::{NetworkRegistrationStat, SignallingConnectionMode, StatisticsType};
use atat::atat_derive::AtatResp;
use atat::AtatResp;
use heapless::{String, Vec};

/// Room for a full `+NUESTATS="ALL"` report
pub const STATISTICS_LEN: usize = 1024;

/// 7.3 Signalling connection status +CSCON
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct SignallingConnectionStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub mode: SignallingConnectionMode,
}

/// 7.9 EPS network registration status +CEREG
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct EPSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub stat: NetworkRegistrationStat,
    #[at_arg(position = 2)]
    pub tac: Option<String<4>>,
    #[at_arg(position = 3)]
    pub ci: Option<String<8>>,
    #[at_arg(position = 4)]
    pub act: Option<u8>,
}

/// 7.20 Report operational statistics +NUESTATS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub kind: StatisticsType,
    pub data: Vec<u8, STATISTICS_LEN>,
}

impl AtatResp for Statistics {}
