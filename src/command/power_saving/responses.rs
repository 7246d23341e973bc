//! Responses for Power saving Commands
use super::types::PsmState;
use atat::atat_derive::AtatResp;
use atat::AtatResp;
use heapless::String;

/// 8.1 Power saving mode setting +CPSMS
///
/// Timers are kept as reported, undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerSavingSettings {
    pub enabled: bool,
    pub tau: Option<String<8>>,
    pub active: Option<String<8>>,
}

impl AtatResp for PowerSavingSettings {}

/// 8.3 Power saving mode status report +NPSMR
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct PowerSavingStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub mode: Option<PsmState>,
}
