//! AT Commands for the u-blox SARA-N2 NB-IoT module family\
//! Following the [SARA-N2 / SARA-N3 series AT commands manual](https://www.u-blox.com/sites/default/files/SARA-N2-N3_ATCommands_%28UBX-16014887%29.pdf)

pub mod coap;
pub mod control;
pub mod network_service;
pub mod power_saving;

use atat::atat_derive::{AtatCmd, AtatResp};

#[derive(Debug, Clone, AtatResp)]
pub struct NoResponse;

#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse, timeout_ms = 1000)]
pub struct AT;

/// Strips the information text prefix (`+CMD: `) from a response line.
pub(crate) fn strip_prefix(resp: &[u8]) -> &[u8] {
    match resp.iter().position(|&b| b == b':') {
        Some(i) if resp.first() == Some(&b'+') => {
            let rest = &resp[i + 1..];
            match rest.first() {
                Some(b' ') => &rest[1..],
                _ => rest,
            }
        }
        _ => resp,
    }
}
