//! ### 13 - Constrained Application Protocol (CoAP)
//!
//! The module holds a single CoAP profile (destination server and URI) in
//! NVM. Requests are issued against that profile and the server answer is
//! reported as `+UCOAPCD: <response_code>[,"<payload>"]`.
pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use responses::CoapCommandResponse;
use types::{CoapMethod, CoapProfileParam, ContentFormat};

use super::NoResponse;

/// Longest URI the module stores
pub const MAX_URI_LEN: usize = 200;

/// Longest request or response payload handled in one exchange
pub const MAX_PAYLOAD_LEN: usize = 512;

/// 13.1 CoAP profile configuration +UCOAP
///
/// Sets the destination server IPv4 address and port.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse, timeout_ms = 3000)]
pub struct SetCoapServer<'a> {
    #[at_arg(position = 0)]
    pub param: CoapProfileParam,
    #[at_arg(position = 1, len = 15)]
    pub address: &'a str,
    #[at_arg(position = 2)]
    pub port: u16,
}

/// 13.1 CoAP profile configuration +UCOAP
///
/// Sets the URI requests are addressed to, at most [`MAX_URI_LEN`] characters.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAP", NoResponse, timeout_ms = 3000)]
pub struct SetCoapUri<'a> {
    #[at_arg(position = 0)]
    pub param: CoapProfileParam,
    #[at_arg(position = 1, len = 200)]
    pub uri: &'a str,
}

/// 13.2 CoAP command +UCOAPC
///
/// Performs a request without payload (GET, DELETE).
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAPC", CoapCommandResponse, attempts = 1, timeout_ms = 60000)]
pub struct CoapCommand {
    #[at_arg(position = 0)]
    pub method: CoapMethod,
}

/// 13.2 CoAP command +UCOAPC
///
/// Performs a request carrying a payload (PUT, POST).
#[derive(Clone, AtatCmd)]
#[at_cmd("+UCOAPC", CoapCommandResponse, attempts = 1, timeout_ms = 60000)]
pub struct CoapPayloadCommand<'a> {
    #[at_arg(position = 0)]
    pub method: CoapMethod,
    #[at_arg(position = 1, len = 512)]
    pub payload: &'a str,
    #[at_arg(position = 2)]
    pub format: ContentFormat,
}
