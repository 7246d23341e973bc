//! Argument and parameter types used by CoAP Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoapProfileParam {
    /// 0: destination IPv4 address and port
    Server = 0,
    /// 1: destination URI
    Uri = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoapMethod {
    Get = 1,
    Delete = 2,
    Put = 3,
    Post = 4,
}

impl CoapMethod {
    /// `true` for the methods that carry a request payload.
    pub fn has_payload(&self) -> bool {
        matches!(self, Self::Put | Self::Post)
    }
}

/// Payload content formats accepted by `+UCOAPC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContentFormat {
    TextPlain = 0,
    LinkFormat = 1,
    Xml = 2,
    OctetStream = 3,
    Exi = 4,
    Json = 5,
}
