use core::fmt;

/// Failure reasons of the public operations.
///
/// Local validation errors are raised by this crate's own checks. Caller
/// input is checked before the modem is touched, timer values read back
/// from the modem are checked by the same codec after the read. Anything
/// the driver reports as not acknowledged, timed out or malformed collapses
/// into [`Error::Failed`]. CoAP response codes are not errors and never show
/// up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    // Binding errors
    DriverUnknown,

    // Local validation errors
    ExceedsMaxValue,
    InvalidUnitValue,
    InvalidBinary,
    UriTooLong,
    PayloadTooLong,
    /// The payload contains `"` or a control character, or its presence
    /// does not match the CoAP method
    InvalidPayload,
    InvalidAddress,

    // Driver / transport errors
    Failed,
}

impl Error {
    /// `true` if the error was raised by validation in this crate rather
    /// than by the driver or the modem.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Failed)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriverUnknown => "no modem driver bound".fmt(f),
            Self::ExceedsMaxValue => "timer multiplier exceeds 31".fmt(f),
            Self::InvalidUnitValue => "unit is not defined for this timer".fmt(f),
            Self::InvalidBinary => "not an 8 character binary string".fmt(f),
            Self::UriTooLong => "URI exceeds 200 characters".fmt(f),
            Self::PayloadTooLong => "CoAP payload too long".fmt(f),
            Self::InvalidPayload => "CoAP payload not allowed".fmt(f),
            Self::InvalidAddress => "not an IPv4 address literal".fmt(f),
            Self::Failed => "modem command failed".fmt(f),
        }
    }
}
