//! Argument and parameter types used by Power saving Commands and Responses
use atat::atat_derive::AtatEnum;
use atat::AtatLen;
use serde::{Serialize, Serializer};

use crate::timer::{Binary8, TimerFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PsmMode {
    /// 0: PSM disabled
    Disabled = 0,
    /// 1: PSM enabled
    Enabled = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PsmState {
    /// 0: normal mode
    Normal = 0,
    /// 1: power saving mode
    PowerSaving = 1,
}

/// One of the two `+CPSMS` timer requests.
///
/// `+CPSMS` takes the requested periodic RAU and GPRS ready timer ahead of
/// the two timers used on NB-IoT. Those are left empty, so the timer is
/// serialized together with its leading separators:
/// `,,"00100101"` for the TAU timer and `,,,"00000101"` for the active time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RequestedTimer {
    pub family: TimerFamily,
    pub value: Binary8,
}

impl AtatLen for RequestedTimer {
    const LEN: usize = 3 + 8 + 2;
}

impl Serialize for RequestedTimer {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0u8; 3 + 8 + 2];
        let skip: &[u8] = match self.family {
            TimerFamily::Tau => b",,",
            TimerFamily::Active => b",,,",
        };

        let mut len = skip.len();
        buf[..len].copy_from_slice(skip);
        buf[len] = b'"';
        len += 1;
        buf[len..len + 8].copy_from_slice(&self.value.to_ascii());
        len += 8;
        buf[len] = b'"';
        len += 1;

        Serializer::serialize_bytes(serializer, &buf[..len])
    }
}
