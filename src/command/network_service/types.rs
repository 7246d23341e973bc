//! Argument and parameter types used by Network service Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetworkRegistrationStat {
    /// • 0: not registered, the MT is not currently searching an operator to register to
    NotRegistered = 0,
    /// • 1: registered, home network
    Registered = 1,
    /// • 2: not registered, but the MT is currently trying to attach or searching an
    /// operator to register to
    NotRegisteredSearching = 2,
    /// • 3: registration denied
    RegistrationDenied = 3,
    /// • 4: unknown (e.g. out of E-UTRAN coverage)
    Unknown = 4,
    /// • 5: registered, roaming
    RegisteredRoaming = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignallingConnectionMode {
    Idle = 0,
    Connected = 1,
}

/// Statistics group reported by `+NUESTATS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatisticsType {
    Radio,
    Cell,
    Bler,
    Throughput,
    AppMemory,
    All,
}

impl StatisticsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Radio => "RADIO",
            Self::Cell => "CELL",
            Self::Bler => "BLER",
            Self::Throughput => "THP",
            Self::AppMemory => "APPSMEM",
            Self::All => "ALL",
        }
    }
}

/// LTE bands the NB-IoT deployments of interest run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// 900 MHz, downlink EARFCN 3450..=3799
    B8,
    /// 800 MHz, downlink EARFCN 6150..=6449
    B20,
}

pub const EARFCN_B8_LOW: u32 = 3450;
pub const EARFCN_B8_HIGH: u32 = 3799;
pub const EARFCN_B20_LOW: u32 = 6150;
pub const EARFCN_B20_HIGH: u32 = 6449;

impl Band {
    pub fn from_earfcn(earfcn: u32) -> Option<Self> {
        match earfcn {
            EARFCN_B8_LOW..=EARFCN_B8_HIGH => Some(Self::B8),
            EARFCN_B20_LOW..=EARFCN_B20_HIGH => Some(Self::B20),
            _ => None,
        }
    }
}
