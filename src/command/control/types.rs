//! Argument and parameter types used by Module control Commands
use atat::AtatLen;
use serde::{Serialize, Serializer};

/// `+NCONFIG` function names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigFunction {
    /// Attach automatically after power on or reboot, using the APN
    /// provided by the network
    AutoConnect,
    /// CR_0354_0338 scrambling, operator specific
    Scrambling,
    /// Avoid scheduling of conflicted NSIB (CR_0859), operator specific
    SiAvoid,
    /// Combined EPS/IMSI attach
    CombineAttach,
    /// RRC cell reselection
    CellReselection,
    /// Bearer Independent Protocol between SIM and ME
    Bip,
    /// Power the SIM only while it is accessed
    SimPowerSaving,
}

impl ConfigFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoConnect => "AUTOCONNECT",
            Self::Scrambling => "CR_0354_0338_SCRAMBLING",
            Self::SiAvoid => "CR_0859_SI_AVOID",
            Self::CombineAttach => "COMBINE_ATTACH",
            Self::CellReselection => "CELL_RESELECTION",
            Self::Bip => "ENABLE_BIP",
            Self::SimPowerSaving => "NAS_SIM_POWER_SAVING_ENABLE",
        }
    }
}

impl AtatLen for ConfigFunction {
    const LEN: usize = 27 + 2;
}

impl Serialize for ConfigFunction {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// `+NCONFIG` switch value, sent as `"TRUE"` / `"FALSE"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigValue(pub bool);

impl AtatLen for ConfigValue {
    const LEN: usize = 5 + 2;
}

impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if self.0 { "TRUE" } else { "FALSE" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::control::SetConfiguration;
    use atat::AtatCmd;

    #[test]
    fn write_configuration() {
        let mut buf = [0u8; 64];
        let cmd = SetConfiguration {
            function: ConfigFunction::AutoConnect,
            value: ConfigValue(true),
        };
        let len = cmd.write(&mut buf);
        assert_eq!(&buf[..len], b"AT+NCONFIG=\"AUTOCONNECT\",\"TRUE\"\r\n");

        let cmd = SetConfiguration {
            function: ConfigFunction::SimPowerSaving,
            value: ConfigValue(false),
        };
        let len = cmd.write(&mut buf);
        assert_eq!(
            &buf[..len],
            b"AT+NCONFIG=\"NAS_SIM_POWER_SAVING_ENABLE\",\"FALSE\"\r\n"
        );
    }
}
