//! ### 5 - Module control
//!
//! Reboot and the `+NCONFIG` configuration switches. Configuration changes
//! are stored in NVM and most of them only take effect after a reboot.
pub mod types;

use atat::atat_derive::AtatCmd;
use types::{ConfigFunction, ConfigValue};

use super::NoResponse;

/// 5.1 Reboot +NRB
///
/// Reboots the module. The module prints `REBOOTING` followed by the boot
/// banner and is not responsive until the boot has completed.
#[derive(Clone, AtatCmd)]
#[at_cmd("+NRB", NoResponse, attempts = 1, timeout_ms = 10000)]
pub struct Reboot;

/// 5.5 Configure UE behaviour +NCONFIG
///
/// Sets one of the UE configuration switches.
#[derive(Clone, AtatCmd)]
#[at_cmd("+NCONFIG", NoResponse, timeout_ms = 3000)]
pub struct SetConfiguration {
    #[at_arg(position = 0)]
    pub function: ConfigFunction,
    #[at_arg(position = 1)]
    pub value: ConfigValue,
}
