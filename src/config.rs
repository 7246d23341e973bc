use crate::module_timing::{alive_poll_interval, boot_time};

/// Number of `AT` probes sent after a reboot before giving up
const DEFAULT_ALIVE_ATTEMPTS: u8 = 50;

/// Driver tunables for [`crate::driver::sara_n2::SaraN2`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) boot_wait_ms: u32,
    pub(crate) alive_attempts: u8,
    pub(crate) alive_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boot_wait_ms: boot_time(),
            alive_attempts: DEFAULT_ALIVE_ATTEMPTS,
            alive_interval_ms: alive_poll_interval(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time to wait after `AT+NRB` before probing the module
    #[must_use]
    pub fn with_boot_wait(self, boot_wait_ms: u32) -> Self {
        Self {
            boot_wait_ms,
            ..self
        }
    }

    #[must_use]
    pub fn with_alive_attempts(self, alive_attempts: u8) -> Self {
        Self {
            alive_attempts: alive_attempts.max(1),
            ..self
        }
    }

    #[must_use]
    pub fn with_alive_interval(self, alive_interval_ms: u32) -> Self {
        Self {
            alive_interval_ms,
            ..self
        }
    }

    pub fn boot_wait_ms(&self) -> u32 {
        self.boot_wait_ms
    }

    pub fn alive_attempts(&self) -> u8 {
        self.alive_attempts
    }

    pub fn alive_interval_ms(&self) -> u32 {
        self.alive_interval_ms
    }
}
