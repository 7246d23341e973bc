//! SARA-N2 timing constants, in milliseconds

/// Time the module needs after `AT+NRB` before it answers on the AT
/// interface again
pub fn boot_time() -> u32 {
    5_000
}

/// Pause between two `AT` probes while waiting for the module to come back
pub fn alive_poll_interval() -> u32 {
    100
}
