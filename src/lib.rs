#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod driver;
pub mod error;
pub mod interface;
mod module_timing;
pub mod timer;

#[cfg(test)]
mod test_helpers;

pub use config::Config;
pub use driver::sara_n2::SaraN2;
pub use driver::{Driver, DriverIdentity, NoDriver};
pub use error::Error;
pub use interface::NbIotInterface;
pub use timer::{Binary8, TimerFamily, TimerUnit, TimerValue};
