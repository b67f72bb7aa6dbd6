//! Hardware initialisation and board peripheral helpers.

pub mod hw_init;
#[cfg(target_os = "espidf")]
pub mod lcd;
pub mod watchdog;
