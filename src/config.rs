//! System configuration parameters
//!
//! All tunable parameters for the lightmeter firmware.  The device has no
//! persistent storage, so the values are compiled in via [`Default`] and
//! checked once at boot with [`SystemConfig::validate`].

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    // --- Sampling ---
    /// Minimum time between the end of one render and the next sample (ms)
    pub sample_interval_ms: u32,
    /// Largest raw ADC value (12-bit resolution → 4095)
    pub adc_max_raw: u16,

    // --- Display ---
    /// Largest scaled value shown on screen
    pub display_max: u8,
    /// Width of the blank field written over the previous value (characters)
    pub value_field_chars: u8,

    // --- Serial probe ---
    /// Delay between serial probe lines (ms)
    pub probe_interval_ms: u32,
    /// Console UART rate.  Informational: ESP-IDF sets it from sdkconfig.
    pub console_baud: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Sampling
            sample_interval_ms: 100, // 10 Hz
            adc_max_raw: 4095,

            // Display
            display_max: 99,
            value_field_chars: 8,

            // Serial probe
            probe_interval_ms: 100,
            console_baud: 115_200,
        }
    }
}

impl SystemConfig {
    /// Reject values that would break the sampling or rendering invariants.
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            return Err(Error::Config("sample_interval_ms must be non-zero"));
        }
        if self.probe_interval_ms == 0 {
            return Err(Error::Config("probe_interval_ms must be non-zero"));
        }
        if self.adc_max_raw == 0 {
            return Err(Error::Config("adc_max_raw must be non-zero"));
        }
        if self.display_max == 0 {
            return Err(Error::Config("display_max must be non-zero"));
        }
        if (self.value_field_chars as usize) < decimal_width(self.display_max) {
            return Err(Error::Config("value_field_chars too narrow for display_max"));
        }
        Ok(())
    }
}

/// Number of decimal digits needed to print `v`.
pub(crate) fn decimal_width(v: u8) -> usize {
    match v {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}
