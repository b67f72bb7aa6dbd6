//! KY-018 photoresistor (LDR) light sensor driver.
//!
//! The module is a voltage divider: brighter light lowers the LDR's
//! resistance and raises the voltage on the signal pin.  The ESP32-S3 ADC
//! turns that into a 12-bit count which is then mapped linearly onto the
//! display range.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH0 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::ports::SensorPort;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_LIGHT_ADC: AtomicU16 = AtomicU16::new(0);

/// Inject the next raw ADC value seen by every [`Photoresistor`] (host only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_adc(raw: u16) {
    SIM_LIGHT_ADC.store(raw, Ordering::Relaxed);
}

pub struct Photoresistor {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    adc_channel: u32,
}

impl Photoresistor {
    pub fn new(adc_channel: u32) -> Self {
        Self { adc_channel }
    }

    /// Raw 12-bit conversion.  Bright environment → high values.
    #[cfg(target_os = "espidf")]
    pub fn read_raw(&mut self) -> u16 {
        hw_init::adc1_read(self.adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read_raw(&mut self) -> u16 {
        SIM_LIGHT_ADC.load(Ordering::Relaxed)
    }
}

impl SensorPort for Photoresistor {
    fn read_raw(&mut self) -> u16 {
        Photoresistor::read_raw(self)
    }
}

/// Map `raw` from `[0, adc_max]` onto `[0, display_max]`, rounding down.
///
/// Values above `adc_max` saturate, so the result never exceeds
/// `display_max`.  `adc_max == 0` maps everything to 0.
pub fn scale_reading(raw: u16, adc_max: u16, display_max: u8) -> u8 {
    if adc_max == 0 {
        return 0;
    }
    let raw = u32::from(raw.min(adc_max));
    (raw * u32::from(display_max) / u32::from(adc_max)) as u8
}
