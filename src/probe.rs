//! Serial probe: the stripped-down diagnostic build.
//!
//! Reads the light sensor, prints the raw count as a decimal line, then
//! blocks for the probe interval.  Shares nothing with the FSM/presenter
//! pair except the sensor port; it exists to check wiring and calibrate
//! without the display.

use std::io::Write;

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::app::ports::SensorPort;

pub struct SerialProbe<S, W, D> {
    sensor: S,
    out: W,
    delay: D,
    interval_ms: u32,
}

impl<S, W, D> SerialProbe<S, W, D>
where
    S: SensorPort,
    W: Write,
    D: DelayNs,
{
    pub fn new(sensor: S, out: W, delay: D, interval_ms: u32) -> Self {
        Self {
            sensor,
            out,
            delay,
            interval_ms,
        }
    }

    /// Read, print one line, wait.  Returns the raw value printed.
    pub fn step(&mut self) -> std::io::Result<u16> {
        let raw = self.sensor.read_raw();
        writeln!(self.out, "{raw}")?;
        self.out.flush()?;
        self.delay.delay_ms(self.interval_ms);
        Ok(raw)
    }

    /// Print forever.  Console write errors are logged and skipped.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.step() {
                warn!("probe: console write failed: {}", e);
            }
        }
    }

    pub fn into_parts(self) -> (S, W, D) {
        (self.sensor, self.out, self.delay)
    }
}
