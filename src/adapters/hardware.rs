//! Hardware adapter — bridges the board peripherals to domain port traits.
//!
//! Owns the photoresistor driver and the presenter, exposing them through
//! [`SensorPort`] and [`DisplayPort`] as one value so the FSM can borrow
//! both at once.  On non-espidf targets the sensor reads the simulation
//! injection point and the presenter can wrap any draw target.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

use crate::app::ports::{DisplayPort, SensorPort};
use crate::display::Presenter;
use crate::sensors::Photoresistor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<D> {
    sensor: Photoresistor,
    presenter: Presenter<D>,
}

impl<D> HardwareAdapter<D> {
    pub fn new(sensor: Photoresistor, presenter: Presenter<D>) -> Self {
        Self { sensor, presenter }
    }

    pub fn presenter(&self) -> &Presenter<D> {
        &self.presenter
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<D> SensorPort for HardwareAdapter<D> {
    fn read_raw(&mut self) -> u16 {
        self.sensor.read_raw()
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<D> DisplayPort for HardwareAdapter<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    fn draw_frame(&mut self) {
        DisplayPort::draw_frame(&mut self.presenter);
    }

    fn show_value(&mut self, value: u8) {
        self.presenter.show_value(value);
    }
}
