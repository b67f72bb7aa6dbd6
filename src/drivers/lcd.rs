//! ST7789 panel bring-up on the T-Display-S3 parallel bus.
//!
//! Builds a [`mipidsi`] display over the 8-bit i80 interface.  The result
//! is an `embedded-graphics` draw target that [`crate::display::Presenter`]
//! renders into.  Power, backlight, RD and CS are static levels set by
//! [`super::hw_init`]; this module owns only the lines it toggles.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{
    Gpio39, Gpio40, Gpio41, Gpio42, Gpio45, Gpio46, Gpio47, Gpio48, Gpio5, Gpio7, Gpio8, Pin,
    PinDriver,
};
use log::info;
use mipidsi::Builder;
use mipidsi::interface::{Generic8BitBus, ParallelInterface};
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation};

use super::hw_init::HwInitError;
use crate::pins;

/// The GPIOs the panel driver takes ownership of.
pub struct LcdPins {
    pub d0: Gpio39,
    pub d1: Gpio40,
    pub d2: Gpio41,
    pub d3: Gpio42,
    pub d4: Gpio45,
    pub d5: Gpio46,
    pub d6: Gpio47,
    pub d7: Gpio48,
    pub wr: Gpio8,
    pub dc: Gpio7,
    pub rst: Gpio5,
}

impl LcdPins {
    /// GPIO numbers in the order `(D0..D7, WR, DC, RST)`.
    fn numbers(&self) -> ([i32; 8], i32, i32, i32) {
        (
            [
                i32::from(self.d0.pin()),
                i32::from(self.d1.pin()),
                i32::from(self.d2.pin()),
                i32::from(self.d3.pin()),
                i32::from(self.d4.pin()),
                i32::from(self.d5.pin()),
                i32::from(self.d6.pin()),
                i32::from(self.d7.pin()),
            ],
            i32::from(self.wr.pin()),
            i32::from(self.dc.pin()),
            i32::from(self.rst.pin()),
        )
    }

    /// Reject a pin set that disagrees with the board map in [`pins`].
    fn check(&self) -> Result<(), HwInitError> {
        let expected = (
            pins::LCD_DATA_GPIOS,
            pins::LCD_WR_GPIO,
            pins::LCD_DC_GPIO,
            pins::LCD_RST_GPIO,
        );
        let actual = self.numbers();
        if actual != expected {
            log::error!("lcd: pin map mismatch, got {:?}, want {:?}", actual, expected);
            return Err(HwInitError::LcdInitFailed);
        }
        Ok(())
    }
}

/// Run the ST7789 init sequence and return the ready draw target.
///
/// Portrait orientation, 170x320 window at column offset 35, colours
/// inverted (the panel is wired for inverted RGB565).
pub fn init_display(
    p: LcdPins,
) -> Result<impl DrawTarget<Color = Rgb565, Error: core::fmt::Debug>, HwInitError> {
    p.check()?;

    let out = |e: esp_idf_svc::sys::EspError| {
        log::error!("lcd: pin config failed: {:?}", e);
        HwInitError::LcdInitFailed
    };

    let bus = Generic8BitBus::new((
        PinDriver::output(p.d0).map_err(out)?,
        PinDriver::output(p.d1).map_err(out)?,
        PinDriver::output(p.d2).map_err(out)?,
        PinDriver::output(p.d3).map_err(out)?,
        PinDriver::output(p.d4).map_err(out)?,
        PinDriver::output(p.d5).map_err(out)?,
        PinDriver::output(p.d6).map_err(out)?,
        PinDriver::output(p.d7).map_err(out)?,
    ));
    let di = ParallelInterface::new(
        bus,
        PinDriver::output(p.dc).map_err(out)?,
        PinDriver::output(p.wr).map_err(out)?,
    );

    let display = Builder::new(ST7789, di)
        .display_size(pins::LCD_WIDTH, pins::LCD_HEIGHT)
        .display_offset(pins::LCD_COL_OFFSET, 0)
        .invert_colors(ColorInversion::Inverted)
        .orientation(Orientation::new())
        .reset_pin(PinDriver::output(p.rst).map_err(out)?)
        .init(&mut FreeRtos)
        .map_err(|e| {
            log::error!("lcd: ST7789 init failed: {:?}", e);
            HwInitError::LcdInitFailed
        })?;

    info!("lcd: ST7789 {}x{} ready", pins::LCD_WIDTH, pins::LCD_HEIGHT);
    Ok(display)
}
