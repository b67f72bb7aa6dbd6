//! Static frame + partial-redraw value renderer.
//!
//! The frame (header and label) is drawn once at boot.  After that only the
//! numeric field is touched: it is filled with the background colour and
//! the new value is written on top.  The erase covers the wider of the
//! fixed blank field and the previously rendered text, so no stale digit
//! survives and no pixel outside the field changes.

use core::fmt::Write as _;

use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use log::warn;

use super::layout::{
    BACKGROUND, CHAR_HEIGHT, FONT, FOREGROUND, HEADER_FONT, HEADER_LINES, LABEL_ORIGIN,
    LABEL_TEXT, LINE_HEIGHT, VALUE_ORIGIN, text_width,
};
use crate::app::ports::DisplayPort;
use crate::config::SystemConfig;
use crate::error::Error;

pub struct Presenter<D> {
    target: D,
    header_style: MonoTextStyle<'static, Rgb565>,
    style: MonoTextStyle<'static, Rgb565>,
    /// Blank field width in pixels.
    field_width: u32,
    /// Value currently on screen, if any.
    shown: Option<u8>,
    /// Pixel width of the text currently on screen.
    shown_width: u32,
}

impl<D> Presenter<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D, config: &SystemConfig) -> Self {
        Self {
            target,
            header_style: MonoTextStyleBuilder::new()
                .font(HEADER_FONT)
                .text_color(FOREGROUND)
                .background_color(BACKGROUND)
                .build(),
            style: MonoTextStyleBuilder::new()
                .font(FONT)
                .text_color(FOREGROUND)
                .background_color(BACKGROUND)
                .build(),
            field_width: text_width(config.value_field_chars as usize),
            shown: None,
            shown_width: 0,
        }
    }

    /// Clear the panel and draw the header and label.
    pub fn draw_frame(&mut self) -> Result<(), D::Error> {
        self.target.clear(BACKGROUND)?;

        let mut origin = Point::zero();
        for line in HEADER_LINES {
            Text::with_baseline(line, origin, self.header_style, Baseline::Top)
                .draw(&mut self.target)?;
            origin.y += LINE_HEIGHT;
        }
        Text::with_baseline(LABEL_TEXT, LABEL_ORIGIN, self.style, Baseline::Top)
            .draw(&mut self.target)?;

        // The clear wiped whatever value was there.
        self.shown = None;
        self.shown_width = 0;
        Ok(())
    }

    /// Repaint the numeric field with `value`.
    ///
    /// Returns `Ok(false)` without drawing if `value` is already on screen.
    pub fn update_value(&mut self, value: u8) -> Result<bool, D::Error> {
        if self.shown == Some(value) {
            return Ok(false);
        }

        let mut text: heapless::String<4> = heapless::String::new();
        // A u8 is at most three digits; the buffer cannot overflow.
        let _ = write!(text, "{value}");

        self.target.fill_solid(&self.erase_area(), BACKGROUND)?;
        Text::with_baseline(&text, VALUE_ORIGIN, self.style, Baseline::Top)
            .draw(&mut self.target)?;

        self.shown = Some(value);
        self.shown_width = text_width(text.len());
        Ok(true)
    }

    /// Rectangle cleared before each value write.  Every pixel an
    /// `update_value` call touches lies inside this area.
    pub fn erase_area(&self) -> Rectangle {
        Rectangle::new(
            VALUE_ORIGIN,
            Size::new(self.field_width.max(self.shown_width), CHAR_HEIGHT),
        )
    }

    /// Value currently on screen.
    pub fn shown(&self) -> Option<u8> {
        self.shown
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }
}

impl<D> DisplayPort for Presenter<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    fn draw_frame(&mut self) {
        if let Err(e) = Presenter::draw_frame(self) {
            warn!("{} ({:?})", Error::Display("frame draw failed"), e);
        }
    }

    fn show_value(&mut self, value: u8) {
        if let Err(e) = self.update_value(value) {
            // Forget what is on screen so the next call repaints.
            self.shown = None;
            warn!("{} ({:?})", Error::Display("value draw failed"), e);
        }
    }
}
