//! Screen layout constants.
//!
//! Positions are in pixels on the 170x320 portrait panel.  Everything is
//! `const` so the renderer does no layout arithmetic per frame.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X13, FONT_9X15};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Header font.  27 characters × 6 px = 162 px fits the 170 px width.
pub const HEADER_FONT: &MonoFont<'static> = &FONT_6X13;

/// Label and value font.
pub const FONT: &MonoFont<'static> = &FONT_9X15;

/// Glyph cell of [`FONT`].
pub const CHAR_WIDTH: u32 = 9;
pub const CHAR_HEIGHT: u32 = 15;

/// Vertical advance between header lines.
pub const LINE_HEIGHT: i32 = 16;

pub const FOREGROUND: Rgb565 = Rgb565::WHITE;
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Static header, drawn top-down from the origin.
pub const HEADER_LINES: [&str; 3] = [
    "---------------------------",
    "   KY018 Photoresistor",
    "---------------------------",
];

pub const LABEL_TEXT: &str = "Light Intensity:";
pub const LABEL_ORIGIN: Point = Point::new(0, 70);

/// Top-left corner of the numeric field.
pub const VALUE_ORIGIN: Point = Point::new(0, 90);

/// Pixel width of `chars` character cells in [`FONT`].
pub const fn text_width(chars: usize) -> u32 {
    chars as u32 * CHAR_WIDTH
}
