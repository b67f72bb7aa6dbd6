//! In-memory 170x320 RGB565 draw target.
//!
//! Keeps the full pixel array for equality checks plus a log of every
//! point written since the last [`Framebuffer::reset_log`].

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use lightmeter::pins::{LCD_HEIGHT, LCD_WIDTH};

/// Colour of a pixel nothing has written yet.
pub const UNTOUCHED: Rgb565 = Rgb565::RED;

#[derive(Clone)]
pub struct Framebuffer {
    pixels: Vec<Rgb565>,
    pub writes: Vec<Point>,
}

#[allow(dead_code)]
impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![UNTOUCHED; usize::from(LCD_WIDTH) * usize::from(LCD_HEIGHT)],
            writes: Vec::new(),
        }
    }

    pub fn pixel(&self, p: Point) -> Option<Rgb565> {
        self.index(p).map(|i| self.pixels[i])
    }

    pub fn reset_log(&mut self) {
        self.writes.clear();
    }

    /// Every write since the last reset landed inside `area`.
    pub fn writes_within(&self, area: &Rectangle) -> bool {
        self.writes.iter().all(|p| area.contains(*p))
    }

    /// Points whose colour differs between `self` and `other`.
    pub fn diff(&self, other: &Framebuffer) -> Vec<Point> {
        self.bounding_box()
            .points()
            .filter(|p| self.pixel(*p) != other.pixel(*p))
            .collect()
    }

    pub fn same_pixels(&self, other: &Framebuffer) -> bool {
        self.pixels == other.pixels
    }

    fn index(&self, p: Point) -> Option<usize> {
        let (w, h) = (i32::from(LCD_WIDTH), i32::from(LCD_HEIGHT));
        if p.x < 0 || p.y < 0 || p.x >= w || p.y >= h {
            return None;
        }
        usize::try_from(p.y * w + p.x).ok()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(u32::from(LCD_WIDTH), u32::from(LCD_HEIGHT))
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.writes.push(point);
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
