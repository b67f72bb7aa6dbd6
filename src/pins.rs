//! GPIO / peripheral pin assignments for the LilyGO T-Display-S3.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  The parallel LCD bus pins are fixed by the
//! board; only the sensor input is a wiring choice.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// KY-018 photoresistor module, signal pin `S` → header pin 1.
/// ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 1;
/// ADC1 channel number backing [`LIGHT_ADC_GPIO`].
pub const LIGHT_ADC_CHANNEL: u32 = 0;

// ---------------------------------------------------------------------------
// LCD (ST7789, 8-bit i80 parallel bus)
// ---------------------------------------------------------------------------

/// Data lines D0 – D7, in bus order.
pub const LCD_DATA_GPIOS: [i32; 8] = [39, 40, 41, 42, 45, 46, 47, 48];
/// Write strobe.
pub const LCD_WR_GPIO: i32 = 8;
/// Read strobe.  Unused, but must be held HIGH.
pub const LCD_RD_GPIO: i32 = 9;
/// Data / command select.
pub const LCD_DC_GPIO: i32 = 7;
/// Chip select (active LOW, held LOW — the panel is the only bus device).
pub const LCD_CS_GPIO: i32 = 6;
/// Panel reset (active LOW).
pub const LCD_RST_GPIO: i32 = 5;

/// Panel power enable.  Must be HIGH when running from battery.
pub const LCD_POWER_GPIO: i32 = 15;
/// Backlight enable (active HIGH).
pub const LCD_BACKLIGHT_GPIO: i32 = 38;

// ---------------------------------------------------------------------------
// Panel geometry
// ---------------------------------------------------------------------------

/// Visible panel width in portrait orientation.
pub const LCD_WIDTH: u16 = 170;
/// Visible panel height in portrait orientation.
pub const LCD_HEIGHT: u16 = 320;
/// Column offset of the 170-pixel window inside the ST7789's 240-pixel RAM.
pub const LCD_COL_OFFSET: u16 = 35;
