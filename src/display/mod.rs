//! On-screen presentation.
//!
//! [`Presenter`] renders into any `embedded-graphics` draw target: the
//! ST7789 panel on the board, an in-memory framebuffer in tests.

pub mod layout;
pub mod presenter;

pub use presenter::Presenter;
