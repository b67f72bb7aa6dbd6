//! Lightmeter firmware library.
//!
//! Exposes the pure-logic modules for integration testing and for the two
//! board binaries.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod display;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod pins;
pub mod probe;
pub mod sensors;
