//! Application core — pure domain logic, zero I/O.
//!
//! The polling loop's rules live here: when to sample, when to render,
//! how long to idle.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer testable
//! without a board.

pub mod events;
pub mod ports;
pub mod service;
