//! Sensor drivers.
//!
//! Only one input exists on this board: the KY-018 photoresistor on
//! ADC1.  The driver produces a raw count that the scheduler scales and writes
//! into `FsmContext` during the Sampling state.

pub mod photoresistor;

pub use photoresistor::{Photoresistor, scale_reading};
