//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                 |
//! |------------|--------------|-----------------------------|
//! | `hardware` | SensorPort   | ESP32 ADC1 (KY-018)         |
//! |            | DisplayPort  | ST7789 via `Presenter`      |
//! | `log_sink` | EventSink    | Serial log output           |
//! | `time`     | TimePort     | ESP32 system timer          |

pub mod hardware;
pub mod log_sink;
pub mod time;
