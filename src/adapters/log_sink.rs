//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (the ESP-IDF logger on the board, which goes to the USB-CDC
//! console).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::ValueChanged(reading) => {
                info!("VALUE | raw={} scaled={}", reading.raw, reading.scaled);
            }
            AppEvent::StateReset { raw } => {
                warn!("RESET | invalid state byte {} -> Sampling", raw);
            }
        }
    }
}
