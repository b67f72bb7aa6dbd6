//! Shared mutable context threaded through every FSM handler.
//!
//! Holds the latest sample, the idle timestamp and the configuration.
//! Overwritten in place each cycle.

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Light reading (written by Sampling, consumed by Rendering)
// ---------------------------------------------------------------------------

/// The most recent sample and its display-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightReading {
    /// Raw ADC count (0 – `adc_max_raw`).
    pub raw: u16,
    /// Linear map of `raw` onto 0 – `display_max`.
    pub scaled: u8,
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Monotonic time of the current step (ms).  Set by the caller
    /// before each `Fsm::tick`.
    pub now_ms: u64,
    /// Time at which Idling was last entered (ms).
    pub last_tick_ms: u64,
    /// Steps elapsed since the current state was entered.
    pub ticks_in_state: u64,

    // -- Sensor data --
    pub reading: LightReading,

    // -- Configuration --
    pub config: SystemConfig,
}

impl FsmContext {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            now_ms: 0,
            last_tick_ms: 0,
            ticks_in_state: 0,
            reading: LightReading::default(),
            config,
        }
    }

    /// Milliseconds since Idling was entered.  Saturates at 0 if the clock
    /// reads earlier than the recorded timestamp.
    pub fn idle_elapsed_ms(&self) -> u64 {
        self.now_ms.saturating_sub(self.last_tick_ms)
    }
}
