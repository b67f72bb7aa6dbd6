//! Port traits — the hexagonal boundary between domain logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService / Fsm (domain)
//! ```
//!
//! Driven adapters (ADC, panel, clock, event sinks) implement these traits.
//! The domain consumes them via generics, so the polling logic never
//! touches hardware directly and runs unchanged against test doubles.

// ───────────────────────────────────────────────────────────────
// Sensor port (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the light sensor.
pub trait SensorPort {
    /// One raw ADC conversion at full resolution.  Never fails: a line the
    /// hardware cannot read yields whatever value the ADC produces.
    fn read_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Display port (domain → panel)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the screen.  Fire-and-forget: implementations log
/// draw failures and carry on.
pub trait DisplayPort {
    /// Clear the panel and draw the static header and label.
    fn draw_frame(&mut self);

    /// Repaint only the numeric field with `value`.
    fn show_value(&mut self, value: u8);
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic clock.
pub trait TimePort {
    /// Milliseconds since boot.  Never decreases.
    fn uptime_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
