//! Per-state update handlers and the transition function.
//!
//! ```text
//!  SAMPLING ──[always]──▶ RENDERING ──[always]──▶ IDLING
//!     ▲                                             │
//!     └────────────[elapsed >= interval]────────────┘
//! ```
//!
//! Every handler does O(1) work and returns; none of them waits.

use super::StateId;
use super::context::{FsmContext, LightReading};
use crate::app::ports::{DisplayPort, SensorPort};
use crate::sensors::scale_reading;

/// Run the handler for `state` and return the next state, if any.
pub fn update<H>(state: StateId, ctx: &mut FsmContext, hw: &mut H) -> Option<StateId>
where
    H: SensorPort + DisplayPort,
{
    match state {
        StateId::Sampling => sampling_update(ctx, hw),
        StateId::Rendering => rendering_update(ctx, hw),
        StateId::Idling => idling_update(ctx),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SAMPLING — one ADC conversion, scaled into the display range
// ═══════════════════════════════════════════════════════════════════════════

fn sampling_update(ctx: &mut FsmContext, sensor: &mut impl SensorPort) -> Option<StateId> {
    let raw = sensor.read_raw();
    ctx.reading = LightReading {
        raw,
        scaled: scale_reading(raw, ctx.config.adc_max_raw, ctx.config.display_max),
    };
    Some(StateId::Rendering)
}

// ═══════════════════════════════════════════════════════════════════════════
//  RENDERING — repaint the value field, start the idle window
// ═══════════════════════════════════════════════════════════════════════════

fn rendering_update(ctx: &mut FsmContext, display: &mut impl DisplayPort) -> Option<StateId> {
    display.show_value(ctx.reading.scaled);
    ctx.last_tick_ms = ctx.now_ms;
    Some(StateId::Idling)
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLING — yield until the sample interval has passed
// ═══════════════════════════════════════════════════════════════════════════

fn idling_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.idle_elapsed_ms() >= u64::from(ctx.config.sample_interval_ms) {
        return Some(StateId::Sampling);
    }
    None
}
