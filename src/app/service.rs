//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the polling FSM and its shared context.  It exposes
//! a hardware-agnostic API; all I/O flows through port traits injected at
//! call sites, so the whole service runs against mock adapters in tests.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!    TimePort ──▶ │       AppService        │
//! DisplayPort ◀── │  Sampling·Rendering·Idle │
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::config::SystemConfig;
use crate::fsm::context::{FsmContext, LightReading};
use crate::fsm::{Fsm, StateId, Step};

use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, SensorPort, TimePort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    fsm: Fsm,
    ctx: FsmContext,
    /// Last scaled value reported through the sink.
    last_reported: Option<u8>,
}

impl AppService {
    /// Construct the service.  Does **not** touch the display — call
    /// [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            fsm: Fsm::new(StateId::Sampling),
            ctx: FsmContext::new(config),
            last_reported: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Draw the static frame (once) and arm the FSM.
    pub fn start(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        display.draw_frame();
        self.fsm.start(&mut self.ctx);
        let state = self.fsm.current_state().unwrap_or(StateId::Sampling);
        sink.emit(&AppEvent::Started(state));
        info!("AppService started in {:?}", state);
    }

    // ── Per-step orchestration ────────────────────────────────

    /// Run one FSM step and return immediately.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`DisplayPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + DisplayPort),
        clock: &impl TimePort,
        sink: &mut impl EventSink,
    ) -> Step {
        self.ctx.now_ms = clock.uptime_ms();
        let step = self.fsm.tick(&mut self.ctx, hw);

        match step {
            Step::Moved { from: StateId::Rendering, .. } => {
                let reading = self.ctx.reading;
                if self.last_reported != Some(reading.scaled) {
                    self.last_reported = Some(reading.scaled);
                    sink.emit(&AppEvent::ValueChanged(reading));
                }
            }
            Step::Reset { raw } => sink.emit(&AppEvent::StateReset { raw }),
            Step::Moved { .. } | Step::Stayed(_) => {}
        }

        step
    }

    /// Resume the FSM from a raw state byte.  Invalid bytes are accepted
    /// here and reset on the next tick.
    pub fn restore_state(&mut self, raw: u8) {
        self.fsm.restore(raw);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current FSM state (`None` only right after restoring a bad byte).
    pub fn state(&self) -> Option<StateId> {
        self.fsm.current_state()
    }

    /// Most recent sample.
    pub fn reading(&self) -> LightReading {
        self.ctx.reading
    }

    /// Completed sample/render/idle cycles.
    pub fn cycles(&self) -> u64 {
        self.fsm.cycles()
    }

    /// Total steps executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.fsm.tick_count()
    }
}
