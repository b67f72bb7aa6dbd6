//! Cooperative polling state machine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  StateId     │ handler             │ next               │
//! ├──────────────┼─────────────────────┼────────────────────┤
//! │  Sampling    │ read ADC, scale     │ Rendering          │
//! │  Rendering   │ show value, stamp   │ Idling             │
//! │  Idling      │ check elapsed time  │ Sampling | stay    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call to [`Fsm::tick`] runs the handler for the **current** state
//! exactly once and returns.  If it yields `Some(next)` the engine moves
//! to `next`; the new state's handler runs on the following tick.  All
//! handlers receive `&mut FsmContext` plus the hardware ports.
//!
//! The current state is held as its raw discriminant so it can be restored
//! from outside (see [`Fsm::restore`]).  An unrecognised byte is never
//! fatal: the next tick resets to `Sampling`.

pub mod context;
pub mod states;

use context::FsmContext;
use log::{debug, info, warn};

use crate::app::ports::{DisplayPort, SensorPort};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Sampling = 0,
    Rendering = 1,
    Idling = 2,
}

impl StateId {
    /// Total number of states.
    pub const COUNT: usize = 3;

    /// Decode a raw discriminant.  `None` for anything out of range.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Sampling),
            1 => Some(Self::Rendering),
            2 => Some(Self::Idling),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sampling => "Sampling",
            Self::Rendering => "Rendering",
            Self::Idling => "Idling",
        }
    }
}

/// What a single [`Fsm::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The handler ran and asked to stay.
    Stayed(StateId),
    /// The handler ran and the engine moved on.
    Moved { from: StateId, to: StateId },
    /// The stored state byte was invalid; the engine reset to `Sampling`
    /// without running a handler.
    Reset { raw: u8 },
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Raw discriminant of the active state.
    current: u8,
    /// Monotonically increasing tick counter.
    tick_count: u64,
    /// Tick at which the current state was entered.
    state_entry_tick: u64,
    /// Completed Sampling → Rendering → Idling rounds.
    cycles: u64,
}

impl Fsm {
    pub fn new(initial: StateId) -> Self {
        Self {
            current: initial as u8,
            tick_count: 0,
            state_entry_tick: 0,
            cycles: 0,
        }
    }

    /// Log the starting state.  Call once, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        ctx.ticks_in_state = 0;
        match self.current_state() {
            Some(s) => info!("FSM starting in state: {}", s.name()),
            None => warn!("FSM starting from unrecognised state byte {}", self.current),
        }
    }

    /// Advance the FSM by one step.
    ///
    /// 1. Increment the tick counter and publish timing into `ctx`.
    /// 2. Decode the current state; an invalid byte resets to `Sampling`.
    /// 3. Run the state's handler and apply the transition it returns.
    pub fn tick<H>(&mut self, ctx: &mut FsmContext, hw: &mut H) -> Step
    where
        H: SensorPort + DisplayPort,
    {
        self.tick_count += 1;
        ctx.ticks_in_state = self.tick_count - self.state_entry_tick;

        let Some(state) = StateId::from_raw(self.current) else {
            let raw = self.current;
            warn!("FSM: unrecognised state byte {}, resetting to Sampling", raw);
            self.enter(StateId::Sampling, ctx);
            return Step::Reset { raw };
        };

        match states::update(state, ctx, hw) {
            Some(next) => {
                self.transition(state, next, ctx);
                Step::Moved { from: state, to: next }
            }
            None => Step::Stayed(state),
        }
    }

    /// Overwrite the state byte, e.g. when resuming from retained memory.
    /// Not validated here; [`tick`](Self::tick) handles invalid values.
    pub fn restore(&mut self, raw: u8) {
        self.current = raw;
        self.state_entry_tick = self.tick_count;
    }

    /// The current state, or `None` if an invalid byte was restored and
    /// no tick has run since.
    pub fn current_state(&self) -> Option<StateId> {
        StateId::from_raw(self.current)
    }

    pub fn ticks_in_current_state(&self) -> u64 {
        self.tick_count - self.state_entry_tick
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, from: StateId, to: StateId, ctx: &mut FsmContext) {
        debug!("FSM transition: {} -> {}", from.name(), to.name());
        if from == StateId::Idling && to == StateId::Sampling {
            self.cycles += 1;
        }
        self.enter(to, ctx);
    }

    fn enter(&mut self, state: StateId, ctx: &mut FsmContext) {
        self.current = state as u8;
        self.state_entry_tick = self.tick_count;
        ctx.ticks_in_state = 0;
    }
}
