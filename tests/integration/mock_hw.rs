//! Mock hardware adapter for integration tests.
//!
//! Records every port call so tests can assert on the full history without
//! touching the ADC or the panel.

use std::cell::Cell;
use std::collections::VecDeque;

use lightmeter::app::events::AppEvent;
use lightmeter::app::ports::{DisplayPort, EventSink, SensorPort, TimePort};

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    Read(u16),
    Frame,
    Show(u8),
}

// ── MockHardware ──────────────────────────────────────────────

/// Scripted sensor plus recording display.  Reads pop from `script`; once
/// it runs dry the last value repeats.
pub struct MockHardware {
    script: VecDeque<u16>,
    last: u16,
    pub calls: Vec<PortCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(script: impl IntoIterator<Item = u16>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: 0,
            calls: Vec::new(),
        }
    }

    pub fn constant(raw: u16) -> Self {
        Self::new([raw])
    }

    pub fn shown(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PortCall::Show(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn reads(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, PortCall::Read(_))).count()
    }

    pub fn frames(&self) -> usize {
        self.calls.iter().filter(|c| **c == PortCall::Frame).count()
    }
}

impl SensorPort for MockHardware {
    fn read_raw(&mut self) -> u16 {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.calls.push(PortCall::Read(self.last));
        self.last
    }
}

impl DisplayPort for MockHardware {
    fn draw_frame(&mut self) {
        self.calls.push(PortCall::Frame);
    }

    fn show_value(&mut self, value: u8) {
        self.calls.push(PortCall::Show(value));
    }
}

// ── ManualClock ───────────────────────────────────────────────

/// Clock the test advances by hand.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

#[allow(dead_code)]
impl ManualClock {
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }
}

impl TimePort for ManualClock {
    fn uptime_ms(&self) -> u64 {
        self.now.get()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn values(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ValueChanged(r) => Some(r.scaled),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
