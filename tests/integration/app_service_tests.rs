//! Integration tests for the AppService → FSM → ports pipeline.
//!
//! Drives the service with a scripted sensor and a manual clock, first
//! against the recording mock, then through `HardwareAdapter` rendering into
//! the in-memory framebuffer.

use embedded_graphics::prelude::*;

use lightmeter::adapters::hardware::HardwareAdapter;
use lightmeter::app::events::AppEvent;
use lightmeter::app::service::AppService;
use lightmeter::config::SystemConfig;
use lightmeter::display::Presenter;
use lightmeter::fsm::{StateId, Step};
use lightmeter::pins;
use lightmeter::sensors::Photoresistor;
use lightmeter::sensors::photoresistor::sim_set_light_adc;

use super::framebuffer::Framebuffer;
use super::mock_hw::{ManualClock, MockHardware, PortCall, RecordingSink};

fn started(hw: &mut MockHardware) -> (AppService, ManualClock, RecordingSink) {
    let mut app = AppService::new(SystemConfig::default());
    let mut sink = RecordingSink::default();
    app.start(hw, &mut sink);
    (app, ManualClock::default(), sink)
}

#[test]
fn boot_draws_frame_then_first_cycle_renders() {
    let mut hw = MockHardware::constant(2048);
    let (mut app, clock, mut sink) = started(&mut hw);

    assert_eq!(hw.calls, vec![PortCall::Frame]);
    assert_eq!(sink.events, vec![AppEvent::Started(StateId::Sampling)]);

    app.tick(&mut hw, &clock, &mut sink);
    app.tick(&mut hw, &clock, &mut sink);

    assert_eq!(
        hw.calls,
        vec![PortCall::Frame, PortCall::Read(2048), PortCall::Show(49)]
    );
    assert_eq!(app.state(), Some(StateId::Idling));
    assert_eq!(sink.values(), vec![49]);
}

#[test]
fn idles_for_full_interval_between_samples() {
    let mut hw = MockHardware::constant(0);
    let (mut app, clock, mut sink) = started(&mut hw);

    clock.set(1_000);
    app.tick(&mut hw, &clock, &mut sink); // Sampling
    app.tick(&mut hw, &clock, &mut sink); // Rendering @ 1000

    for t in [1_000, 1_001, 1_050, 1_099] {
        clock.set(t);
        assert_eq!(app.tick(&mut hw, &clock, &mut sink), Step::Stayed(StateId::Idling));
    }
    clock.set(1_100);
    assert_eq!(
        app.tick(&mut hw, &clock, &mut sink),
        Step::Moved { from: StateId::Idling, to: StateId::Sampling }
    );
    assert_eq!(hw.reads(), 1, "no sample while idling");
    assert_eq!(app.cycles(), 1);
}

#[test]
fn late_tick_exits_idle_immediately() {
    let mut hw = MockHardware::constant(0);
    let (mut app, clock, mut sink) = started(&mut hw);

    app.tick(&mut hw, &clock, &mut sink);
    app.tick(&mut hw, &clock, &mut sink);
    clock.advance(5_000);
    assert!(matches!(
        app.tick(&mut hw, &clock, &mut sink),
        Step::Moved { from: StateId::Idling, .. }
    ));
}

#[test]
fn value_events_follow_changes_only() {
    let mut hw = MockHardware::new([0, 0, 4095, 4095, 2048]);
    let (mut app, clock, mut sink) = started(&mut hw);

    // Five full cycles: 3 ticks each, 100 ms apart.
    for _ in 0..5 {
        app.tick(&mut hw, &clock, &mut sink);
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(100);
        app.tick(&mut hw, &clock, &mut sink);
    }

    assert_eq!(hw.shown(), vec![0, 0, 99, 99, 49]);
    assert_eq!(sink.values(), vec![0, 99, 49]);
    assert_eq!(hw.frames(), 1);
}

#[test]
fn invalid_restored_state_recovers() {
    let mut hw = MockHardware::constant(4095);
    let (mut app, clock, mut sink) = started(&mut hw);

    app.restore_state(0xFF);
    assert_eq!(app.tick(&mut hw, &clock, &mut sink), Step::Reset { raw: 0xFF });
    assert_eq!(app.state(), Some(StateId::Sampling));
    assert_eq!(hw.reads(), 0, "reset tick does no sampling");

    app.tick(&mut hw, &clock, &mut sink);
    app.tick(&mut hw, &clock, &mut sink);
    assert_eq!(hw.shown(), vec![99]);
    assert!(sink.events.contains(&AppEvent::StateReset { raw: 0xFF }));
}

// ── End to end through the hardware adapter ─────────────────

/// The only test in this binary that touches the simulated ADC.
#[test]
fn hardware_adapter_pipeline_repaints_only_value_field() {
    let config = SystemConfig::default();
    let mut hw = HardwareAdapter::new(
        Photoresistor::new(pins::LIGHT_ADC_CHANNEL),
        Presenter::new(Framebuffer::new(), &config),
    );
    let mut app = AppService::new(config);
    let clock = ManualClock::default();
    let mut sink = RecordingSink::default();

    app.start(&mut hw, &mut sink);
    let frame = hw.presenter().target().clone();
    let area = hw.presenter().erase_area();

    for raw in [4095, 41, 42, 2048] {
        sim_set_light_adc(raw);
        app.tick(&mut hw, &clock, &mut sink);
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(100);
        app.tick(&mut hw, &clock, &mut sink);
    }

    assert_eq!(app.tick_count(), 12);
    assert_eq!(app.cycles(), 4);
    assert_eq!(hw.presenter().shown(), Some(49));
    assert_eq!(sink.values(), vec![99, 0, 1, 49]);
    assert!(hw.presenter().target().diff(&frame).iter().all(|p| area.contains(*p)));
}
