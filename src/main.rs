//! Lightmeter Firmware — Main Entry Point
//!
//! Samples the KY-018 photoresistor and shows the reading on the
//! T-Display-S3 panel through a non-blocking three-state polling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter        LogEventSink     Esp32Time       │
//! │  (Sensor + Display)     (EventSink)      (TimePort)      │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ──────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │   AppService: Sampling → Rendering → Idling        │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::peripherals::Peripherals;
use log::{info, warn};

use lightmeter::adapters::hardware::HardwareAdapter;
use lightmeter::adapters::log_sink::LogEventSink;
use lightmeter::adapters::time::Esp32TimeAdapter;
use lightmeter::app::service::AppService;
use lightmeter::config::SystemConfig;
use lightmeter::display::Presenter;
use lightmeter::drivers::{hw_init, lcd, watchdog::Watchdog};
use lightmeter::pins;
use lightmeter::sensors::Photoresistor;

/// TWDT timeout for the polling task.
const WATCHDOG_TIMEOUT_MS: u32 = 5_000;

/// Validate `candidate`, falling back to the defaults if it is rejected.
fn load_config(candidate: SystemConfig) -> SystemConfig {
    match candidate.validate() {
        Ok(()) => candidate,
        Err(e) => {
            warn!("{}, using defaults", e);
            SystemConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Lightmeter v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config(SystemConfig::default());

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(lightmeter::error::Error::from)?;

    let p = Peripherals::take()?;
    let panel = lcd::init_display(lcd::LcdPins {
        d0: p.pins.gpio39,
        d1: p.pins.gpio40,
        d2: p.pins.gpio41,
        d3: p.pins.gpio42,
        d4: p.pins.gpio45,
        d5: p.pins.gpio46,
        d6: p.pins.gpio47,
        d7: p.pins.gpio48,
        wr: p.pins.gpio8,
        dc: p.pins.gpio7,
        rst: p.pins.gpio5,
    })
    .map_err(lightmeter::error::Error::from)?;

    // ── 4. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new(
        Photoresistor::new(pins::LIGHT_ADC_CHANNEL),
        Presenter::new(panel, &config),
    );
    let clock = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();
    let watchdog = Watchdog::new(WATCHDOG_TIMEOUT_MS);

    // ── 5. App service: static frame once, then poll ──────────
    let mut app = AppService::new(config);
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering polling loop.");

    loop {
        app.tick(&mut hw, &clock, &mut log_sink);
        watchdog.feed();
        // Give the RTOS idle task its slice; the FSM itself never waits.
        FreeRtos::delay_ms(1);
    }
}
