//! Serial probe binary.
//!
//! Prints the raw KY-018 reading on the console UART every 100 ms.
//! Higher values mean a brighter environment.  No display, no state
//! machine: a blocking read/print/wait loop for bench checks.

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use log::info;

use lightmeter::config::SystemConfig;
use lightmeter::drivers::hw_init;
use lightmeter::pins;
use lightmeter::probe::SerialProbe;
use lightmeter::sensors::Photoresistor;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    let config = SystemConfig::default();
    hw_init::init_peripherals().map_err(lightmeter::error::Error::from)?;
    info!(
        "serial-probe: ADC1 CH{} every {}ms at {} baud",
        pins::LIGHT_ADC_CHANNEL,
        config.probe_interval_ms,
        config.console_baud
    );

    let mut probe = SerialProbe::new(
        Photoresistor::new(pins::LIGHT_ADC_CHANNEL),
        std::io::stdout(),
        FreeRtos,
        config.probe_interval_ms,
    );
    probe.run()
}
