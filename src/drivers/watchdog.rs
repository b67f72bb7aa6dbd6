//! Task Watchdog Timer (TWDT) guard for the polling loop.
//!
//! The polling loop never blocks, so a stall means something below it
//! (the ADC driver, the LCD bus) has hung.  Subscribing the main task to
//! the TWDT turns that into a reset instead of a frozen reading.
//!
//! On host builds the guard only counts feeds so tests can check the loop
//! keeps kicking it.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

pub struct Watchdog {
    timeout_ms: u32,
    #[cfg(target_os = "espidf")]
    subscribed: bool,
    #[cfg(not(target_os = "espidf"))]
    feeds: core::cell::Cell<u64>,
}

impl Watchdog {
    /// Subscribe the calling task with the given timeout.
    pub fn new(timeout_ms: u32) -> Self {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: TWDT calls on the current task from the main thread.
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK {
                    log::warn!("TWDT reconfigure returned {} (may already be configured)", ret);
                }

                let subscribed = esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK;
                if subscribed {
                    info!("Watchdog: subscribed ({}ms timeout)", timeout_ms);
                } else {
                    log::warn!("Watchdog: failed to subscribe main task");
                }
                Self { timeout_ms, subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            info!("Watchdog(sim): {}ms timeout, no-op", timeout_ms);
            Self {
                timeout_ms,
                feeds: core::cell::Cell::new(0),
            }
        }
    }

    /// Kick the watchdog.  Must be called more often than `timeout_ms`.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: resets the current task's TWDT entry only.
            unsafe {
                esp_task_wdt_reset();
            }
        }

        #[cfg(not(target_os = "espidf"))]
        self.feeds.set(self.feeds.get() + 1);
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Number of feeds since construction (host only).
    #[cfg(not(target_os = "espidf"))]
    pub fn feeds(&self) -> u64 {
        self.feeds.get()
    }
}
