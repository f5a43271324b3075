//! Loop delay adapter.
//!
//! Implements [`DelayNs`] for the host build and tracks how long the loop
//! has slept.
//!
//! - **`HostDelay::new()`** — blocks with `std::thread::sleep`.
//! - **`HostDelay::simulated()`** — only advances the counter, so tests can
//!   run thousands of ticks instantly.
//!
//! On ESP-IDF the binary uses `esp_idf_hal::delay::FreeRtos` instead.

use std::time::Duration;

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default)]
pub struct HostDelay {
    simulated: bool,
    slept_ns: u64,
}

impl HostDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulated() -> Self {
        Self {
            simulated: true,
            slept_ns: 0,
        }
    }

    /// Total requested sleep in nanoseconds.
    pub fn slept_ns(&self) -> u64 {
        self.slept_ns
    }

    /// Total requested sleep in whole milliseconds.
    pub fn slept_ms(&self) -> u64 {
        self.slept_ns / 1_000_000
    }
}

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.slept_ns = self.slept_ns.saturating_add(u64::from(ns));
        if !self.simulated {
            std::thread::sleep(Duration::from_nanos(u64::from(ns)));
        }
    }
}
