//! Busy indicator LED.
//!
//! One push-pull output, lit while a press is being handled.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: an `esp-idf-hal` output `PinDriver`.
//! On host/test: any [`embedded_hal::digital::OutputPin`] fake.

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

use crate::app::ports::Indicator;
use crate::error::{Error, GpioError};

pub struct IndicatorLed<P> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> IndicatorLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, lit: false }
    }

    pub fn try_set(&mut self, on: bool) -> Result<(), Error> {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|e| {
            warn!("indicator write failed: {:?}", e.kind());
            GpioError::IndicatorWrite
        })?;
        self.lit = on;
        Ok(())
    }

    /// Last level successfully written.
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

impl<P: OutputPin> Indicator for IndicatorLed<P> {
    fn set_indicator(&mut self, on: bool) {
        // A failed write leaves the LED as it was; the next change retries.
        let _ = self.try_set(on);
    }
}
