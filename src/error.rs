//! Unified error types for the lamp firmware.
//!
//! The button state machine and the brightness engine cannot fail: every
//! input is a digital level and every output is a bounded register write.
//! Errors only appear at the hardware edge (HAL pin and PWM drivers) and in
//! configuration validation. Adapters log and degrade rather than propagate
//! into the control loop.
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A button or indicator pin could not be accessed.
    Gpio(GpioError),
    /// A PWM duty write was refused by the driver.
    Pwm,
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Pwm => write!(f, "pwm: duty write failed"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Reading button `n` failed.
    ButtonRead(u8),
    /// Driving the busy indicator failed.
    IndicatorWrite,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ButtonRead(n) => write!(f, "button {n} read failed"),
            Self::IndicatorWrite => write!(f, "indicator write failed"),
        }
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
