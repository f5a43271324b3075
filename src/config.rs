//! Lamp timing parameters
//!
//! All tunable parameters for the button state machine and control loop.
//! Everything is counted in control-loop ticks; with the default 1 ms loop
//! interval a tick is one millisecond. The brightness lookup tables are not
//! configuration and live in [`crate::brightness`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Consecutive ticks a press must survive in `Debouncing` (strictly more).
pub const DEBOUNCE_TICKS: u16 = 10;
/// Typematic initial delay: ticks of hold before the first repeat.
pub const TYPEMATIC_DELAY_TICKS: u16 = 350;
/// Typematic repeat period in ticks.
pub const TYPEMATIC_RATE_TICKS: u16 = 15;
/// Level applied when the lamp is switched on from off.
pub const DEFAULT_LEVEL: u8 = 180;
/// Sleep between two FSM evaluations.
pub const LOOP_INTERVAL_MS: u32 = 1;

/// Core lamp configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LampConfig {
    // --- Buttons ---
    /// A press is committed once the debounce counter exceeds this value
    pub debounce_ticks: u16,
    /// Hold time before increase/decrease starts auto-repeating
    pub typematic_delay_ticks: u16,
    /// Period between two auto-repeats once the delay has elapsed
    pub typematic_rate_ticks: u16,

    // --- Brightness ---
    /// Level used by the toggle button when switching on (1-255)
    pub default_level: u8,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub loop_interval_ms: u32,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            debounce_ticks: DEBOUNCE_TICKS,
            typematic_delay_ticks: TYPEMATIC_DELAY_TICKS,
            typematic_rate_ticks: TYPEMATIC_RATE_TICKS,
            default_level: DEFAULT_LEVEL,
            loop_interval_ms: LOOP_INTERVAL_MS,
        }
    }
}

impl LampConfig {
    /// Reject parameter combinations the state machine cannot honour.
    pub fn validate(&self) -> Result<()> {
        // The debounce counter saturates, so it can never exceed u16::MAX.
        if self.debounce_ticks == u16::MAX {
            return Err(Error::Config("debounce_ticks must be below u16::MAX"));
        }
        if self.default_level == 0 {
            return Err(Error::Config("default_level must be at least 1"));
        }
        if self.typematic_rate_ticks == 0 {
            return Err(Error::Config("typematic_rate_ticks must be non-zero"));
        }
        if self.typematic_rate_ticks > self.typematic_delay_ticks {
            return Err(Error::Config(
                "typematic_rate_ticks must not exceed typematic_delay_ticks",
            ));
        }
        if self.loop_interval_ms == 0 {
            return Err(Error::Config("loop_interval_ms must be non-zero"));
        }
        Ok(())
    }
}
