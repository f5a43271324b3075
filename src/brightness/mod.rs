//! Brightness engine: level lookup and the paired PWM write.
//!
//! A level (0..=255) is looked up independently in each channel's table to
//! obtain a 12-bit duty target. Both targets are then handed to a
//! [`PwmOutput`] in a single call so the two channels change together.

pub mod tables;

use crate::app::ports::PwmOutput;

pub use tables::{COOL_TABLE, WARM_TABLE};

/// Largest duty value either table produces.
pub const MAX_DUTY: u16 = 4095;

/// Per-channel brightness levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelLevels {
    pub warm: u8,
    pub cool: u8,
}

impl ChannelLevels {
    /// Both channels dark.
    pub const OFF: Self = Self { warm: 0, cool: 0 };

    pub const fn both(level: u8) -> Self {
        Self {
            warm: level,
            cool: level,
        }
    }

    pub const fn warm_only(level: u8) -> Self {
        Self {
            warm: level,
            cool: 0,
        }
    }

    pub const fn cool_only(level: u8) -> Self {
        Self {
            warm: 0,
            cool: level,
        }
    }
}

/// Duty targets written to the PWM compare registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PwmTargets {
    pub warm: u16,
    pub cool: u16,
}

/// Map levels to duty targets. Every `u8` indexes both tables, so this
/// cannot go out of bounds.
pub fn lookup(levels: ChannelLevels) -> PwmTargets {
    PwmTargets {
        warm: WARM_TABLE[usize::from(levels.warm)],
        cool: COOL_TABLE[usize::from(levels.cool)],
    }
}

/// Look up `levels` and write both targets to `out` in one paired update.
pub fn brightness_set(out: &mut impl PwmOutput, levels: ChannelLevels) -> PwmTargets {
    let targets = lookup(levels);
    out.write(targets.warm, targets.cool);
    targets
}
