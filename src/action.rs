//! Action dispatcher: turns the lamp settings into per-channel brightness
//! levels for the brightness engine.
//!
//! | `button`     | condition   | (warm, cool)        | indicator |
//! |--------------|-------------|---------------------|-----------|
//! | `ToggleBoth` | power on    | (level, level)      | -         |
//! | `None`       | power off   | (level, level) = 0  | off       |
//! | `CoolOnly`   | -           | (0, level)          | -         |
//! | `WarmOnly`   | -           | (level, 0)          | -         |
//! | `Adjust`     | per channel | active channel(s)   | -         |
//!
//! Any other combination leaves the output untouched.

use crate::brightness::ChannelLevels;
use crate::fsm::context::OutputCommands;
use crate::settings::{ButtonAction, Channel, LampSettings};

/// Levels implied by `settings`, or `None` if the combination drives
/// nothing.
pub fn levels_for(settings: &LampSettings) -> Option<ChannelLevels> {
    let level = settings.level;
    match (settings.button, settings.power_on) {
        (ButtonAction::ToggleBoth, true) | (ButtonAction::None, false) => {
            Some(ChannelLevels::both(level))
        }
        (ButtonAction::CoolOnly, _) => Some(ChannelLevels::cool_only(level)),
        (ButtonAction::WarmOnly, _) => Some(ChannelLevels::warm_only(level)),
        (ButtonAction::Adjust, _) => match settings.channel {
            Channel::Both => Some(ChannelLevels::both(level)),
            Channel::Cool => Some(ChannelLevels::cool_only(level)),
            Channel::Warm => Some(ChannelLevels::warm_only(level)),
            Channel::None => None,
        },
        _ => None,
    }
}

/// Queue the brightness implied by `settings` on `commands`. Switching the
/// lamp off also drops the busy indicator.
pub fn action(settings: &LampSettings, commands: &mut OutputCommands) {
    if settings.button == ButtonAction::None && !settings.power_on {
        commands.indicator = false;
    }
    if let Some(levels) = levels_for(settings) {
        commands.levels = Some(levels);
    }
}
