//! Lamp settings record shared between the state machine and the
//! brightness engine.
//!
//! One [`LampSettings`] value exists for the lifetime of the firmware. It is
//! owned by the control loop and only the state handlers in
//! [`crate::fsm::states`] mutate it.

use crate::fsm::LampState;

/// Active output channel(s). Discriminants are the channel bitmask codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Channel {
    #[default]
    None = 0x00,
    Both = 0x01,
    Cool = 0x02,
    Warm = 0x04,
}

/// Last action recognised from the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonAction {
    #[default]
    None,
    ToggleBoth,
    CoolOnly,
    WarmOnly,
    /// Increase or decrease; both re-apply the active channel(s).
    Adjust,
}

impl From<Channel> for ButtonAction {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::None => Self::None,
            Channel::Both => Self::ToggleBoth,
            Channel::Cool => Self::CoolOnly,
            Channel::Warm => Self::WarmOnly,
        }
    }
}

/// Power, channel and level of the lamp plus the current FSM state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampSettings {
    pub state: LampState,
    pub button: ButtonAction,
    pub power_on: bool,
    pub channel: Channel,
    /// Brightness level, looked up independently per physical channel.
    pub level: u8,
}

impl Default for LampSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LampSettings {
    /// Power-on state: idle, lamp off, no channel, level 0.
    pub const fn new() -> Self {
        Self {
            state: LampState::Idle,
            button: ButtonAction::None,
            power_on: false,
            channel: Channel::None,
            level: 0,
        }
    }

    /// Set `channel` and mirror it into `button`.
    pub fn select(&mut self, channel: Channel) {
        self.channel = channel;
        self.button = channel.into();
    }

    /// One level brighter, saturating at 255.
    pub fn increase(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    /// One level dimmer, never below 1.
    pub fn decrease(&mut self) {
        if self.level > 1 {
            self.level -= 1;
        }
    }

    /// Whether any channel is selected (increase/decrease are ignored
    /// otherwise).
    pub fn has_channel(&self) -> bool {
        self.channel != Channel::None
    }
}
