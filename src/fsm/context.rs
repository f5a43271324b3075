//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to: the button snapshot taken at the start of the tick, the lamp
//! settings, the debounce and typematic counters, and the output commands
//! the controller applies after the tick.

use crate::brightness::ChannelLevels;
use crate::config::LampConfig;
use crate::settings::LampSettings;

// ---------------------------------------------------------------------------
// Button snapshot (read-only to state handlers; written by the controller)
// ---------------------------------------------------------------------------

/// The five physical buttons, by port bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    /// Both channels on/off.
    Toggle = 0,
    /// Cool channel only.
    Cool = 1,
    /// Warm channel only.
    Warm = 2,
    /// Brighter (hold to repeat).
    Increase = 3,
    /// Dimmer (hold to repeat).
    Decrease = 4,
}

impl Button {
    /// All buttons in evaluation priority order.
    pub const ALL: [Button; 5] = [
        Button::Toggle,
        Button::Cool,
        Button::Warm,
        Button::Increase,
        Button::Decrease,
    ];

    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Pressed-state of all five buttons: bit `i` set means button `i` is held
/// down. Already converted from the active-low port levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const NONE: Self = Self(0);
    /// Bits belonging to the five buttons.
    pub const PORT_MASK: u8 = 0b1_1111;

    /// Build a mask from raw bits; bits above the fifth button are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::PORT_MASK)
    }

    pub const fn only(button: Button) -> Self {
        Self(button.bit())
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    pub const fn is_pressed(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// At least one button is down.
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Pressed buttons in priority order.
    pub fn pressed(self) -> heapless::Vec<Button, 5> {
        Button::ALL
            .into_iter()
            .filter(|b| self.is_pressed(*b))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Output commands (written by state handlers; consumed by the controller)
// ---------------------------------------------------------------------------

/// Requests that state handlers leave for the controller to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputCommands {
    /// Desired level of the busy indicator.
    pub indicator: bool,
    /// Brightness to push through the engine, if an action fired this tick.
    pub levels: Option<ChannelLevels>,
}

/// Typematic counters for the `ButtonHeld` state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypematicCounters {
    /// Ticks since the hold began.
    pub delay: u16,
    /// Ticks since the last repeat.
    pub rate: u16,
}

impl TypematicCounters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Input --
    /// Buttons pressed at the start of this tick.
    pub buttons: ButtonMask,

    // -- Lamp --
    pub settings: LampSettings,

    // -- Per-state counters --
    /// Ticks spent in `Debouncing` since it was last entered.
    pub debounce_count: u16,
    pub typematic: TypematicCounters,

    // -- Outputs --
    pub commands: OutputCommands,

    // -- Configuration --
    pub config: LampConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: LampConfig) -> Self {
        Self {
            buttons: ButtonMask::NONE,
            settings: LampSettings::new(),
            debounce_count: 0,
            typematic: TypematicCounters::default(),
            commands: OutputCommands::default(),
            config,
        }
    }
}
