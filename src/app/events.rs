//! Outbound application events.
//!
//! The [`LampController`](super::service::LampController) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them.

use crate::brightness::{ChannelLevels, PwmTargets};
use crate::fsm::LampState;
use crate::settings::LampSettings;

/// Structured events emitted by the lamp core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has started (carries initial state).
    Started(LampState),

    /// The FSM transitioned between states.
    StateChanged { from: LampState, to: LampState },

    /// Power, channel or level changed during this tick.
    SettingsChanged(LampSettings),

    /// A brightness update was written to the PWM output.
    BrightnessApplied {
        levels: ChannelLevels,
        duty: PwmTargets,
    },
}
