//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured lamp events through the
//! `log` facade (the ESP-IDF logger on target, UART / USB-CDC in
//! production).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                debug!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::SettingsChanged(s) => {
                info!(
                    "LAMP  | power={} channel={:?} level={} action={:?}",
                    if s.power_on { "on" } else { "off" },
                    s.channel,
                    s.level,
                    s.button,
                );
            }
            AppEvent::BrightnessApplied { levels, duty } => {
                debug!(
                    "PWM   | warm={}→{} cool={}→{}",
                    levels.warm, duty.warm, levels.cool, duty.cool
                );
            }
        }
    }
}
