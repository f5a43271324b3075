//! Hardware adapter — bridges the lamp peripherals to domain port traits.
//!
//! Owns the button port, busy indicator and PWM output, exposing them as
//! one value that satisfies [`ButtonPort`], [`Indicator`] and
//! [`PwmOutput`] at once, which is what
//! [`LampController::tick`](crate::app::service::LampController::tick)
//! takes.

use crate::app::ports::{ButtonPort, Indicator, PwmOutput};
use crate::fsm::context::ButtonMask;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<B, I, P> {
    buttons: B,
    indicator: I,
    pwm: P,
}

impl<B, I, P> HardwareAdapter<B, I, P> {
    pub fn new(buttons: B, indicator: I, pwm: P) -> Self {
        Self {
            buttons,
            indicator,
            pwm,
        }
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<B: ButtonPort, I, P> ButtonPort for HardwareAdapter<B, I, P> {
    fn read(&mut self) -> ButtonMask {
        self.buttons.read()
    }
}

// ── Indicator implementation ──────────────────────────────────

impl<B, I: Indicator, P> Indicator for HardwareAdapter<B, I, P> {
    fn set_indicator(&mut self, on: bool) {
        self.indicator.set_indicator(on);
    }
}

// ── PwmOutput implementation ──────────────────────────────────

impl<B, I, P: PwmOutput> PwmOutput for HardwareAdapter<B, I, P> {
    fn write(&mut self, warm: u16, cool: u16) {
        self.pwm.write(warm, cool);
    }
}
