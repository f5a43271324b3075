//! Port traits — the hexagonal boundary between the lamp logic and the
//! hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LampController (domain)
//! ```
//!
//! Driven adapters (button port, indicator, PWM, event sinks) implement these
//! traits. The [`LampController`](super::service::LampController) consumes
//! them via generics, so the domain core never touches registers directly.
//!
//! Ports are infallible: adapters log and absorb hardware errors so the
//! control loop keeps running.

use crate::fsm::context::ButtonMask;

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one port-wide read of all five buttons.
pub trait ButtonPort {
    /// Current pressed-mask. Bit `i` is set while button `i` is held down.
    fn read(&mut self) -> ButtonMask;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The "busy" LED lit while a press is being handled.
pub trait Indicator {
    fn set_indicator(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// PWM port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Two-channel PWM output.
///
/// Implementations must make both duty targets take effect in the same PWM
/// period.
pub trait PwmOutput {
    fn write(&mut self, warm: u16, cool: u16);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &super::events::AppEvent) {}
}
