//! Lamp controller — the hexagonal core.
//!
//! [`LampController`] owns the FSM and its shared context. It exposes a
//! hardware-agnostic API. All I/O flows through port traits injected at call
//! sites, making the whole control loop testable with mock adapters.
//!
//! ```text
//!  ButtonPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     LampController     │
//!  Indicator  ◀── │  FSM · action · lookup │
//!  PwmOutput  ◀── └────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::info;

use crate::brightness::{self, ChannelLevels};
use crate::config::LampConfig;
use crate::fsm::context::FsmContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, LampState};
use crate::settings::LampSettings;

use super::events::AppEvent;
use super::ports::{ButtonPort, EventSink, Indicator, PwmOutput};

// ───────────────────────────────────────────────────────────────
// LampController
// ───────────────────────────────────────────────────────────────

/// The controller orchestrates one button-driven lamp.
pub struct LampController {
    fsm: Fsm,
    ctx: FsmContext,
    tick_count: u64,
    /// Indicator level last written to the port.
    indicator_on: bool,
}

impl LampController {
    /// Construct the controller from configuration.
    ///
    /// Does **not** touch hardware. Call [`start`](Self::start) next.
    pub fn new(config: LampConfig) -> Self {
        let ctx = FsmContext::new(config);
        let fsm = Fsm::new(build_state_table(), LampState::Idle);
        Self {
            fsm,
            ctx,
            tick_count: 0,
            indicator_on: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in `Idle` and drive the outputs to a known dark state.
    pub fn start(
        &mut self,
        hw: &mut (impl Indicator + PwmOutput),
        sink: &mut impl EventSink,
    ) {
        self.fsm.start(&mut self.ctx);
        self.ctx.commands.indicator = false;
        self.indicator_on = false;
        hw.set_indicator(false);
        let duty = brightness::brightness_set(hw, ChannelLevels::OFF);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        sink.emit(&AppEvent::BrightnessApplied {
            levels: ChannelLevels::OFF,
            duty,
        });
        info!("LampController started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle: read buttons → FSM → outputs → events.
    ///
    /// The `hw` parameter satisfies all three hardware ports. This avoids
    /// juggling several mutable borrows while keeping the port boundary
    /// explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl ButtonPort + Indicator + PwmOutput),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();
        let prev_settings = self.ctx.settings;

        // 1. Snapshot the button port once per tick
        self.ctx.buttons = hw.read();

        // 2. FSM tick (pure state logic)
        self.fsm.tick(&mut self.ctx);

        // 3. Apply output commands
        if let Some(levels) = self.ctx.commands.levels.take() {
            let duty = brightness::brightness_set(hw, levels);
            sink.emit(&AppEvent::BrightnessApplied { levels, duty });
        }
        if self.ctx.commands.indicator != self.indicator_on {
            self.indicator_on = self.ctx.commands.indicator;
            hw.set_indicator(self.indicator_on);
        }

        // 4. Emit events for whatever moved
        let new_state = self.fsm.current_state();
        if new_state != prev_state {
            sink.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: new_state,
            });
        }
        if lamp_changed(&prev_settings, &self.ctx.settings) {
            sink.emit(&AppEvent::SettingsChanged(self.ctx.settings));
        }
    }

    /// Run `ticks` cycles, sleeping `loop_interval_ms` after each.
    pub fn run_for(
        &mut self,
        ticks: u64,
        hw: &mut (impl ButtonPort + Indicator + PwmOutput),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) {
        for _ in 0..ticks {
            self.tick(hw, sink);
            delay.delay_ms(self.ctx.config.loop_interval_ms);
        }
    }

    /// The firmware main loop. Never returns.
    pub fn run(
        &mut self,
        hw: &mut (impl ButtonPort + Indicator + PwmOutput),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) -> ! {
        info!(
            "Entering control loop ({} ms per tick)",
            self.ctx.config.loop_interval_ms
        );
        loop {
            self.tick(hw, sink);
            delay.delay_ms(self.ctx.config.loop_interval_ms);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current FSM state.
    pub fn state(&self) -> LampState {
        self.fsm.current_state()
    }

    /// Snapshot of the lamp settings.
    pub fn settings(&self) -> LampSettings {
        self.ctx.settings
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Whether the busy indicator is currently lit.
    pub fn indicator_on(&self) -> bool {
        self.indicator_on
    }
}

/// Power, channel, level or last action differ. The `state` field is
/// reported separately through `StateChanged`.
fn lamp_changed(a: &LampSettings, b: &LampSettings) -> bool {
    a.power_on != b.power_on || a.channel != b.channel || a.level != b.level || a.button != b.button
}
