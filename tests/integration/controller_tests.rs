//! Integration tests for the LampController → FSM → outputs pipeline.
//!
//! These run on the host and drive the controller tick by tick through the
//! mock button port, checking settings, PWM writes and the busy indicator.

use duolamp::adapters::time::HostDelay;
use duolamp::app::events::AppEvent;
use duolamp::brightness::{ChannelLevels, PwmTargets};
use duolamp::config::LampConfig;
use duolamp::fsm::LampState;
use duolamp::fsm::context::{Button, ButtonMask};
use duolamp::settings::{ButtonAction, Channel};

use super::mock_hw::{Bench, HwCall};

/// Ticks of a continuous hold before `ButtonHeld` starts counting:
/// 1 in `Idle`, 11 in `Debouncing`, 1 in `ButtonPressed`.
const TICKS_TO_HELD: u64 = 13;

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_leaves_lamp_dark_and_idle() {
    let bench = Bench::new();
    assert_eq!(bench.lamp.state(), LampState::Idle);
    assert_eq!(
        bench.hw.calls,
        vec![HwCall::Indicator(false), HwCall::Pwm { warm: 200, cool: 200 }]
    );
    assert_eq!(bench.sink.events[0], AppEvent::Started(LampState::Idle));
}

// ── Toggle sequence ───────────────────────────────────────────

#[test]
fn toggle_turns_on_then_off() {
    let mut bench = Bench::new();

    bench.click(Button::Toggle);
    let s = bench.lamp.settings();
    assert!(s.power_on);
    assert_eq!(s.level, 180);
    assert_eq!(s.channel, Channel::Both);
    assert_eq!(bench.hw.last_pwm(), Some((1298, 614)));

    bench.click(Button::Toggle);
    let s = bench.lamp.settings();
    assert!(!s.power_on);
    assert_eq!(s.level, 0);
    assert_eq!(s.channel, Channel::None);
    assert_eq!(bench.hw.last_pwm(), Some((200, 200)));
    assert!(!bench.hw.indicator_on());
}

#[test]
fn single_channel_then_toggle_keeps_level() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);

    bench.click(Button::Cool);
    let s = bench.lamp.settings();
    assert_eq!(s.channel, Channel::Cool);
    assert_eq!(s.button, ButtonAction::CoolOnly);
    assert_eq!(bench.hw.last_pwm(), Some((200, 614)));

    bench.click(Button::Toggle);
    let s = bench.lamp.settings();
    assert!(s.power_on);
    assert_eq!(s.channel, Channel::Both);
    assert_eq!(s.level, 180);
    assert_eq!(bench.hw.last_pwm(), Some((1298, 614)));
}

#[test]
fn warm_only_blanks_cool_channel() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    bench.click(Button::Warm);
    assert_eq!(bench.hw.last_pwm(), Some((1298, 200)));
}

// ── Debounce ──────────────────────────────────────────────────

#[test]
fn short_press_is_ignored() {
    let mut bench = Bench::new();
    let before = bench.hw.calls.len();

    // 1 tick in Idle plus 10 in Debouncing: not enough.
    bench.hold(ButtonMask::only(Button::Toggle), 11);
    assert_eq!(bench.lamp.state(), LampState::Debouncing);
    bench.release(1);

    assert_eq!(bench.lamp.state(), LampState::Idle);
    assert_eq!(bench.hw.calls.len(), before, "bounce must not reach outputs");
    assert!(!bench.lamp.settings().power_on);
}

#[test]
fn indicator_lights_on_debounce_commit() {
    let mut bench = Bench::new();
    bench.hold(ButtonMask::only(Button::Toggle), 12);
    assert_eq!(bench.lamp.state(), LampState::ButtonPressed);
    assert!(bench.hw.indicator_on());
    assert!(!bench.lamp.settings().power_on, "action runs on the next tick");

    bench.hold(ButtonMask::only(Button::Toggle), 1);
    assert_eq!(bench.lamp.state(), LampState::ButtonHeld);
    assert!(bench.lamp.settings().power_on);
}

#[test]
fn held_toggle_fires_once() {
    let mut bench = Bench::new();
    bench.hold(ButtonMask::only(Button::Toggle), 3000);
    assert!(bench.lamp.settings().power_on);
    assert_eq!(bench.lamp.state(), LampState::ButtonHeld);
    bench.release(3);
    assert!(bench.lamp.settings().power_on);
    assert_eq!(bench.lamp.state(), LampState::Idle);
}

// ── Typematic repeat ──────────────────────────────────────────

#[test]
fn increase_repeats_after_delay_then_at_rate() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    let up = ButtonMask::only(Button::Increase);

    bench.hold(up, TICKS_TO_HELD);
    assert_eq!(bench.lamp.settings().level, 181, "single step on press");

    bench.hold(up, 349);
    assert_eq!(bench.lamp.settings().level, 181, "no repeat before delay");
    bench.hold(up, 1);
    assert_eq!(bench.lamp.settings().level, 182);

    bench.hold(up, 14);
    assert_eq!(bench.lamp.settings().level, 182);
    bench.hold(up, 1);
    assert_eq!(bench.lamp.settings().level, 183);

    bench.hold(up, 15 * 10);
    assert_eq!(bench.lamp.settings().level, 193);
    assert_eq!(bench.lamp.settings().button, ButtonAction::Adjust);

    bench.release(3);
    assert_eq!(bench.lamp.state(), LampState::Idle);
    assert!(!bench.hw.indicator_on());
}

#[test]
fn decrease_repeats_after_delay_then_at_rate() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    let down = ButtonMask::only(Button::Decrease);

    bench.hold(down, TICKS_TO_HELD);
    assert_eq!(bench.lamp.settings().level, 179, "single step on press");

    bench.hold(down, 349);
    assert_eq!(bench.lamp.settings().level, 179, "no repeat before delay");
    bench.hold(down, 1);
    assert_eq!(bench.lamp.settings().level, 178);

    bench.hold(down, 14);
    assert_eq!(bench.lamp.settings().level, 178);
    bench.hold(down, 1);
    assert_eq!(bench.lamp.settings().level, 177);
}

#[test]
fn increase_wins_when_both_adjust_buttons_are_held() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    let both = ButtonMask::only(Button::Increase).with(Button::Decrease);

    bench.hold(both, TICKS_TO_HELD);
    assert_eq!(bench.lamp.settings().level, 180, "press steps cancel out");

    bench.hold(both, 350 + 15 * 4);
    assert_eq!(bench.lamp.settings().level, 185);
}

#[test]
fn repeat_resumes_from_scratch_after_release() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    let up = ButtonMask::only(Button::Increase);

    bench.hold(up, TICKS_TO_HELD + 360);
    assert_eq!(bench.lamp.settings().level, 182);
    bench.release(3);

    bench.hold(up, TICKS_TO_HELD + 349);
    assert_eq!(bench.lamp.settings().level, 183, "delay restarts per hold");
}

#[test]
fn increase_saturates_at_255() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    bench.hold(ButtonMask::only(Button::Increase), TICKS_TO_HELD + 350 + 15 * 100);
    assert_eq!(bench.lamp.settings().level, 255);
    assert_eq!(bench.hw.last_pwm(), Some((4095, 2395)));
}

#[test]
fn decrease_floors_at_one_while_lit() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    bench.hold(ButtonMask::only(Button::Decrease), TICKS_TO_HELD + 350 + 15 * 200);
    let s = bench.lamp.settings();
    assert_eq!(s.level, 1);
    assert!(s.power_on);
    assert_eq!(s.channel, Channel::Both);
    assert_eq!(bench.hw.last_pwm(), Some((310, 310)));
}

#[test]
fn adjust_follows_single_channel() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    bench.click(Button::Warm);
    bench.click(Button::Decrease);
    assert_eq!(bench.lamp.settings().level, 179);
    assert_eq!(bench.hw.last_pwm(), Some((1285, 200)));
}

#[test]
fn toggle_with_channel_button_turns_off_and_selects() {
    let mut bench = Bench::new();
    bench.click(Button::Toggle);
    bench.hold(ButtonMask::only(Button::Toggle).with(Button::Cool), 20);
    bench.release(3);

    let s = bench.lamp.settings();
    assert!(!s.power_on);
    assert_eq!(s.channel, Channel::Cool);
    assert_eq!(s.level, 0);
    assert_eq!(bench.hw.last_pwm(), Some((200, 200)));
}

#[test]
fn adjust_while_off_is_ignored() {
    let mut bench = Bench::new();
    let before = bench.hw.calls.clone();
    bench.hold(ButtonMask::only(Button::Increase), 2000);
    bench.release(3);
    assert_eq!(bench.lamp.settings().level, 0);
    let pwm_after: Vec<_> = bench.hw.calls[before.len()..]
        .iter()
        .filter(|c| matches!(c, HwCall::Pwm { .. }))
        .collect();
    assert!(
        pwm_after
            .iter()
            .all(|c| **c == HwCall::Pwm { warm: 200, cool: 200 }),
        "lamp must stay dark: {pwm_after:?}"
    );
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn events_describe_a_toggle() {
    let mut bench = Bench::new();
    bench.sink.events.clear();
    bench.click(Button::Toggle);

    let transitions: Vec<_> = bench
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::StateChanged { to, .. } => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(
        transitions,
        vec![
            LampState::Debouncing,
            LampState::ButtonPressed,
            LampState::ButtonHeld,
            LampState::ButtonReleased,
            LampState::Idle,
        ]
    );

    assert!(bench.sink.events.contains(&AppEvent::BrightnessApplied {
        levels: ChannelLevels::both(180),
        duty: PwmTargets { warm: 1298, cool: 614 },
    }));
    let settings_events = bench
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::SettingsChanged(_)))
        .count();
    assert_eq!(settings_events, 1);
}

// ── Loop timing and configuration ─────────────────────────────

#[test]
fn run_for_sleeps_once_per_tick() {
    let mut bench = Bench::new();
    let mut delay = HostDelay::simulated();
    bench
        .lamp
        .run_for(250, &mut bench.hw, &mut bench.sink, &mut delay);
    assert_eq!(bench.lamp.tick_count(), 250);
    assert_eq!(bench.hw.reads, 250, "one port read per tick");
    assert_eq!(delay.slept_ms(), 250);
}

#[test]
fn custom_config_changes_timing() {
    let config = LampConfig {
        debounce_ticks: 2,
        typematic_delay_ticks: 10,
        typematic_rate_ticks: 5,
        default_level: 50,
        loop_interval_ms: 1,
    };
    assert!(config.validate().is_ok());
    let mut bench = Bench::with_config(config);

    // 1 Idle + 3 Debouncing commits the press; the action runs next tick.
    bench.hold(ButtonMask::only(Button::Toggle), 5);
    assert_eq!(bench.lamp.settings().level, 50);
    bench.release(3);

    bench.hold(ButtonMask::only(Button::Increase), 5 + 10 + 5);
    assert_eq!(bench.lamp.settings().level, 53);
}
