//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap.
//!
//! ```text
//!  IDLE ──[any button]──▶ DEBOUNCING ──[> debounce_ticks]──▶ BUTTON_PRESSED
//!    ▲                        │                                   │
//!    │                  [all released]                       [one tick]
//!    ├────────────────────────┘                                   ▼
//!    │                                                       BUTTON_HELD ◀─┐
//!    │                                                            │   [typematic
//!    │                                                      [all released] repeat]
//!    │                                                            ▼        │
//!    └──────────────[one tick]─────────────── BUTTON_RELEASED     └────────┘
//! ```
//!
//! Toggle and channel buttons act once per press cycle, in
//! `BUTTON_PRESSED`. Only increase/decrease auto-repeat in `BUTTON_HELD`.

use super::context::{Button, FsmContext};
use super::{LampState, StateDescriptor};
use crate::action::action;
use crate::settings::{ButtonAction, Channel};
use log::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once at startup.
pub fn build_state_table() -> [StateDescriptor; LampState::COUNT] {
    [
        // Index 0: Idle
        StateDescriptor {
            id: LampState::Idle,
            name: "Idle",
            on_enter: None,
            on_exit: None,
            on_update: idle_update,
        },
        // Index 1: Debouncing
        StateDescriptor {
            id: LampState::Debouncing,
            name: "Debouncing",
            on_enter: Some(debouncing_enter),
            on_exit: None,
            on_update: debouncing_update,
        },
        // Index 2: ButtonPressed
        StateDescriptor {
            id: LampState::ButtonPressed,
            name: "ButtonPressed",
            on_enter: Some(pressed_enter),
            on_exit: None,
            on_update: pressed_update,
        },
        // Index 3: ButtonHeld
        StateDescriptor {
            id: LampState::ButtonHeld,
            name: "ButtonHeld",
            on_enter: Some(held_enter),
            on_exit: Some(held_exit),
            on_update: held_update,
        },
        // Index 4: ButtonReleased
        StateDescriptor {
            id: LampState::ButtonReleased,
            name: "ButtonReleased",
            on_enter: None,
            on_exit: None,
            on_update: released_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE state
// ═══════════════════════════════════════════════════════════════════════════

fn idle_update(ctx: &mut FsmContext) -> Option<LampState> {
    if ctx.buttons.any() {
        return Some(LampState::Debouncing);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  DEBOUNCING state: the press must be stable before it counts
// ═══════════════════════════════════════════════════════════════════════════

fn debouncing_enter(ctx: &mut FsmContext) {
    ctx.debounce_count = 0;
}

fn debouncing_update(ctx: &mut FsmContext) -> Option<LampState> {
    if !ctx.buttons.any() {
        debug!(
            "DEBOUNCING: released after {} ticks, ignoring bounce",
            ctx.debounce_count
        );
        return Some(LampState::Idle);
    }

    ctx.debounce_count = ctx.debounce_count.saturating_add(1);
    if ctx.debounce_count > ctx.config.debounce_ticks {
        return Some(LampState::ButtonPressed);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  BUTTON_PRESSED state: apply the press once
// ═══════════════════════════════════════════════════════════════════════════

fn pressed_enter(ctx: &mut FsmContext) {
    ctx.commands.indicator = true;
}

fn pressed_update(ctx: &mut FsmContext) -> Option<LampState> {
    let buttons = ctx.buttons;
    let default_level = ctx.config.default_level;
    let s = &mut ctx.settings;

    if buttons.is_pressed(Button::Toggle) {
        if !s.power_on && s.channel == Channel::None {
            s.power_on = true;
            s.level = default_level;
            s.select(Channel::Both);
        } else if s.power_on && s.channel != Channel::Both {
            s.select(Channel::Both);
        } else {
            s.power_on = false;
            s.level = 0;
            s.select(Channel::None);
        }
    }

    // Warm is physical channel 0, but the cool button comes first on the
    // panel.
    if buttons.is_pressed(Button::Cool) {
        s.select(Channel::Cool);
    }
    if buttons.is_pressed(Button::Warm) {
        s.select(Channel::Warm);
    }

    if s.has_channel() && buttons.is_pressed(Button::Increase) {
        s.increase();
        s.button = ButtonAction::Adjust;
    }
    if s.has_channel() && buttons.is_pressed(Button::Decrease) {
        s.decrease();
        s.button = ButtonAction::Adjust;
    }

    info!(
        "PRESSED: {:?} -> power={} channel={:?} level={}",
        buttons.pressed().as_slice(),
        s.power_on,
        s.channel,
        s.level
    );

    action(&ctx.settings, &mut ctx.commands);
    Some(LampState::ButtonHeld)
}

// ═══════════════════════════════════════════════════════════════════════════
//  BUTTON_HELD state: typematic repeat for increase/decrease
// ═══════════════════════════════════════════════════════════════════════════

fn held_enter(ctx: &mut FsmContext) {
    ctx.typematic.reset();
}

fn held_exit(ctx: &mut FsmContext) {
    ctx.typematic.reset();
}

fn held_update(ctx: &mut FsmContext) -> Option<LampState> {
    ctx.typematic.delay = ctx.typematic.delay.saturating_add(1);
    ctx.typematic.rate = ctx.typematic.rate.saturating_add(1);

    // Same channel gate as a single press: an unlit lamp never creeps up.
    let adjustable = ctx.settings.has_channel();
    if adjustable && ctx.buttons.is_pressed(Button::Increase) && repeat_due(ctx) {
        ctx.settings.increase();
        repeat(ctx);
    }
    if adjustable && ctx.buttons.is_pressed(Button::Decrease) && repeat_due(ctx) {
        ctx.settings.decrease();
        repeat(ctx);
    }

    if !ctx.buttons.any() {
        return Some(LampState::ButtonReleased);
    }

    None
}

fn repeat_due(ctx: &FsmContext) -> bool {
    ctx.typematic.delay >= ctx.config.typematic_delay_ticks
        && ctx.typematic.rate >= ctx.config.typematic_rate_ticks
}

fn repeat(ctx: &mut FsmContext) {
    debug!("HELD: repeat, level={}", ctx.settings.level);
    action(&ctx.settings, &mut ctx.commands);
    ctx.typematic.rate = 0;
}

// ═══════════════════════════════════════════════════════════════════════════
//  BUTTON_RELEASED state: single-tick transient back to idle
// ═══════════════════════════════════════════════════════════════════════════

fn released_update(ctx: &mut FsmContext) -> Option<LampState> {
    ctx.commands.indicator = false;
    Some(LampState::Idle)
}
