//! Function-pointer finite state machine engine for the button handler.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateTable                                                  │
//! │  ┌────────────────┬───────────┬──────────┬───────────────────┐│
//! │  │ LampState      │ on_enter  │ on_exit  │ on_update         ││
//! │  ├────────────────┼───────────┼──────────┼───────────────────┤│
//! │  │ Idle           │ -         │ -        │ fn(ctx)->Option<> ││
//! │  │ Debouncing     │ fn(ctx)   │ -        │ fn(ctx)->Option<> ││
//! │  │ ButtonPressed  │ fn(ctx)   │ -        │ fn(ctx)->Option<> ││
//! │  │ ButtonHeld     │ fn(ctx)   │ fn(ctx)  │ fn(ctx)->Option<> ││
//! │  │ ButtonReleased │ -         │ -        │ fn(ctx)->Option<> ││
//! │  └────────────────┴───────────┴──────────┴───────────────────┘│
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** state.
//! If it returns `Some(next_id)`, the engine runs `on_exit` for the
//! current state, then `on_enter` for the next, and updates the
//! current pointer. All functions receive `&mut FsmContext`, which holds
//! the button snapshot for this tick, the lamp settings, the per-state
//! counters and the output commands.

pub mod context;
pub mod states;

use context::FsmContext;
use log::info;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Button handling states.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LampState {
    Idle = 0,
    Debouncing = 1,
    ButtonPressed = 2,
    ButtonHeld = 3,
    ButtonReleased = 4,
}

impl LampState {
    /// Number of states; sizes the table array.
    pub const COUNT: usize = 5;

    /// Convert a table index back to `LampState`. Panics on out-of-range in
    /// debug builds; returns `Idle` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Idle,
            1 => Self::Debouncing,
            2 => Self::ButtonPressed,
            3 => Self::ButtonHeld,
            4 => Self::ButtonReleased,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Idle
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each state transition.
pub type StateActionFn = fn(&mut FsmContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut FsmContext) -> Option<LampState>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
/// Stored in a fixed-size array, so no heap and no `dyn`.
pub struct StateDescriptor {
    pub id: LampState,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns the state table (array of [`StateDescriptor`]) and is driven with a
/// mutable [`FsmContext`] on every call. The current state is mirrored into
/// `ctx.settings.state` on every transition.
pub struct Fsm {
    /// Fixed-size table indexed by `LampState as usize`.
    table: [StateDescriptor; LampState::COUNT],
    /// Index of the currently active state.
    current: usize,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; LampState::COUNT], initial: LampState) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, d)| d.id as usize == i),
            "state table out of order"
        );
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        ctx.settings.state = self.current_state();
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    pub fn tick(&mut self, ctx: &mut FsmContext) {
        let next = (self.table[self.current].on_update)(ctx);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> LampState {
        LampState::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: LampState, ctx: &mut FsmContext) {
        let next_idx = next_id as usize;

        log::debug!(
            "FSM transition: {} -> {}",
            self.table[self.current].name,
            self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;
        ctx.settings.state = next_id;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
