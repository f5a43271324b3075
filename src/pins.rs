//! GPIO and LEDC assignments for the DuoLamp board (ESP32-S3 devkit).
//!
//! Every pin the firmware binary claims is listed here; `main.rs` builds its
//! drivers from these numbers and nothing else hard-codes a GPIO.

// ---------------------------------------------------------------------------
// Buttons (active-low, internal pull-up)
// ---------------------------------------------------------------------------

pub const BUTTON_TOGGLE_GPIO: i32 = 4;
pub const BUTTON_COOL_GPIO: i32 = 5;
pub const BUTTON_WARM_GPIO: i32 = 6;
pub const BUTTON_INCREASE_GPIO: i32 = 7;
pub const BUTTON_DECREASE_GPIO: i32 = 15;

/// Button pins in [`crate::fsm::context::Button::ALL`] order.
pub const BUTTON_GPIOS: [i32; 5] = [
    BUTTON_TOGGLE_GPIO,
    BUTTON_COOL_GPIO,
    BUTTON_WARM_GPIO,
    BUTTON_INCREASE_GPIO,
    BUTTON_DECREASE_GPIO,
];

// ---------------------------------------------------------------------------
// Busy indicator
// ---------------------------------------------------------------------------

/// Digital output, active HIGH.
pub const INDICATOR_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Lamp PWM (LEDC timer 0)
// ---------------------------------------------------------------------------

/// LEDC channel 0.
pub const PWM_WARM_GPIO: i32 = 16;
/// LEDC channel 1.
pub const PWM_COOL_GPIO: i32 = 17;

/// LEDC carrier frequency for both lamp channels.
pub const PWM_FREQ_HZ: u32 = 5_000;
/// LEDC timer resolution. 12 bits covers the 0..=4095 duty tables.
pub const PWM_RESOLUTION_BITS: u32 = 12;
