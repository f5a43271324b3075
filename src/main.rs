//! DuoLamp Firmware — Main Entry Point
//!
//! Single-threaded polling loop: read buttons, tick the FSM, apply
//! brightness, sleep one millisecond, repeat forever.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  GpioButtonPort    IndicatorLed    DutyPair (LEDC)   FreeRtos  │
//! │  (ButtonPort)      (Indicator)     (PwmOutput)       (DelayNs) │
//! │            └──────── HardwareAdapter ────────┘                 │
//! │  LogEventSink (EventSink)                                      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            LampController (pure logic)                 │    │
//! │  │  FSM · action · brightness lookup                      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pin assignments live in [`duolamp::pins`].
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyInputPin, AnyOutputPin, Input, PinDriver, Pull};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;
use log::info;

use duolamp::adapters::hardware::HardwareAdapter;
use duolamp::adapters::log_sink::LogEventSink;
use duolamp::app::service::LampController;
use duolamp::config::LampConfig;
use duolamp::drivers::button::GpioButtonPort;
use duolamp::drivers::indicator::IndicatorLed;
use duolamp::drivers::pwm::DutyPair;
use duolamp::pins;

// SAFETY (both helpers): each GPIO number in `pins` is distinct and is
// claimed exactly once below. `Peripherals::pins` is never used, so no other
// driver can alias these pins.

fn button(gpio: i32) -> Result<PinDriver<'static, AnyInputPin, Input>> {
    let pin = unsafe { AnyInputPin::new(gpio) };
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}

fn output_pin(gpio: i32) -> AnyOutputPin {
    unsafe { AnyOutputPin::new(gpio) }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  DuoLamp v{}                         ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = LampConfig::default();
    config.validate()?;

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    let [btn_toggle, btn_cool, btn_warm, btn_up, btn_down] = pins::BUTTON_GPIOS;
    let buttons = GpioButtonPort::new([
        button(btn_toggle)?,
        button(btn_cool)?,
        button(btn_warm)?,
        button(btn_up)?,
        button(btn_down)?,
    ]);

    let indicator = IndicatorLed::new(PinDriver::output(output_pin(pins::INDICATOR_GPIO))?);

    let timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default()
            .frequency(pins::PWM_FREQ_HZ.Hz())
            .resolution(Resolution::Bits12),
    )?;
    let warm = LedcDriver::new(
        peripherals.ledc.channel0,
        &timer,
        output_pin(pins::PWM_WARM_GPIO),
    )?;
    let cool = LedcDriver::new(
        peripherals.ledc.channel1,
        &timer,
        output_pin(pins::PWM_COOL_GPIO),
    )?;
    let pwm = DutyPair::new(warm, cool);

    let mut hw = HardwareAdapter::new(buttons, indicator, pwm);
    let mut sink = LogEventSink::new();
    let mut delay = FreeRtos;

    // ── 4. Control loop ───────────────────────────────────────
    let mut lamp = LampController::new(config);
    lamp.start(&mut hw, &mut sink);
    lamp.run(&mut hw, &mut sink, &mut delay)
}
