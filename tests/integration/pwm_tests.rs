//! End-to-end tests through the real driver stack.
//!
//! `GpioButtonPort` and `IndicatorLed` run over shared-state fake pins, and
//! the PWM output is `DoubleBufferedPwm` over the simulated register block,
//! so every brightness change is checked at register level.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use duolamp::adapters::hardware::HardwareAdapter;
use duolamp::app::ports::NullSink;
use duolamp::app::service::LampController;
use duolamp::config::LampConfig;
use duolamp::drivers::button::GpioButtonPort;
use duolamp::drivers::indicator::IndicatorLed;
use duolamp::drivers::pwm::{
    DoubleBufferedPwm, PWM_PAGE, PwmRegisters, RegisterWrite, SimPwmRegisters,
};
use duolamp::fsm::LampState;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

// ── Fake pins ─────────────────────────────────────────────────

/// Input pin whose level the test flips through a shared cell.
#[derive(Clone)]
struct SharedPin(Rc<Cell<bool>>);

impl SharedPin {
    /// Idle (pulled-up) pin.
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl ErrorType for SharedPin {
    type Error = Infallible;
}

impl InputPin for SharedPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

type Rig = HardwareAdapter<
    GpioButtonPort<SharedPin>,
    IndicatorLed<SharedPin>,
    DoubleBufferedPwm<SimPwmRegisters>,
>;

/// Register page another subsystem left selected.
const APP_PAGE: u8 = 0x00;

fn rig() -> (Rig, [SharedPin; 5], SharedPin) {
    let buttons: [SharedPin; 5] = core::array::from_fn(|_| SharedPin::new());
    let led = SharedPin(Rc::new(Cell::new(false)));
    let hw = HardwareAdapter::new(
        GpioButtonPort::new(buttons.clone()),
        IndicatorLed::new(led.clone()),
        DoubleBufferedPwm::new(SimPwmRegisters::new(APP_PAGE)),
    );
    (hw, buttons, led)
}

fn hold(lamp: &mut LampController, hw: &mut Rig, pin: &SharedPin, ticks: u32) {
    pin.0.set(false);
    for _ in 0..ticks {
        lamp.tick(hw, &mut NullSink);
        hw.pwm_mut().registers_mut().overflow();
    }
    pin.0.set(true);
}

fn idle(lamp: &mut LampController, hw: &mut Rig, ticks: u32) {
    for _ in 0..ticks {
        lamp.tick(hw, &mut NullSink);
        hw.pwm_mut().registers_mut().overflow();
    }
}

#[test]
fn toggle_reaches_live_compare_registers() {
    let (mut hw, buttons, led) = rig();
    let mut lamp = LampController::new(LampConfig::default());
    lamp.start(&mut hw, &mut NullSink);
    hw.pwm_mut().registers_mut().overflow();
    assert_eq!(hw.pwm().registers().live(), (200, 200));

    hold(&mut lamp, &mut hw, &buttons[0], 20);
    assert!(led.0.get(), "busy LED lit while held");
    assert_eq!(hw.pwm().registers().live(), (1298, 614));

    idle(&mut lamp, &mut hw, 3);
    assert!(!led.0.get());
    assert_eq!(lamp.state(), LampState::Idle);
}

#[test]
fn every_write_is_bracketed_by_sync_update() {
    let (mut hw, buttons, _led) = rig();
    let mut lamp = LampController::new(LampConfig::default());
    lamp.start(&mut hw, &mut NullSink);
    hold(&mut lamp, &mut hw, &buttons[0], 20);
    idle(&mut lamp, &mut hw, 3);
    hold(&mut lamp, &mut hw, &buttons[2], 20);
    idle(&mut lamp, &mut hw, 3);

    let journal = hw.pwm().registers().journal();
    assert!(!journal.contains(&RegisterWrite::Misrouted));

    // Every run of update-register writes sits between SYNCUPD=0 and
    // SYNCUPD=1, with the PWM page selected and later restored.
    let mut sync = true;
    let mut updates = 0;
    for w in journal {
        match w {
            RegisterWrite::SyncUpdate(false) => {
                assert!(sync);
                sync = false;
                updates = 0;
            }
            RegisterWrite::Update(..) => {
                assert!(!sync, "update register written with sync enabled");
                updates += 1;
            }
            RegisterWrite::SyncUpdate(true) => {
                assert_eq!(updates, 4, "both channels written before sync");
                sync = true;
            }
            RegisterWrite::Page(_) | RegisterWrite::Misrouted => {}
        }
    }
    assert!(sync);
    assert_eq!(journal.last(), Some(&RegisterWrite::Page(APP_PAGE)));
    assert!(journal.contains(&RegisterWrite::Page(PWM_PAGE)));
    assert_eq!(hw.pwm().registers().page(), APP_PAGE);
}
