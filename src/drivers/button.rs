//! Five-button port driver.
//!
//! ## Hardware
//!
//! Five momentary switches, active-low with pull-ups. Pin `i` carries
//! button `i` (toggle, cool, warm, increase, decrease). No interrupts: the
//! control loop polls the whole port once per tick and the FSM does the
//! debouncing.
//!
//! ## Dual-target design
//!
//! Generic over [`embedded_hal::digital::InputPin`]: `esp-idf-hal`
//! `PinDriver`s on target, plain fakes in host tests.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::app::ports::ButtonPort;
use crate::error::{Error, GpioError};
use crate::fsm::context::{Button, ButtonMask};

pub struct GpioButtonPort<P> {
    pins: [P; 5],
}

impl<P: InputPin> GpioButtonPort<P> {
    /// `pins` in button order: toggle, cool, warm, increase, decrease.
    pub fn new(pins: [P; 5]) -> Self {
        Self { pins }
    }

    /// Read every pin. The first failing pin aborts the read.
    pub fn try_read(&mut self) -> Result<ButtonMask, Error> {
        let mut mask = ButtonMask::NONE;
        for (button, pin) in Button::ALL.into_iter().zip(self.pins.iter_mut()) {
            let low = pin.is_low().map_err(|e| {
                warn!("button {:?} read failed: {:?}", button, e.kind());
                GpioError::ButtonRead(button as u8)
            })?;
            if low {
                mask = mask.with(button);
            }
        }
        Ok(mask)
    }
}

impl<P: InputPin> ButtonPort for GpioButtonPort<P> {
    /// An unreadable port reads as all-released, which sends the FSM back
    /// to `Idle` through its normal release path.
    fn read(&mut self) -> ButtonMask {
        self.try_read().unwrap_or(ButtonMask::NONE)
    }
}
