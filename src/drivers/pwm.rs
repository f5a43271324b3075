//! Two-channel PWM output drivers.
//!
//! ## Double-buffered peripheral
//!
//! The lamp PWM block has two 16-bit compare registers per channel pair,
//! reached through four 8-bit *update* (shadow) registers on register page
//! [`PWM_PAGE`]. While the sync-update flag is set, the peripheral copies
//! the update registers into its live compare registers every time the
//! counter overflows. [`DoubleBufferedPwm`] writes both targets with the
//! flag cleared and sets it afterwards, so both channels switch in the same
//! PWM period:
//!
//! ```text
//!   save page → page 0x10 → SYNCUPD=0 → CH0L CH0H CH1L CH1H → SYNCUPD=1 → restore page
//! ```
//!
//! ## Dual-target design
//!
//! - [`PwmRegisters`] is the register-level seam. [`SimPwmRegisters`] models
//!   the peripheral in memory (page routing, update vs live registers,
//!   overflow latch, write journal) for host tests.
//! - [`DutyPair`] drives two `embedded_hal::pwm::SetDutyCycle` channels for
//!   peripherals that latch duty at the period boundary on their own (the
//!   ESP32 LEDC block used by the firmware binary).

use embedded_hal::pwm::{Error as _, SetDutyCycle};
use log::warn;

use crate::app::ports::PwmOutput;
use crate::brightness::MAX_DUTY;
use crate::error::Error;

/// Register page holding the PWM block.
pub const PWM_PAGE: u8 = 0x10;

// ───────────────────────────────────────────────────────────────
// Register-level seam
// ───────────────────────────────────────────────────────────────

/// The four 8-bit update registers, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRegister {
    Ch0Low,
    Ch0High,
    Ch1Low,
    Ch1High,
}

impl UpdateRegister {
    const fn index(self) -> usize {
        match self {
            Self::Ch0Low => 0,
            Self::Ch0High => 1,
            Self::Ch1Low => 2,
            Self::Ch1High => 3,
        }
    }
}

/// Raw register access to a page-switched, double-buffered PWM block.
pub trait PwmRegisters {
    /// Currently selected register page.
    fn page(&self) -> u8;
    fn set_page(&mut self, page: u8);
    /// Set or clear the sync-update flag. Only reaches the PWM block while
    /// [`PWM_PAGE`] is selected.
    fn set_sync_update(&mut self, enabled: bool);
    /// Write one update register. Only reaches the PWM block while
    /// [`PWM_PAGE`] is selected.
    fn write_update(&mut self, reg: UpdateRegister, value: u8);
}

/// Tear-free [`PwmOutput`] over a [`PwmRegisters`] implementation.
pub struct DoubleBufferedPwm<R> {
    regs: R,
}

impl<R: PwmRegisters> DoubleBufferedPwm<R> {
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Write both compare targets so they take effect in the same period.
    /// The selected register page is unchanged on return.
    pub fn pwm_set(&mut self, ch0: u16, ch1: u16) {
        let saved_page = self.regs.page();
        self.regs.set_page(PWM_PAGE);

        self.regs.set_sync_update(false);
        let [ch0_lo, ch0_hi] = ch0.to_le_bytes();
        let [ch1_lo, ch1_hi] = ch1.to_le_bytes();
        self.regs.write_update(UpdateRegister::Ch0Low, ch0_lo);
        self.regs.write_update(UpdateRegister::Ch0High, ch0_hi);
        self.regs.write_update(UpdateRegister::Ch1Low, ch1_lo);
        self.regs.write_update(UpdateRegister::Ch1High, ch1_hi);
        self.regs.set_sync_update(true);

        self.regs.set_page(saved_page);
    }

    pub fn registers(&self) -> &R {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }
}

impl<R: PwmRegisters> PwmOutput for DoubleBufferedPwm<R> {
    fn write(&mut self, warm: u16, cool: u16) {
        self.pwm_set(warm, cool);
    }
}

// ───────────────────────────────────────────────────────────────
// In-memory peripheral model
// ───────────────────────────────────────────────────────────────

/// One register access as seen by [`SimPwmRegisters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterWrite {
    Page(u8),
    SyncUpdate(bool),
    Update(UpdateRegister, u8),
    /// A PWM register write issued while another page was selected.
    Misrouted,
}

/// Simulated double-buffered PWM block.
#[derive(Debug, Clone, Default)]
pub struct SimPwmRegisters {
    page: u8,
    sync_update: bool,
    update: [u8; 4],
    live: [u16; 2],
    journal: Vec<RegisterWrite>,
}

impl SimPwmRegisters {
    /// Peripheral with `page` selected and everything else zeroed.
    pub fn new(page: u8) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Counter overflow: latch the update registers into the live compare
    /// registers if sync-update is enabled.
    pub fn overflow(&mut self) {
        if self.sync_update {
            self.live = [
                u16::from_le_bytes([self.update[0], self.update[1]]),
                u16::from_le_bytes([self.update[2], self.update[3]]),
            ];
        }
    }

    /// Live compare values `(ch0, ch1)` driving the outputs.
    pub fn live(&self) -> (u16, u16) {
        (self.live[0], self.live[1])
    }

    /// Every register access since construction, oldest first.
    pub fn journal(&self) -> &[RegisterWrite] {
        &self.journal
    }
}

impl PwmRegisters for SimPwmRegisters {
    fn page(&self) -> u8 {
        self.page
    }

    fn set_page(&mut self, page: u8) {
        self.page = page;
        self.journal.push(RegisterWrite::Page(page));
    }

    fn set_sync_update(&mut self, enabled: bool) {
        if self.page != PWM_PAGE {
            self.journal.push(RegisterWrite::Misrouted);
            return;
        }
        self.sync_update = enabled;
        self.journal.push(RegisterWrite::SyncUpdate(enabled));
    }

    fn write_update(&mut self, reg: UpdateRegister, value: u8) {
        if self.page != PWM_PAGE {
            self.journal.push(RegisterWrite::Misrouted);
            return;
        }
        self.update[reg.index()] = value;
        self.journal.push(RegisterWrite::Update(reg, value));
    }
}

// ───────────────────────────────────────────────────────────────
// embedded-hal channel pair
// ───────────────────────────────────────────────────────────────

/// [`PwmOutput`] over two independent `SetDutyCycle` channels.
///
/// Targets are on the 0..=[`MAX_DUTY`] scale and are rescaled to each
/// channel's own resolution.
pub struct DutyPair<A, B> {
    warm: A,
    cool: B,
}

impl<A: SetDutyCycle, B: SetDutyCycle> DutyPair<A, B> {
    pub fn new(warm: A, cool: B) -> Self {
        Self { warm, cool }
    }

    pub fn try_write(&mut self, warm: u16, cool: u16) -> Result<(), Error> {
        let warm = warm.min(MAX_DUTY);
        let cool = cool.min(MAX_DUTY);
        self.warm
            .set_duty_cycle_fraction(warm, MAX_DUTY)
            .map_err(|e| {
                warn!("warm duty write failed: {:?}", e.kind());
                Error::Pwm
            })?;
        self.cool
            .set_duty_cycle_fraction(cool, MAX_DUTY)
            .map_err(|e| {
                warn!("cool duty write failed: {:?}", e.kind());
                Error::Pwm
            })?;
        Ok(())
    }
}

impl<A: SetDutyCycle, B: SetDutyCycle> PwmOutput for DutyPair<A, B> {
    fn write(&mut self, warm: u16, cool: u16) {
        let _ = self.try_write(warm, cool);
    }
}
