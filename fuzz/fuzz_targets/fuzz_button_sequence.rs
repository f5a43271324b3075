//! Fuzz target: `LampController::tick`
//!
//! Treats the input as pairs of (button mask, hold length) and drives them
//! through the controller, asserting that the lamp settings stay
//! consistent and that every PWM write matches a table entry.
//!
//! cargo fuzz run fuzz_button_sequence

#![no_main]

use duolamp::app::ports::{ButtonPort, Indicator, NullSink, PwmOutput};
use duolamp::app::service::LampController;
use duolamp::brightness::{COOL_TABLE, WARM_TABLE};
use duolamp::config::LampConfig;
use duolamp::fsm::context::ButtonMask;
use duolamp::settings::Channel;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Rig {
    mask: ButtonMask,
}

impl ButtonPort for Rig {
    fn read(&mut self) -> ButtonMask {
        self.mask
    }
}

impl Indicator for Rig {
    fn set_indicator(&mut self, _on: bool) {}
}

impl PwmOutput for Rig {
    fn write(&mut self, warm: u16, cool: u16) {
        assert!(WARM_TABLE.contains(&warm), "warm duty {warm} not in table");
        assert!(COOL_TABLE.contains(&cool), "cool duty {cool} not in table");
    }
}

fuzz_target!(|data: &[u8]| {
    let mut lamp = LampController::new(LampConfig::default());
    let mut rig = Rig::default();
    lamp.start(&mut rig, &mut NullSink);

    for chunk in data.chunks_exact(2) {
        rig.mask = ButtonMask::from_bits(chunk[0]);
        // Scale so a single pair can cover the 350-tick typematic delay.
        let ticks = u16::from(chunk[1]) * 4;
        for _ in 0..ticks {
            lamp.tick(&mut rig, &mut NullSink);
            let s = lamp.settings();
            assert_eq!(s.state, lamp.state());
            if s.channel == Channel::None {
                assert!(!s.power_on && s.level == 0);
            }
            if s.power_on {
                assert!(s.level >= 1);
            }
        }
    }
});
