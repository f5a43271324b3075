//! Hardware drivers for the button port, busy indicator and PWM outputs.

pub mod button;
pub mod indicator;
pub mod pwm;
