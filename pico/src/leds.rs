use core::convert::Infallible;

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use joystick::{DutyOutput, Led};

/// Red and blue LEDs on channels A and B of one PWM slice.
pub struct Leds<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> Leds<'d> {
    /// Slice configuration with a wrap of `top`, both LEDs off.
    pub fn config(top: u16) -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = top;
        config.compare_a = 0;
        config.compare_b = 0;
        config
    }

    /// `pwm` must have been created from `config`.
    pub fn new(pwm: Pwm<'d>, config: PwmConfig) -> Self {
        Leds { pwm, config }
    }
}

impl DutyOutput for Leds<'_> {
    type Error = Infallible;

    fn set_duty(&mut self, led: Led, level: u8) -> Result<(), Infallible> {
        match led {
            Led::Red => self.config.compare_a = level.into(),
            Led::Blue => self.config.compare_b = level.into(),
        }
        self.pwm.set_config(&self.config);
        Ok(())
    }
}
