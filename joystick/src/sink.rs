use embedded_graphics::primitives::Rectangle;

/// The two PWM driven LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Follows the horizontal axis
    Red,
    /// Follows the vertical axis
    Blue,
}

/// PWM outputs with an 8 bit level, where 255 is the wrap value.
pub trait DutyOutput {
    type Error;

    fn set_duty(&mut self, led: Led, level: u8) -> Result<(), Self::Error>;
}

/// A monochrome display with a local framebuffer.
///
/// `clear` and `fill_rect` only touch the framebuffer, `flush` sends it to
/// the panel.
pub trait DisplaySink {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, area: Rectangle) -> Result<(), Self::Error>;

    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: DutyOutput + ?Sized> DutyOutput for &mut T {
    type Error = T::Error;

    fn set_duty(&mut self, led: Led, level: u8) -> Result<(), Self::Error> {
        T::set_duty(self, led, level)
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    type Error = T::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        T::clear(self)
    }

    fn fill_rect(&mut self, area: Rectangle) -> Result<(), Self::Error> {
        T::fill_rect(self, area)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}
