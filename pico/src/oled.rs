use embassy_rp::{
    i2c::{Blocking, I2c},
    peripherals::I2C1,
};
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use joystick::DisplaySink;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

type Driver<'d> = Ssd1306<
    I2CInterface<I2c<'d, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub type OledError = <Driver<'static> as DrawTarget>::Error;

/// 128x64 SSD1306 panel on I2C1, drawn through a local framebuffer.
pub struct Oled<'d> {
    display: Driver<'d>,
}

impl<'d> Oled<'d> {
    /// Configures the controller. Fails if the panel does not acknowledge.
    pub fn new(i2c: I2c<'d, I2C1, Blocking>, address: u8) -> Result<Self, OledError> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init()?;
        Ok(Oled { display })
    }
}

impl DisplaySink for Oled<'_> {
    type Error = OledError;

    fn clear(&mut self) -> Result<(), OledError> {
        self.display.clear_buffer();
        Ok(())
    }

    fn fill_rect(&mut self, area: Rectangle) -> Result<(), OledError> {
        area.into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.display)
    }

    fn flush(&mut self) -> Result<(), OledError> {
        self.display.flush()
    }
}
