/// Compile time parameters of the demo.
///
/// There is no runtime configuration surface: the firmware builds its
/// [`crate::Context`] from [`Config::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Logical display width in pixels
    pub display_width: u32,
    /// Logical display height in pixels
    pub display_height: u32,
    /// Side length of the square in pixels
    pub square_size: u32,
    /// Raw sample the stick reports at rest
    pub center: u16,
    /// Samples closer than this to `center` give zero brightness
    pub deadzone: u16,
    /// Largest raw sample the converter produces
    pub sample_max: u16,
    /// PWM level at full deflection, also the PWM wrap value
    pub brightness_max: u8,
    /// Delay at the end of each loop iteration
    pub period_ms: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        display_width: 128,
        display_height: 64,
        square_size: 8,
        center: 2048,
        deadzone: 50,
        sample_max: 4095,
        brightness_max: 255,
        period_ms: 50,
    };

    /// Largest x the square's top left corner may take
    pub const fn max_x(&self) -> i32 {
        self.display_width as i32 - self.square_size as i32
    }

    /// Largest y the square's top left corner may take
    pub const fn max_y(&self) -> i32 {
        self.display_height as i32 - self.square_size as i32
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
