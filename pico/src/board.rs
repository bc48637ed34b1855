//! Wiring of the joystick board. Only used for logging and for the values
//! handed to the drivers; the pins themselves are picked in `main`.

pub const JOYSTICK_X_PIN: u8 = 26;
pub const JOYSTICK_Y_PIN: u8 = 27;

pub const LED_RED_PIN: u8 = 12;
pub const LED_BLUE_PIN: u8 = 13;
/// GPIO12 and GPIO13 are channels A and B of this slice
pub const LED_PWM_SLICE: u8 = 6;

pub const OLED_SDA_PIN: u8 = 14;
pub const OLED_SCL_PIN: u8 = 15;
pub const OLED_ADDRESS: u8 = 0x3C;
pub const I2C_FREQUENCY_HZ: u32 = 400_000;
