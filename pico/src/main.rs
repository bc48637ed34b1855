#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::Pwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Delay;
use joystick::{Config, Context, Position};
use joystick_pico::{Irqs, Leds, Oled, Stick, board};
use {defmt_rtt as _, panic_probe as _};

/// Never raised on the board; the loop runs until power off.
static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let config = Config::DEFAULT;
    info!("joystick square starting");
    info!(
        "stick x: GPIO{} (ADC0), y: GPIO{} (ADC1)",
        board::JOYSTICK_X_PIN,
        board::JOYSTICK_Y_PIN
    );
    info!(
        "leds red: GPIO{}, blue: GPIO{} (PWM slice {})",
        board::LED_RED_PIN,
        board::LED_BLUE_PIN,
        board::LED_PWM_SLICE
    );
    info!(
        "oled sda: GPIO{}, scl: GPIO{}, address {=u8:#x}",
        board::OLED_SDA_PIN,
        board::OLED_SCL_PIN,
        board::OLED_ADDRESS
    );

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = board::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = match Oled::new(i2c, board::OLED_ADDRESS) {
        Ok(oled) => oled,
        Err(e) => defmt::panic!("display init failed: {}", Debug2Format(&e)),
    };
    debug!("display configured");

    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let stick = Stick::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
    );

    let pwm_config = Leds::config(config.brightness_max.into());
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone());
    let leds = Leds::new(pwm, pwm_config);

    let mut context = Context::new(stick, leds, oled, config);
    if let Err(e) = context.start() {
        defmt::panic!("display clear failed: {}", Debug2Format(&e));
    }
    info!(
        "running, square starts at {} and updates every {} ms",
        Position::centered(&config),
        config.period_ms
    );

    match context.run(&mut Delay, &STOP).await {
        Ok(iterations) => info!("stopped after {} iterations", iterations),
        Err(e) => {
            defmt::panic!("control loop failed: {}", Debug2Format(&e));
        }
    }
}
