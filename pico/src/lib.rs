#![no_std]

pub mod board;
mod leds;
mod oled;
mod stick;

use embassy_rp::{adc, bind_interrupts};

pub use leds::Leds;
pub use oled::{Oled, OledError};
pub use stick::Stick;

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});
