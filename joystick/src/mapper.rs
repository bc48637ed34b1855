//! Turns raw stick samples into LED levels and a square position.
//!
//! Everything here is a pure function of its inputs; calling it twice with
//! the same sample gives the same [`Frame`].

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use crate::{Config, Sample};

/// Top left corner of the square on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Square centred on the display, where it sits before the first sample.
    pub const fn centered(config: &Config) -> Self {
        Position {
            x: (config.display_width / 2) as i32 - (config.square_size / 2) as i32,
            y: (config.display_height / 2) as i32 - (config.square_size / 2) as i32,
        }
    }
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        Point::new(position.x, position.y)
    }
}

/// Everything one loop iteration writes to the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub position: Position,
    /// Driven by the horizontal axis
    pub red: u8,
    /// Driven by the vertical axis
    pub blue: u8,
}

impl Frame {
    /// The filled area to draw for this frame.
    pub fn square(&self, config: &Config) -> Rectangle {
        Rectangle::new(
            self.position.into(),
            Size::new(config.square_size, config.square_size),
        )
    }
}

/// LED level for one axis: distance from center scaled onto
/// `[0, brightness_max]`, zero inside the deadzone.
pub fn brightness(sample: u16, config: &Config) -> u8 {
    let diff = sample.abs_diff(config.center);
    if diff < config.deadzone {
        return 0;
    }
    let max = u32::from(config.brightness_max);
    let level = (u32::from(diff) * max / u32::from(config.center)).min(max);
    level as u8
}

/// Square position for a pair of raw samples.
///
/// The vertical axis is inverted so pushing the stick up (which lowers the
/// raw value) moves the square towards the top of the display. Both
/// coordinates are clamped so the square stays fully on screen even for
/// samples outside the converter's range.
pub fn position(sx: u16, sy: u16, config: &Config) -> Position {
    let full_scale = i32::from(config.sample_max);
    let max_x = config.max_x();
    let max_y = config.max_y();

    let x = i32::from(sx) * max_x / full_scale;
    let y = (full_scale - i32::from(sy)) * max_y / full_scale;

    Position {
        x: x.clamp(0, max_x),
        y: y.clamp(0, max_y),
    }
}

pub fn map(sample: Sample, config: &Config) -> Frame {
    Frame {
        position: position(sample.x, sample.y, config),
        red: brightness(sample.x, config),
        blue: brightness(sample.y, config),
    }
}
