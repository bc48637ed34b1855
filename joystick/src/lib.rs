//! Board independent half of the joystick demo: sampling, the sample to
//! output mapping, and the control loop that drives the output sinks.
#![cfg_attr(not(test), no_std)]

mod config;
mod control;
mod error;
pub mod mapper;
pub mod sampler;
pub mod sink;

#[cfg(test)]
mod fakes;

pub use config::Config;
pub use control::{Context, ContextError};
pub use error::Error;
pub use mapper::{Frame, Position};
pub use sampler::{AnalogSource, Axis, Sample};
pub use sink::{DisplaySink, DutyOutput, Led};
