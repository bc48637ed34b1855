use embassy_rp::adc::{self, Adc, Async, Channel};
use joystick::{AnalogSource, Axis};

/// Both stick axes on the RP2040's single converter.
///
/// The converter has one input mux; `Adc::read` points it at the channel
/// before every conversion, so reads of the two axes can be interleaved
/// freely.
pub struct Stick<'d> {
    adc: Adc<'d, Async>,
    horizontal: Channel<'d>,
    vertical: Channel<'d>,
}

impl<'d> Stick<'d> {
    pub fn new(adc: Adc<'d, Async>, horizontal: Channel<'d>, vertical: Channel<'d>) -> Self {
        Stick {
            adc,
            horizontal,
            vertical,
        }
    }
}

impl AnalogSource for Stick<'_> {
    type Error = adc::Error;

    async fn read_axis(&mut self, axis: Axis) -> Result<u16, adc::Error> {
        let channel = match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        };
        self.adc.read(channel).await
    }
}
