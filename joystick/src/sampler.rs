/// One of the two stick axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// ADC channel 0
    Horizontal,
    /// ADC channel 1
    Vertical,
}

impl Axis {
    /// Converter input the axis is wired to.
    pub const fn channel(self) -> u8 {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

/// Raw readings of both axes taken in the same loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub x: u16,
    pub y: u16,
}

/// A single channel converter that can be pointed at either stick axis.
///
/// Every call selects `axis` on the converter before converting, so the
/// returned value always belongs to the requested channel. Nothing is
/// filtered or averaged.
#[allow(async_fn_in_trait)]
pub trait AnalogSource {
    type Error;

    async fn read_axis(&mut self, axis: Axis) -> Result<u16, Self::Error>;
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    type Error = T::Error;

    async fn read_axis(&mut self, axis: Axis) -> Result<u16, Self::Error> {
        T::read_axis(self, axis).await
    }
}

/// Reads the horizontal axis, then the vertical one.
pub async fn sample<S: AnalogSource>(source: &mut S) -> Result<Sample, S::Error> {
    let x = source.read_axis(Axis::Horizontal).await?;
    let y = source.read_axis(Axis::Vertical).await?;
    Ok(Sample { x, y })
}
