use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embedded_hal_async::delay::DelayNs;

use crate::{AnalogSource, Config, DisplaySink, DutyOutput, Error, Frame, Led, mapper, sampler};

/// Error type of a [`Context`] built from `A`, `P` and `D`.
pub type ContextError<A, P, D> = Error<
    <A as AnalogSource>::Error,
    <P as DutyOutput>::Error,
    <D as DisplaySink>::Error,
>;

/// Owns every hardware handle the demo uses for the lifetime of the program.
pub struct Context<A, P, D> {
    stick: A,
    leds: P,
    display: D,
    config: Config,
}

impl<A, P, D> Context<A, P, D>
where
    A: AnalogSource,
    P: DutyOutput,
    D: DisplaySink,
{
    pub fn new(stick: A, leds: P, display: D, config: Config) -> Self {
        Context {
            stick,
            leds,
            display,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Blanks the panel before the first frame.
    pub fn start(&mut self) -> Result<(), ContextError<A, P, D>> {
        self.display.clear().map_err(Error::Display)?;
        self.display.flush().map_err(Error::Display)
    }

    /// Samples the stick once and writes the resulting frame to the LEDs and
    /// the display.
    pub async fn step(&mut self) -> Result<Frame, ContextError<A, P, D>> {
        let sample = sampler::sample(&mut self.stick)
            .await
            .map_err(Error::Sample)?;
        let frame = mapper::map(sample, &self.config);

        self.leds
            .set_duty(Led::Red, frame.red)
            .map_err(Error::Duty)?;
        self.leds
            .set_duty(Led::Blue, frame.blue)
            .map_err(Error::Duty)?;

        self.display.clear().map_err(Error::Display)?;
        self.display
            .fill_rect(frame.square(&self.config))
            .map_err(Error::Display)?;
        self.display.flush().map_err(Error::Display)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("{} -> {}", sample, frame);

        Ok(frame)
    }

    /// Runs [`Context::step`] every `period_ms` until `stop` is signaled.
    ///
    /// Returns the number of completed iterations. The signal is checked
    /// before each iteration, so a stop raised during the delay ends the
    /// loop without another step.
    pub async fn run<M: RawMutex, T: DelayNs>(
        &mut self,
        delay: &mut T,
        stop: &Signal<M, ()>,
    ) -> Result<u32, ContextError<A, P, D>> {
        let mut iterations: u32 = 0;
        while !stop.signaled() {
            self.step().await?;
            iterations = iterations.wrapping_add(1);
            delay.delay_ms(self.config.period_ms).await;
        }
        Ok(iterations)
    }

    /// Runs exactly `iterations` steps.
    pub async fn run_for<T: DelayNs>(
        &mut self,
        delay: &mut T,
        iterations: u32,
    ) -> Result<(), ContextError<A, P, D>> {
        for _ in 0..iterations {
            self.step().await?;
            delay.delay_ms(self.config.period_ms).await;
        }
        Ok(())
    }

    pub fn release(self) -> (A, P, D) {
        (self.stick, self.leds, self.display)
    }
}
