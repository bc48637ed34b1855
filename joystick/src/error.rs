/// Failure of one of the three hardware capabilities used by the control loop.
///
/// Generic over the error types of the [`crate::AnalogSource`],
/// [`crate::DutyOutput`] and [`crate::DisplaySink`] in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<A, P, D> {
    /// Reading an analog channel failed
    Sample(A),
    /// Setting a PWM level failed
    Duty(P),
    /// Clearing, drawing or flushing the display failed
    Display(D),
}

impl<A, P, D> core::fmt::Display for Error<A, P, D>
where
    A: core::fmt::Debug,
    P: core::fmt::Debug,
    D: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Sample(e) => write!(f, "analog read failed: {e:?}"),
            Error::Duty(e) => write!(f, "pwm update failed: {e:?}"),
            Error::Display(e) => write!(f, "display update failed: {e:?}"),
        }
    }
}

impl<A, P, D> core::error::Error for Error<A, P, D>
where
    A: core::fmt::Debug,
    P: core::fmt::Debug,
    D: core::fmt::Debug,
{
}
