//! In-memory stand-ins for the hardware capabilities.

use std::{cell::RefCell, rc::Rc};

use embassy_sync::{blocking_mutex::raw::NoopRawMutex, signal::Signal};
use embedded_graphics::{prelude::Point, primitives::Rectangle};
use embedded_hal_async::delay::DelayNs;

use crate::{AnalogSource, Axis, DisplaySink, DutyOutput, Led};

/// Replays scripted `(x, y)` readings, repeating the last one once the
/// script runs out.
pub struct FakeStick {
    samples: Vec<(u16, u16)>,
    next: usize,
    reads: Vec<Axis>,
    fail_on: Option<Axis>,
}

impl FakeStick {
    pub fn new(samples: &[(u16, u16)]) -> Self {
        assert!(!samples.is_empty());
        FakeStick {
            samples: samples.to_vec(),
            next: 0,
            reads: Vec::new(),
            fail_on: None,
        }
    }

    pub fn failing_on(axis: Axis) -> Self {
        FakeStick {
            fail_on: Some(axis),
            ..FakeStick::new(&[(2048, 2048)])
        }
    }

    pub fn reads(&self) -> &[Axis] {
        &self.reads
    }
}

impl AnalogSource for FakeStick {
    type Error = Axis;

    async fn read_axis(&mut self, axis: Axis) -> Result<u16, Axis> {
        if self.fail_on == Some(axis) {
            return Err(axis);
        }
        self.reads.push(axis);
        let (x, y) = self.samples[self.next.min(self.samples.len() - 1)];
        match axis {
            Axis::Horizontal => Ok(x),
            Axis::Vertical => {
                self.next += 1;
                Ok(y)
            }
        }
    }
}

/// Output call seen by any of the recording sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Duty(Led, u8),
    Display(DisplayOp),
}

/// Log shared between sinks so the order across them can be checked.
pub type OpLog = Rc<RefCell<Vec<Op>>>;

#[derive(Default)]
pub struct RecordingLeds {
    levels: Vec<(Led, u8)>,
    fail_on: Option<Led>,
    log: Option<OpLog>,
}

impl RecordingLeds {
    pub fn failing_on(led: Led) -> Self {
        RecordingLeds {
            fail_on: Some(led),
            ..Default::default()
        }
    }

    pub fn logging_to(log: &OpLog) -> Self {
        RecordingLeds {
            log: Some(log.clone()),
            ..Default::default()
        }
    }

    pub fn levels(&self) -> &[(Led, u8)] {
        &self.levels
    }
}

impl DutyOutput for RecordingLeds {
    type Error = Led;

    fn set_duty(&mut self, led: Led, level: u8) -> Result<(), Led> {
        if self.fail_on == Some(led) {
            return Err(led);
        }
        self.levels.push((led, level));
        if let Some(log) = &self.log {
            log.borrow_mut().push(Op::Duty(led, level));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
    Clear,
    FillRect(Rectangle),
    Flush,
}

#[derive(Default)]
pub struct RecordingDisplay<'a> {
    ops: Vec<DisplayOp>,
    flushes: usize,
    stop_after: Option<(usize, &'a Signal<NoopRawMutex, ()>)>,
    fail_after: Option<usize>,
    log: Option<OpLog>,
}

impl<'a> RecordingDisplay<'a> {
    /// Raises `stop` once `flushes` frames have been flushed.
    pub fn stopping_after(flushes: usize, stop: &'a Signal<NoopRawMutex, ()>) -> Self {
        RecordingDisplay {
            stop_after: Some((flushes, stop)),
            ..Default::default()
        }
    }

    /// Fails every flush after the first `flushes`.
    pub fn failing_flush_after(flushes: usize) -> Self {
        RecordingDisplay {
            fail_after: Some(flushes),
            ..Default::default()
        }
    }

    pub fn logging_to(log: &OpLog) -> Self {
        RecordingDisplay {
            log: Some(log.clone()),
            ..Default::default()
        }
    }

    fn record(&mut self, op: DisplayOp) {
        self.ops.push(op);
        if let Some(log) = &self.log {
            log.borrow_mut().push(Op::Display(op));
        }
    }

    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn squares(&self) -> Vec<Point> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DisplayOp::FillRect(area) => Some(area.top_left),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySink for RecordingDisplay<'_> {
    type Error = DisplayOp;

    fn clear(&mut self) -> Result<(), DisplayOp> {
        self.record(DisplayOp::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, area: Rectangle) -> Result<(), DisplayOp> {
        self.record(DisplayOp::FillRect(area));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayOp> {
        if self.fail_after.is_some_and(|n| self.flushes >= n) {
            return Err(DisplayOp::Flush);
        }
        self.record(DisplayOp::Flush);
        self.flushes += 1;
        if let Some((n, stop)) = self.stop_after {
            if self.flushes >= n {
                stop.signal(());
            }
        }
        Ok(())
    }
}

/// Records requested sleeps without waiting.
#[derive(Default)]
pub struct CountingDelay {
    sleeps_ms: Vec<u32>,
}

impl CountingDelay {
    pub fn sleeps_ms(&self) -> &[u32] {
        &self.sleeps_ms
    }
}

impl DelayNs for CountingDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.sleeps_ms.push(ms);
    }
}
