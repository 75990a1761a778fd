//! Stepwise construction of a `Console`.

use super::Console;
use super::stats::Counters;
use crate::config::ColorMode;
use crate::lock::{DEFAULT_SPIN_INTERVAL, OutputLock};
use crate::output::{Sink, StdSink};
use crate::render;
use crate::severity::Stream;
use std::time::Duration;

pub struct ConsoleBuilder {
    colors: ColorMode,
    spin_interval: Duration,
    sink: Option<Box<dyn Sink>>,
    alloc: fn(usize) -> Option<Vec<u8>>,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBuilder {
    /// Colors on, 10 µs spin interval, standard streams.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: ColorMode::Always,
            spin_interval: DEFAULT_SPIN_INTERVAL,
            sink: None,
            alloc: render::try_alloc,
        }
    }

    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.colors = mode;
        self
    }

    /// How long a waiting caller sleeps between acquire attempts.
    #[must_use]
    pub const fn spin_interval(mut self, interval: Duration) -> Self {
        self.spin_interval = interval;
        self
    }

    /// Replaces the standard streams.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replaces the allocator behind the heap path. It receives the exact byte count
    /// and returns an empty buffer with at least that capacity, or `None` to make the
    /// console write the severity's out-of-memory notice instead.
    #[must_use]
    pub const fn heap_alloc(mut self, alloc: fn(usize) -> Option<Vec<u8>>) -> Self {
        self.alloc = alloc;
        self
    }

    #[must_use]
    pub fn build(self) -> Console {
        let sink = self.sink.unwrap_or_else(|| Box::new(StdSink));
        let resolve = |stream| match self.colors {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => sink.is_terminal(stream),
        };
        let colors = [resolve(Stream::Stdout), resolve(Stream::Stderr)];

        Console {
            lock: OutputLock::with_spin_interval(self.spin_interval),
            sink,
            colors,
            counters: Counters::default(),
            alloc: self.alloc,
        }
    }
}
