//! The serialized formatter-writer.
//!
//! A `Console` owns one output lock and one sink. Every emit takes the lock, renders
//! prefix and message, writes the result with a single sink call and releases the
//! lock, so concurrent messages never interleave on a stream. Formatting work happens
//! inside the lock too: a caller rendering a long message holds up everyone else.
//!
//! Nothing here reports failure to the caller. Faults end the call quietly and show
//! up only in [`Console::stats`].

mod builder;
mod from_config;
mod stats;

pub use builder::ConsoleBuilder;
pub use stats::Stats;

use crate::lock::OutputLock;
use crate::output::Sink;
use crate::render::{self, Outcome, RENDER_CAPACITY};
use crate::severity::{Severity, Stream};
use stats::Counters;
use std::fmt;

pub struct Console {
    lock: OutputLock,
    sink: Box<dyn Sink>,
    /// Resolved once from the color mode: `[stdout, stderr]`.
    colors: [bool; 2],
    counters: Counters,
    /// Heap buffer source for messages that overflow the stack buffer.
    alloc: fn(usize) -> Option<Vec<u8>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("lock", &self.lock)
            .field("colors", &self.colors)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl Console {
    /// Standard streams, colors always on, default spin interval.
    #[must_use]
    pub fn new() -> Self {
        ConsoleBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    /// Writes one message of `severity`. `None` returns immediately without touching
    /// the lock.
    ///
    /// # Panics
    /// In builds with debug assertions, when called from a thread that is already
    /// inside an emit on this console (for example from a `Display` impl that logs).
    pub fn emit(&self, severity: Severity, args: Option<fmt::Arguments<'_>>) {
        self.emit_outcome(severity, args);
    }

    /// Like [`Console::emit`], but reports what happened to this call. `None` when the
    /// call returned before taking the lock.
    pub(crate) fn emit_outcome(
        &self,
        severity: Severity,
        args: Option<fmt::Arguments<'_>>,
    ) -> Option<Outcome> {
        if !severity.is_enabled() {
            return None;
        }
        let args = args?;

        let descriptor = severity.descriptor();
        let prefix = descriptor.prefix(self.colors_enabled(descriptor.stream));

        let _guard = self.lock.acquire();
        let outcome = render::render_and_write::<RENDER_CAPACITY>(
            descriptor,
            prefix,
            args,
            |stream, bytes| self.write(stream, bytes),
            self.alloc,
        );
        self.counters.record(outcome);
        Some(outcome)
    }

    /// Preformatted text, for callers without format arguments (FFI, JSON input).
    pub fn emit_str(&self, severity: Severity, msg: Option<&str>) {
        if let Some(msg) = msg {
            self.emit(severity, Some(format_args!("{msg}")));
        }
    }

    /// Stdout, no prefix, no newline.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Some(args));
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, Some(args));
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, Some(args));
    }

    pub fn log(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Log, Some(args));
    }

    #[cfg(feature = "debug")]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, Some(args));
    }

    /// Compiled without the `debug` feature: does nothing.
    #[cfg(not(feature = "debug"))]
    #[inline]
    pub fn debug(&self, _args: fmt::Arguments<'_>) {}

    #[must_use]
    pub const fn lock(&self) -> &OutputLock {
        &self.lock
    }

    #[must_use]
    pub const fn colors_enabled(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => self.colors[0],
            Stream::Stderr => self.colors[1],
        }
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.counters.snapshot()
    }

    /// Write errors are counted, not returned: logging is best-effort.
    fn write(&self, stream: Stream, bytes: &[u8]) {
        if self.sink.write(stream, bytes).is_err() {
            self.counters.write_failed();
        }
    }
}
