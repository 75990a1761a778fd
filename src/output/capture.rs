//! In-memory sink for tests and for embedding the console where the standard streams
//! are not the destination.

use super::Sink;
use crate::severity::Stream;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct Captured {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    writes: usize,
}

/// Cloning shares the buffers, so a test can hand one clone to a console and read
/// through another.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    inner: Arc<Mutex<Captured>>,
    terminal: bool,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend both streams are terminals, for exercising `ColorMode::Auto`.
    #[must_use]
    pub const fn as_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    #[must_use]
    pub fn stdout(&self) -> Vec<u8> {
        self.lock().stdout.clone()
    }

    #[must_use]
    pub fn stderr(&self) -> Vec<u8> {
        self.lock().stderr.clone()
    }

    /// Lossy UTF-8 view of one stream.
    #[must_use]
    pub fn text(&self, stream: Stream) -> String {
        let captured = self.lock();
        let bytes = match stream {
            Stream::Stdout => &captured.stdout,
            Stream::Stderr => &captured.stderr,
        };
        String::from_utf8_lossy(bytes).into_owned()
    }

    /// Number of `write` calls received, across both streams.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    pub fn clear(&self) {
        let mut captured = self.lock();
        captured.stdout.clear();
        captured.stderr.clear();
        captured.writes = 0;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Captured> {
        // A panicking test thread must not hide what was captured before it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for CaptureSink {
    fn write(&self, stream: Stream, bytes: &[u8]) -> io::Result<()> {
        let mut captured = self.lock();
        captured.writes += 1;
        match stream {
            Stream::Stdout => captured.stdout.extend_from_slice(bytes),
            Stream::Stderr => captured.stderr.extend_from_slice(bytes),
        }
        Ok(())
    }

    fn is_terminal(&self, _stream: Stream) -> bool {
        self.terminal
    }
}
