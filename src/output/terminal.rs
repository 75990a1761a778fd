//! The process's real stdout and stderr.

use super::Sink;
use crate::severity::Stream;
use std::io::{self, IsTerminal, Write};

/// Writes straight to the standard streams.
///
/// `write_all` finishes short writes and retries `EINTR`, so a message reaches the
/// stream whole or the call reports an error. Stdout is flushed after every message
/// since plain output carries no newline to trigger the line buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSink;

impl Sink for StdSink {
    fn write(&self, stream: Stream, bytes: &[u8]) -> io::Result<()> {
        match stream {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Stream::Stderr => io::stderr().lock().write_all(bytes),
        }
    }

    fn is_terminal(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => io::stdout().is_terminal(),
            Stream::Stderr => io::stderr().is_terminal(),
        }
    }
}
