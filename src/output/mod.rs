//! Where rendered bytes go. The console owns one `Sink` and calls it once per message
//! while holding the output lock.

mod capture;
mod terminal;

pub use capture::CaptureSink;
pub use terminal::StdSink;

use crate::severity::Stream;
use std::io;

/// `Send + Sync` so a console holding one can be shared across threads.
pub trait Sink: Send + Sync {
    /// Writes `bytes` to `stream` in full. Called with the output lock held, exactly
    /// once per rendered message.
    ///
    /// # Errors
    /// I/O errors from the underlying stream. The console counts and discards them.
    fn write(&self, stream: Stream, bytes: &[u8]) -> io::Result<()>;

    /// Consulted once, at console construction, for `ColorMode::Auto`.
    fn is_terminal(&self, _stream: Stream) -> bool {
        false
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn write(&self, stream: Stream, bytes: &[u8]) -> io::Result<()> {
        (**self).write(stream, bytes)
    }

    fn is_terminal(&self, stream: Stream) -> bool {
        (**self).is_terminal(stream)
    }
}
