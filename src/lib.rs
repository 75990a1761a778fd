// Forbid unsafe code except when the C ABI is compiled in
#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]

//! `spinlog` - serialized, colorized console logging.
//!
//! Every message goes out as one write while a process-wide spin-then-sleep lock is
//! held, so lines from concurrent threads never interleave. Messages are rendered into
//! a stack buffer and only fall back to the heap when they don't fit.
//!
//! # Example
//!
//! ```
//! use spinlog::{CaptureSink, ColorMode, Console};
//!
//! let sink = CaptureSink::new();
//! let console = Console::builder()
//!     .colors(ColorMode::Never)
//!     .sink(sink.clone())
//!     .build();
//!
//! spinlog::error!(console: &console, "disk {} is full", "/dev/sda1");
//! spinlog::info!(console: &console, "plain {}", "text");
//!
//! assert_eq!(sink.text(spinlog::Stream::Stderr), "[error]: disk /dev/sda1 is full\n");
//! assert_eq!(sink.text(spinlog::Stream::Stdout), "plain text");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `spinlog` binary and its interactive shell
//! - `ffi`: C-ABI bindings
//! - `debug`: enables the debug severity; without it debug calls compile to nothing

// Core modules (always available)
pub mod config;
pub mod console;
pub mod error;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod lock;
mod macros;
pub mod output;
pub mod render;
pub mod severity;
pub mod util;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Shell module (feature-gated)
#[cfg(feature = "cli")]
pub mod shell;

// FFI module (feature-gated)
#[cfg(feature = "ffi")]
pub mod ffi;

/// Whether this build carries the debug severity.
pub const DEBUG_ENABLED: bool = cfg!(feature = "debug");

// Re-exports for convenience
pub use config::{ColorMode, Config};
pub use console::{Console, ConsoleBuilder, Stats};
pub use error::Error;
pub use fmt::{Arg, Color256, PrintfTemplate};
pub use lock::{OutputGuard, OutputLock};
pub use output::{CaptureSink, Sink, StdSink};
pub use render::RENDER_CAPACITY;
pub use severity::{Descriptor, Severity, Stream};

// FFI re-exports
#[cfg(feature = "ffi")]
pub use ffi::{
    SPINLOG_ALREADY_INIT, SPINLOG_ERR_CONFIG, SPINLOG_ERR_UTF8, SPINLOG_OK, spinlog_clear_term,
    spinlog_debug, spinlog_error, spinlog_info, spinlog_init,
    spinlog_init_with_config, spinlog_log, spinlog_warn,
};
