//! Crate-root logging macros. Each takes `format!` syntax and writes to the
//! process-wide console, or to an explicit one given as `console: <expr>,`.
//!
//! ```
//! use spinlog::{Console, CaptureSink, ColorMode};
//!
//! let sink = CaptureSink::new();
//! let console = Console::builder().colors(ColorMode::Never).sink(sink.clone()).build();
//!
//! spinlog::warn!(console: &console, "count={}", 42);
//! assert_eq!(sink.stderr(), b"[warning]: count=42\n");
//! ```

/// Plain text to stdout: no prefix, no newline.
#[macro_export]
macro_rules! info {
    (console: $console:expr, $($arg:tt)+) => {
        $console.info(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::console().info(::core::format_args!($($arg)+))
    };
}

/// `[warning]: ` prefixed line on stderr.
#[macro_export]
macro_rules! warn {
    (console: $console:expr, $($arg:tt)+) => {
        $console.warn(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::console().warn(::core::format_args!($($arg)+))
    };
}

/// `[error]: ` prefixed line on stderr.
#[macro_export]
macro_rules! error {
    (console: $console:expr, $($arg:tt)+) => {
        $console.error(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::console().error(::core::format_args!($($arg)+))
    };
}

/// `[log]: ` prefixed line on stderr.
#[macro_export]
macro_rules! log {
    (console: $console:expr, $($arg:tt)+) => {
        $console.log(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::console().log(::core::format_args!($($arg)+))
    };
}

/// `[debug]: ` prefixed line on stderr, only when spinlog is built with the `debug`
/// feature. Otherwise the arguments are never evaluated.
#[macro_export]
macro_rules! debug {
    (console: $console:expr, $($arg:tt)+) => {
        if $crate::DEBUG_ENABLED {
            $console.debug(::core::format_args!($($arg)+))
        }
    };
    ($($arg:tt)+) => {
        if $crate::DEBUG_ENABLED {
            $crate::global::console().debug(::core::format_args!($($arg)+))
        }
    };
}
