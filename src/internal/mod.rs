//! spinlog's own diagnostics (config includes that are missing or cyclic, CLI input
//! errors), written through the process-wide console.
//!
//! Calls made before the process-wide console exists vanish: config loading runs
//! before the console is built from it.

use crate::global;
use std::fmt;

pub fn warn(args: fmt::Arguments<'_>) {
    if let Some(console) = global::get() {
        console.warn(args);
    }
}

pub fn error(args: fmt::Arguments<'_>) {
    if let Some(console) = global::get() {
        console.error(args);
    }
}

/// Only with the `debug` feature.
pub fn debug(args: fmt::Arguments<'_>) {
    if let Some(console) = global::get() {
        console.debug(args);
    }
}
