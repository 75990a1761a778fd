//! C-ABI bindings so C and C++ programs can write through the same process-wide console
//! (and therefore the same output lock) as the Rust side.
//!
//! Messages arrive preformatted; format on the C side with `snprintf` first.

#![allow(unsafe_code)]

use std::ffi::{CStr, c_char, c_int};
use std::path::Path;

use crate::config::Config;
use crate::global;
use crate::internal;
use crate::severity::Severity;
use crate::util;

/// Initialization succeeded.
pub const SPINLOG_OK: c_int = 0;
/// The process-wide console already existed; the call changed nothing.
pub const SPINLOG_ALREADY_INIT: c_int = 1;
/// The config file could not be read or parsed.
pub const SPINLOG_ERR_CONFIG: c_int = -1;
/// The path was not valid UTF-8.
pub const SPINLOG_ERR_UTF8: c_int = -2;

/// Emits `msg` with `severity`. `NULL` is a no-op.
///
/// # Safety
/// `msg` must be `NULL` or a valid null-terminated string.
unsafe fn emit(severity: Severity, msg: *const c_char) {
    if msg.is_null() || !severity.is_enabled() {
        return;
    }
    // SAFETY: msg is non-null and the caller guarantees null termination
    let text = unsafe { CStr::from_ptr(msg) }.to_string_lossy();
    global::console().emit_str(severity, Some(&text));
}

// ============================================================================
// Initialization
// ============================================================================

/// Initializes the process-wide console from the default config file. Missing or
/// broken config falls back to defaults.
#[unsafe(no_mangle)]
pub extern "C" fn spinlog_init() -> c_int {
    if global::get().is_some() {
        return SPINLOG_ALREADY_INIT;
    }
    global::init();
    internal::debug(format_args!("FFI: console initialized"));
    SPINLOG_OK
}

/// Initializes the process-wide console from `config_path`, or from the default
/// location when it is `NULL`.
///
/// # Safety
/// `config_path` must be `NULL` or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spinlog_init_with_config(config_path: *const c_char) -> c_int {
    if config_path.is_null() {
        return spinlog_init();
    }
    if global::get().is_some() {
        return SPINLOG_ALREADY_INIT;
    }

    // SAFETY: config_path is non-null and the caller guarantees null termination
    let Ok(path) = unsafe { CStr::from_ptr(config_path) }.to_str() else {
        return SPINLOG_ERR_UTF8;
    };
    let Ok(config) = Config::load_from(Path::new(path)) else {
        return SPINLOG_ERR_CONFIG;
    };

    global::init_with_config(&config);
    internal::debug(format_args!("FFI: console initialized from {path}"));
    SPINLOG_OK
}

// ============================================================================
// Emitting
// ============================================================================

/// Plain text to stdout, no prefix, no newline.
///
/// # Safety
/// `msg` must be `NULL` or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spinlog_info(msg: *const c_char) {
    // SAFETY: forwarded caller contract
    unsafe { emit(Severity::Info, msg) }
}

/// # Safety
/// `msg` must be `NULL` or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spinlog_warn(msg: *const c_char) {
    // SAFETY: forwarded caller contract
    unsafe { emit(Severity::Warn, msg) }
}

/// # Safety
/// `msg` must be `NULL` or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spinlog_error(msg: *const c_char) {
    // SAFETY: forwarded caller contract
    unsafe { emit(Severity::Error, msg) }
}

/// # Safety
/// `msg` must be `NULL` or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spinlog_log(msg: *const c_char) {
    // SAFETY: forwarded caller contract
    unsafe { emit(Severity::Log, msg) }
}

/// Does nothing unless the library was built with the `debug` feature.
///
/// # Safety
/// `msg` must be `NULL` or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spinlog_debug(msg: *const c_char) {
    // SAFETY: forwarded caller contract
    unsafe { emit(Severity::Debug, msg) }
}

/// Clears the terminal through the process-wide console.
#[unsafe(no_mangle)]
pub extern "C" fn spinlog_clear_term() {
    util::clear_terminal(global::console());
}
