//! The process-wide console behind the crate-root macros.
//!
//! It is an ordinary `Console` in a `OnceLock`: set up once, never torn down. Code that
//! wants an isolated lock (tests, embedders) builds its own `Console` instead.

use crate::config::Config;
use crate::console::Console;
use std::sync::OnceLock;

static CONSOLE: OnceLock<Console> = OnceLock::new();

/// The process-wide console. Falls back to `Console::new()` when nothing was
/// initialized first.
pub fn console() -> &'static Console {
    CONSOLE.get_or_init(Console::new)
}

/// `None` until something initializes the process-wide console.
#[must_use]
pub fn get() -> Option<&'static Console> {
    CONSOLE.get()
}

/// Initializes from the default config file. Only the first initialization takes effect.
pub fn init() -> &'static Console {
    CONSOLE.get_or_init(Console::from_default_config)
}

/// Initializes from an already-loaded config. Only the first initialization takes effect.
pub fn init_with_config(config: &Config) -> &'static Console {
    CONSOLE.get_or_init(|| Console::from_config(config))
}

/// Installs a fully built console.
///
/// # Errors
/// Hands `console` back when the process-wide console already exists.
pub fn install(console: Console) -> Result<&'static Console, Console> {
    CONSOLE.set(console)?;
    Ok(self::console())
}
