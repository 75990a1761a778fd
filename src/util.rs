//! Small terminal and filesystem helpers that sit next to the console.

use crate::console::Console;
use crate::render::RENDER_CAPACITY;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Cursor home, then erase the screen.
pub const CLEAR_SEQUENCE: &str = "\x1b[1;1H\x1b[2J";

/// Clears the terminal through the console's plain path, so it cannot land in the
/// middle of another thread's message.
pub fn clear_terminal(console: &Console) {
    console.info(format_args!("{CLEAR_SEQUENCE}"));
}

#[must_use]
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// True for regular files only (after following symlinks).
#[must_use]
pub fn is_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}

/// The working directory, or `None` when it cannot be read or is longer than the
/// render buffer.
#[must_use]
pub fn current_dir() -> Option<PathBuf> {
    let dir = env::current_dir().ok()?;
    (dir.as_os_str().len() < RENDER_CAPACITY).then_some(dir)
}
