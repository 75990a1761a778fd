use crate::console::Console;
use crate::util;
use std::process::ExitCode;

/// Handles `spinlog clear`.
#[must_use]
pub fn cmd_clear(console: &Console) -> ExitCode {
    util::clear_terminal(console);
    ExitCode::SUCCESS
}
