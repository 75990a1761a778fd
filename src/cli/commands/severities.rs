//! `spinlog severities`: every descriptor rendered through the live console, so the
//! preview reflects the resolved color mode.

use crate::console::Console;
use crate::severity::Severity;
use std::process::ExitCode;

/// Handles `spinlog severities`.
#[must_use]
pub fn cmd_severities(console: &Console) -> ExitCode {
    for severity in Severity::all() {
        let descriptor = severity.descriptor();
        if !severity.is_enabled() {
            console.info(format_args!("{severity:<6} (compiled out)\n"));
            continue;
        }
        match severity {
            Severity::Info => console.info(format_args!("{severity:<6} plain text on stdout\n")),
            _ => console.emit(
                severity,
                Some(format_args!(
                    "{severity} on {} (color {})",
                    descriptor.stream,
                    descriptor.color.map_or_else(|| "none".to_string(), |c| c.index().to_string())
                )),
            ),
        }
    }
    ExitCode::SUCCESS
}
