//! JSON emit command implementation.

use crate::console::Console;
use crate::internal;
use crate::severity::Severity;
use serde::Deserialize;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// One input line. `msg` is written as given, without template expansion.
#[derive(Debug, Deserialize)]
struct JsonEntry {
    #[serde(default)]
    severity: Option<String>,
    msg: String,
}

fn process_line(line: &str, console: &Console) -> Result<(), String> {
    let entry: JsonEntry = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"))?;
    let severity = match entry.severity.as_deref() {
        Some(name) => name.parse::<Severity>().map_err(|e| e.to_string())?,
        None => Severity::default(),
    };
    console.emit_str(severity, Some(&entry.msg));
    Ok(())
}

/// Handles `spinlog json [<json>]`.
#[must_use]
pub fn cmd_json(input: Option<&str>, console: &Console) -> ExitCode {
    match input {
        None | Some("-") => {
            internal::debug(format_args!("reading JSON from stdin"));
            let mut processed = 0u64;
            let mut failed = 0u64;
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(l) if !l.trim().is_empty() => {
                        if let Err(e) = process_line(&l, console) {
                            internal::error(format_args!("{e}"));
                            failed += 1;
                        } else {
                            processed += 1;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        internal::error(format_args!("error reading stdin: {e}"));
                        return ExitCode::FAILURE;
                    }
                }
            }
            internal::debug(format_args!(
                "JSON: processed {processed} entries, {failed} failed"
            ));
            if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Some(json) => match process_line(json, console) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                internal::error(format_args!("{e}"));
                ExitCode::FAILURE
            }
        },
    }
}
