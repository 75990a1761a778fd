//! spinlog interactive shell.

use crate::cli::{cmd_clear, cmd_severities, emit_template, util::split_words};
use crate::console::Console;
use crate::fmt::{Color256, colorize};
use crate::internal;
use crate::severity::{Severity, Stream};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::path::PathBuf;

/// Runs the interactive shell against `console`.
///
/// # Errors
/// Returns error message if the line editor cannot be initialized.
pub fn run(console: &Console) -> Result<(), String> {
    internal::debug(format_args!("initializing shell"));
    let prompt = if console.colors_enabled(Stream::Stdout) {
        colorize("spinlog> ", Color256::GREEN)
    } else {
        "spinlog> ".to_string()
    };

    let mut rl: Editor<(), DefaultHistory> =
        DefaultEditor::new().map_err(|e| format!("Error creating editor: {e}"))?;

    let history_path = get_history_path();
    if let Some(path) = &history_path
        && rl.load_history(path).is_ok()
    {
        internal::debug(format_args!("history loaded from {}", path.display()));
    }

    console.info(format_args!(
        "spinlog shell - type 'help' for commands, 'quit' to exit\n"
    ));

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if !handle_command(line, console) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                internal::error(format_args!("readline error: {e}"));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if rl.save_history(path).is_err() {
            internal::warn(format_args!("could not save history"));
        }
    }

    Ok(())
}

/// Returns `false` when the shell should exit.
fn handle_command(line: &str, console: &Console) -> bool {
    let words = split_words(line);
    let Some((command, rest)) = words.split_first() else {
        return true;
    };

    match command.as_str() {
        "quit" | "exit" | "q" => return false,
        "help" | "?" => print_help(console),
        "clear" => {
            let _ = cmd_clear(console);
        }
        "severities" => {
            let _ = cmd_severities(console);
        }
        "stats" => {
            let stats = console.stats();
            console.info(format_args!(
                "messages={} heap_renders={} format_faults={} oom_fallbacks={} write_failures={}\n",
                stats.messages,
                stats.heap_renders,
                stats.format_faults,
                stats.oom_fallbacks,
                stats.write_failures
            ));
        }
        name => match name.parse::<Severity>() {
            Ok(severity) => cmd_emit(console, severity, rest),
            Err(e) => {
                internal::error(format_args!("{e}"));
                console.info(format_args!("Type 'help' for available commands\n"));
            }
        },
    }
    true
}

fn cmd_emit(console: &Console, severity: Severity, words: &[String]) {
    let Some((template, args)) = words.split_first() else {
        internal::warn(format_args!("usage: {severity} <template> [args...]"));
        return;
    };
    if !severity.is_enabled() {
        internal::warn(format_args!("{severity} is compiled out of this build"));
        return;
    }
    if let Err(e) = emit_template(console, severity, template, args) {
        internal::error(format_args!("{e}"));
    }
}

fn print_help(console: &Console) {
    console.info(format_args!(
        "Commands:
  <severity> <template> [args...]   Emit a printf-style message
  severities                        Preview every severity
  stats                             Show this console's counters
  clear                             Clear the terminal
  help, ?                           Show this help
  quit, exit, q                     Exit shell

Severities: info, warn, error, log, debug
Quote templates containing spaces: warn \"disk %s at %d%%\" /dev/sda1 93
"
    ));
}

fn get_history_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "spinlog")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}
