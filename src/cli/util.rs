//! Utility functions for the CLI.

use crate::config::{ColorMode, Config};
use crate::console::Console;

/// Interprets `\n`, `\t`, `\\`, `\e` and `\"`. Any other backslash sequence is kept
/// as written.
#[must_use]
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('e') => out.push('\x1b'),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Splits a shell line into words. Double quotes group words; backslashes inside
/// quotes are left for `unescape`.
#[must_use]
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            '\\' if quoted => {
                current.push('\\');
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }

    words
}

/// Builds the CLI's console: app overrides first, then an explicit color mode.
#[must_use]
pub fn build_console(config: &Config, app: Option<&str>, color: Option<ColorMode>) -> Console {
    let config = app.map_or_else(|| config.clone(), |name| config.for_app(name));
    let mut builder = Console::builder().config(&config);
    if let Some(mode) = color {
        builder = builder.colors(mode);
    }
    builder.build()
}
