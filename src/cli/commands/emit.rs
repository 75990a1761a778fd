//! `spinlog <severity> TEMPLATE [ARGS...]`: the one-shot form scripts use.

use crate::cli::util::unescape;
use crate::console::Console;
use crate::error::Error;
use crate::fmt::PrintfTemplate;
use crate::internal;
use crate::render::Outcome;
use crate::severity::Severity;
use std::process::ExitCode;

/// Parses `template`, coerces `words` per directive and emits the result.
///
/// # Errors
/// `Error::Template` for a malformed template, mismatched operands, or a render that
/// the console dropped as a formatting fault.
pub fn emit_template<S: AsRef<str>>(
    console: &Console,
    severity: Severity,
    template: &str,
    words: &[S],
) -> Result<(), Error> {
    let template = PrintfTemplate::parse(&unescape(template))?;
    let args = template.coerce(words)?;

    let outcome = console.emit_outcome(severity, Some(format_args!("{}", template.bind(&args))));
    if let Some(Outcome::Fault(_)) = outcome {
        return Err(Error::Template(format!(
            "could not render '{}'",
            template.as_str()
        )));
    }
    Ok(())
}
