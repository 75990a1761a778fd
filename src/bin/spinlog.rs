//! A single `spinlog` binary: bare invocation drops into the REPL, while subcommands
//! support scriptable one-shot output.
//!
//! Usage:
//!   spinlog                                  Enter interactive shell
//!   spinlog <severity> <template> [args...]  Emit a printf-style message
//!   spinlog json [<json>]                    Emit from JSON (or stdin)
//!   spinlog severities                       Preview every severity
//!   spinlog clear                            Clear the terminal

use clap::Parser;
use spinlog::cli::{Cli, Command, build_console, cmd_clear, cmd_emit, cmd_json, cmd_severities};
use spinlog::config::Config;
use spinlog::{Console, Severity, global, internal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Colors and the spin interval come from config, so it loads before the console exists
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Installed process-wide so internal diagnostics share the lock with command output
    let console = build_console(&config, cli.app.as_deref(), cli.color);
    let console = global::install(console).unwrap_or_else(|_| global::console());

    // Bare invocation drops into the REPL
    let Some(command) = cli.command else {
        return run_shell(console);
    };

    match command {
        Command::Info(args) => cmd_emit(console, Severity::Info, &args.template, &args.args),
        Command::Warn(args) => cmd_emit(console, Severity::Warn, &args.template, &args.args),
        Command::Error(args) => cmd_emit(console, Severity::Error, &args.template, &args.args),
        Command::Log(args) => cmd_emit(console, Severity::Log, &args.template, &args.args),
        Command::Debug(args) => cmd_emit(console, Severity::Debug, &args.template, &args.args),
        Command::Json { json } => cmd_json(json.as_deref(), console),
        Command::Shell => run_shell(console),
        Command::Clear => cmd_clear(console),
        Command::Severities => cmd_severities(console),
    }
}

fn run_shell(console: &Console) -> ExitCode {
    match spinlog::shell::run(console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error(format_args!("shell error: {e}"));
            ExitCode::FAILURE
        }
    }
}
