//! CLI module for spinlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use crate::config::ColorMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// spinlog - Write serialized, colorized messages from the command line.
#[derive(Parser)]
#[command(
    name = "spinlog",
    version,
    about = "Write serialized, colorized messages from the command line"
)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/spinlog/spinlog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Apply [apps.<NAME>] overrides from the config
    #[arg(long, global = true, value_name = "NAME")]
    pub app: Option<String>,
    /// Color mode, overriding the config
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub color: Option<ColorMode>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// A printf template and its operands.
#[derive(Args, Debug, Clone)]
pub struct EmitArgs {
    /// printf-style template; backslash escapes (\n \t \\ \e \") are interpreted
    pub template: String,
    /// One operand per directive
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Plain text to stdout, no prefix, no newline
    Info(EmitArgs),
    /// [warning] line on stderr
    Warn(EmitArgs),
    /// [error] line on stderr
    Error(EmitArgs),
    /// [log] line on stderr
    Log(EmitArgs),
    /// [debug] line on stderr (only in builds with the `debug` feature)
    Debug(EmitArgs),
    /// Emit from JSON lines: {"severity": "...", "msg": "..."}
    Json {
        /// JSON string (reads stdin if omitted or "-")
        json: Option<String>,
    },
    /// Interactive shell
    Shell,
    /// Clear the terminal
    Clear,
    /// Preview every severity's prefix
    Severities,
}

pub use commands::{cmd_clear, cmd_emit, cmd_json, cmd_severities, emit_template};
pub use util::{build_console, unescape};
