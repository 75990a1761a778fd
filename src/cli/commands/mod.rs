//! Each subcommand lives in its own file; the shell reuses the same handlers.

mod clear;
mod emit;
mod json;
mod severities;

pub use clear::cmd_clear;
pub use emit::{cmd_emit, emit_template};
pub use json::cmd_json;
pub use severities::cmd_severities;
