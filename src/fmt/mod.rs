//! ANSI colors for severity prefixes and the runtime printf template engine used for
//! text that arrives without Rust format arguments (CLI, JSON, shell).

mod color;
mod printf;

pub use color::{Color256, colorize};
pub use printf::{Arg, Bound, Conversion, Directive, PrintfTemplate};
