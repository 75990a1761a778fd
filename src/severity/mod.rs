//! Severities pick a stream and a prefix. They do not filter: every call that reaches
//! the console is written.

use crate::fmt::Color256;
use std::fmt;
use std::str::FromStr;

/// Builds `\x1b[38;5;<index>m[<label>]: \x1b[0m` at compile time.
macro_rules! colored_prefix {
    ($index:literal, $label:literal) => {
        concat!("\x1b[38;5;", $index, "m[", $label, "]: \x1b[0m")
    };
}

/// Destination stream of a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Plain output: no prefix, no trailing newline, stdout.
    #[default]
    Info,
    Warn,
    Error,
    /// General progress output, green.
    Log,
    /// Compiled out unless the `debug` feature is enabled.
    Debug,
}

impl Severity {
    /// Lowercase because config files and CLI args use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Log => "log",
            Self::Debug => "debug",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Info, Self::Warn, Self::Error, Self::Log, Self::Debug]
    }

    #[must_use]
    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::Info => &INFO,
            Self::Warn => &WARN,
            Self::Error => &ERROR,
            Self::Log => &LOG,
            Self::Debug => &DEBUG,
        }
    }

    /// Whether calls of this severity do anything in the current build.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Debug) || cfg!(feature = "debug")
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl From<ParseSeverityError> for crate::Error {
    fn from(e: ParseSeverityError) -> Self {
        Self::InvalidSeverity(e.0)
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "plain" | "print" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "log" => Ok(Self::Log),
            "debug" | "dbg" => Ok(Self::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Everything the emit routine needs to know about a severity. One static instance per
/// severity; never constructed at runtime.
#[derive(Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub severity: Severity,
    /// Text between the brackets of the prefix.
    pub label: &'static str,
    pub color: Option<Color256>,
    /// Prefix including color escapes.
    pub prefix: &'static str,
    /// Prefix used when colors are off.
    pub plain_prefix: &'static str,
    pub stream: Stream,
    /// Whether a `\n` terminates every message.
    pub newline: bool,
    /// Written instead of the message when the heap buffer cannot be allocated.
    pub oom_notice: &'static str,
    /// Where `oom_notice` goes. Plain output reports on stderr, away from its data.
    pub oom_stream: Stream,
}

impl Descriptor {
    #[must_use]
    pub const fn prefix(&self, colors: bool) -> &'static str {
        if colors {
            self.prefix
        } else {
            self.plain_prefix
        }
    }
}

pub static INFO: Descriptor = Descriptor {
    severity: Severity::Info,
    label: "",
    color: None,
    prefix: "",
    plain_prefix: "",
    stream: Stream::Stdout,
    newline: false,
    oom_notice: "out of memory while formatting message",
    oom_stream: Stream::Stderr,
};

pub static WARN: Descriptor = Descriptor {
    severity: Severity::Warn,
    label: "warning",
    color: Some(Color256::ORANGE),
    prefix: colored_prefix!(202, "warning"),
    plain_prefix: "[warning]: ",
    stream: Stream::Stderr,
    newline: true,
    oom_notice: "[warning]: out of memory while formatting warning message\n",
    oom_stream: Stream::Stderr,
};

pub static ERROR: Descriptor = Descriptor {
    severity: Severity::Error,
    label: "error",
    color: Some(Color256::RED),
    prefix: colored_prefix!(160, "error"),
    plain_prefix: "[error]: ",
    stream: Stream::Stderr,
    newline: true,
    oom_notice: "[error]: out of memory while formatting error message\n",
    oom_stream: Stream::Stderr,
};

pub static LOG: Descriptor = Descriptor {
    severity: Severity::Log,
    label: "log",
    color: Some(Color256::GREEN),
    prefix: colored_prefix!(40, "log"),
    plain_prefix: "[log]: ",
    stream: Stream::Stderr,
    newline: true,
    oom_notice: "[log]: out of memory while formatting log message\n",
    oom_stream: Stream::Stderr,
};

pub static DEBUG: Descriptor = Descriptor {
    severity: Severity::Debug,
    label: "debug",
    color: Some(Color256::PINK),
    prefix: colored_prefix!(167, "debug"),
    plain_prefix: "[debug]: ",
    stream: Stream::Stderr,
    newline: true,
    oom_notice: "[debug]: out of memory while formatting debug message\n",
    oom_stream: Stream::Stderr,
};
