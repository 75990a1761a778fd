//! Configuration struct definitions.
//!
//! Every field is optional so an included file can tell "not set" apart from a
//! default and the including file's values take precedence.

use serde::Deserialize;
use std::fmt;

/// When to emit color escapes in severity prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    /// Only on streams attached to a terminal.
    Auto,
}

impl ColorMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[general]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    pub colors: Option<ColorMode>,
}

/// `[lock]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LockConfig {
    /// Microseconds a waiting caller sleeps between acquire attempts.
    pub spin_interval_us: Option<u64>,
}

/// `[apps.<name>]`: overrides applied by `Config::for_app`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub colors: Option<ColorMode>,
    pub spin_interval_us: Option<u64>,
}
