//! TOML configuration loading, `source = "..."` include resolution, and per-app override merging.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{AppConfig, ColorMode, GeneralConfig, LockConfig};

use crate::internal;
use crate::lock::DEFAULT_SPIN_INTERVAL;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_DIR: &str = "spinlog";
const CONFIG_FILE: &str = "spinlog.toml";

/// An empty or missing file yields a working config: colors always on, 10 µs spin interval.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub lock: LockConfig,
    pub apps: HashMap<String, AppConfig>,
}

/// Pulls `source = "..."` lines out of raw TOML before deserialization; serde would
/// reject the repeated key. Returns the paths and the remaining TOML.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let directive = trimmed
            .strip_prefix("source")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = directive {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads `<config_dir>/spinlog/spinlog.toml` with includes resolved. A missing file
    /// is not an error.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read, TOML
    /// parsing hits a syntax error, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        internal::debug(format_args!("loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses TOML text that has no includes.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// Expands `source` includes depth-first. `seen` holds the chain of files currently
    /// being loaded.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(format_args!("config file not found, using defaults"));
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(canonical.clone()) {
            internal::warn(format_args!(
                "cyclic config include: {}",
                canonical.display()
            ));
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source in sources {
            let expanded = shellexpand::tilde(&source);
            let mut source_path = PathBuf::from(expanded.as_ref());
            if source_path.is_relative()
                && let Some(parent) = path.parent()
            {
                source_path = parent.join(source_path);
            }

            if source_path.exists() {
                let included = Self::load_with_sources(&source_path, seen)?;
                config.merge(included);
            } else {
                internal::warn(format_args!("config source not found: {source}"));
            }
        }

        // Only ancestors count as a cycle; the same file may be included twice side by side.
        seen.remove(&canonical);
        Ok(config)
    }

    /// Fills fields `self` left unset from `other`. Values already set win.
    pub fn merge(&mut self, other: Self) {
        self.general.colors = self.general.colors.or(other.general.colors);
        self.lock.spin_interval_us = self.lock.spin_interval_us.or(other.lock.spin_interval_us);
        for (name, app) in other.apps {
            self.apps.entry(name).or_insert(app);
        }
    }

    /// Config with `[apps.<app_name>]` overrides applied on top. Unknown names return
    /// an unchanged copy.
    #[must_use]
    pub fn for_app(&self, app_name: &str) -> Self {
        let mut config = self.clone();

        if let Some(app) = self.apps.get(app_name) {
            if let Some(colors) = app.colors {
                config.general.colors = Some(colors);
            }
            if let Some(interval) = app.spin_interval_us {
                config.lock.spin_interval_us = Some(interval);
            }
        }

        config
    }

    #[must_use]
    pub fn colors(&self) -> ColorMode {
        self.general.colors.unwrap_or_default()
    }

    #[must_use]
    pub fn spin_interval(&self) -> Duration {
        self.lock
            .spin_interval_us
            .map_or(DEFAULT_SPIN_INTERVAL, Duration::from_micros)
    }

    /// `<config_dir>/spinlog/spinlog.toml`, e.g. `~/.config/spinlog/spinlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
