//! Console construction from a loaded `Config`.

use super::{Console, ConsoleBuilder};
use crate::config::Config;
use crate::internal;

impl Console {
    /// Loads the default config file and builds a console writing to the standard streams.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_default();
        Self::from_config(&config)
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder().config(config).build()
    }

    /// Applies `[apps.<app_name>]` overrides before building.
    #[must_use]
    pub fn from_config_for_app(config: &Config, app_name: &str) -> Self {
        internal::debug(format_args!("building console for app={app_name}"));
        Self::from_config(&config.for_app(app_name))
    }
}

impl ConsoleBuilder {
    /// Takes colors and spin interval from `config`. Call `sink` afterwards to redirect.
    #[must_use]
    pub fn config(self, config: &Config) -> Self {
        internal::debug(format_args!(
            "console config: colors={}, spin_interval={:?}",
            config.colors(),
            config.spin_interval()
        ));
        self.colors(config.colors())
            .spin_interval(config.spin_interval())
    }
}
