//! Logger construction from a configuration file.

use super::Logger;
use crate::config::Config;

impl Logger {
    /// Builds a logger whose settings mirror `config`.
    ///
    /// # Errors
    /// Fails on an unknown level or source-info mode, or when a file target can't be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let logger = Self::default();
        logger.apply_config(config)?;
        Ok(logger)
    }

    /// Re-applies `config` to this logger's live settings. Nothing changes unless
    /// every field is valid.
    ///
    /// # Errors
    /// Same as [`Logger::from_config`].
    pub fn apply_config(&self, config: &Config) -> Result<(), crate::Error> {
        let level = config.level()?;
        let source_info = config.source_info()?;
        let sink = config.open_sink()?;

        let settings = self.settings();
        settings.set_level(level);
        settings.set_sink(sink, config.output.colors);
        settings.set_time_format(config.general.time_format.clone());
        settings.set_caller_info(config.general.caller_info);
        settings.set_source_info(source_info);
        Ok(())
    }
}
