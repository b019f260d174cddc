//! Stepwise construction so callers only name the settings they change.

use super::Logger;
use crate::caller::{CallerResolver, SiteResolver};
use crate::level::{Level, SourceInfo};
use crate::output::Sink;
use crate::settings::{DEFAULT_TIME_FORMAT, Settings};

/// Collects settings before the logger exists, so the first line already uses them.
pub struct LoggerBuilder {
    level: Level,
    sink: Option<Sink>,
    colorize: bool,
    time_format: String,
    caller_info: bool,
    source_info: SourceInfo,
    resolver: Box<dyn CallerResolver>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Starts from the same defaults as [`Settings::default`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            sink: None,
            colorize: true,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            caller_info: true,
            source_info: SourceInfo::Short,
            resolver: Box::new(SiteResolver),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Destination plus whether lines are colored by severity.
    #[must_use]
    pub fn sink(mut self, sink: Sink, colorize: bool) -> Self {
        self.sink = Some(sink);
        self.colorize = colorize;
        self
    }

    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    #[must_use]
    pub const fn caller_info(mut self, enabled: bool) -> Self {
        self.caller_info = enabled;
        self
    }

    #[must_use]
    pub const fn source_info(mut self, mode: SourceInfo) -> Self {
        self.source_info = mode;
        self
    }

    /// Tests and embedders with their own symbolization can replace the default.
    #[must_use]
    pub fn resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let settings = Settings::new();
        settings.set_level(self.level);
        settings.set_sink(self.sink.unwrap_or_else(Sink::stderr), self.colorize);
        settings.set_time_format(self.time_format);
        settings.set_caller_info(self.caller_info);
        settings.set_source_info(self.source_info);

        Logger {
            settings,
            resolver: self.resolver,
        }
    }
}
