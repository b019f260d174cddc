//! Live, mutable logger settings.
//!
//! Every field sits behind its own reader/writer lock so changing one setting never
//! blocks a concurrent read of another: a time-format change doesn't stall the level
//! check of a message on another thread. The sink, its color mode, and the line-writing
//! strategy derived from them share a single lock and always change together.

use crate::level::{Level, SourceInfo};
use crate::output::{self, LineSink, Sink};
use chrono::{DateTime, Local, SecondsFormat};
use parking_lot::RwLock;
use std::fmt::Write;
use std::sync::Arc;

/// Default timestamp layout: `2024-05-01@13:45:10.123`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d@%H:%M:%S%.3f";

/// Sink, color flag, and the strategy chosen for them.
struct OutputState {
    sink: Sink,
    colorize: bool,
    line_sink: Arc<dyn LineSink>,
}

impl OutputState {
    fn new(sink: Sink, colorize: bool) -> Self {
        let line_sink = output::strategy(&sink, colorize);
        Self {
            sink,
            colorize,
            line_sink,
        }
    }
}

/// Shared by every call on every thread, so each field is read and written on its own.
pub struct Settings {
    level: RwLock<Level>,
    output: RwLock<OutputState>,
    time_format: RwLock<String>,
    caller_info: RwLock<bool>,
    source_info: RwLock<SourceInfo>,
}

impl Default for Settings {
    /// Debug level, colored stderr, millisecond timestamps, caller and short source info on.
    fn default() -> Self {
        Self {
            level: RwLock::new(Level::Debug),
            output: RwLock::new(OutputState::new(Sink::stderr(), true)),
            time_format: RwLock::new(DEFAULT_TIME_FORMAT.to_string()),
            caller_info: RwLock::new(true),
            source_info: RwLock::new(SourceInfo::Short),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = self.output.read();
        f.debug_struct("Settings")
            .field("level", &*self.level.read())
            .field("sink", &output.sink)
            .field("colorize", &output.colorize)
            .field("time_format", &*self.time_format.read())
            .field("caller_info", &*self.caller_info.read())
            .field("source_info", &*self.source_info.read())
            .finish()
    }
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    /// The gate: a message passes when its level is at or above the minimum.
    /// `Level::None` as the minimum rejects everything, and is never itself a message level.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        let min = self.level();
        min != Level::None && level != Level::None && level >= min
    }

    #[must_use]
    pub fn sink(&self) -> Sink {
        self.output.read().sink.clone()
    }

    #[must_use]
    pub fn colorize(&self) -> bool {
        self.output.read().colorize
    }

    /// Replaces the sink and color mode in one step, re-selecting the line strategy
    /// under the same lock so no call sees a new sink with an old color mode.
    pub fn set_sink(&self, sink: Sink, colorize: bool) {
        let state = OutputState::new(sink, colorize);
        *self.output.write() = state;
    }

    /// Strategy currently in effect.
    #[must_use]
    pub fn line_sink(&self) -> Arc<dyn LineSink> {
        Arc::clone(&self.output.read().line_sink)
    }

    #[must_use]
    pub fn time_format(&self) -> String {
        self.time_format.read().clone()
    }

    /// Takes chrono `strftime` placeholders (`%H:%M:%S`, `%.3f`, ...).
    pub fn set_time_format(&self, format: impl Into<String>) {
        *self.time_format.write() = format.into();
    }

    #[must_use]
    pub fn caller_info(&self) -> bool {
        *self.caller_info.read()
    }

    pub fn set_caller_info(&self, enabled: bool) {
        *self.caller_info.write() = enabled;
    }

    #[must_use]
    pub fn source_info(&self) -> SourceInfo {
        *self.source_info.read()
    }

    pub fn set_source_info(&self, mode: SourceInfo) {
        *self.source_info.write() = mode;
    }

    /// Current local time in the configured format.
    #[must_use]
    pub fn timestamp(&self) -> String {
        format_time(&Local::now(), &self.time_format.read())
    }
}

/// Formats `time` with a strftime pattern. chrono reports a bad pattern only when the
/// value is displayed, so the error is caught here and RFC 3339 is used instead.
#[must_use]
pub fn format_time(time: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        return time.to_rfc3339_opts(SecondsFormat::Millis, false);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 5, 1, 13, 45, 10)
            .single()
            .unwrap()
    }

    #[test]
    fn formats_with_strftime() {
        assert_eq!(format_time(&fixed_time(), "%H:%M:%S"), "13:45:10");
        assert_eq!(
            format_time(&fixed_time(), DEFAULT_TIME_FORMAT),
            "2024-05-01@13:45:10.000"
        );
    }

    #[test]
    fn literal_format_is_copied() {
        assert_eq!(format_time(&fixed_time(), "T"), "T");
    }

    #[test]
    fn invalid_format_falls_back_to_rfc3339() {
        let rendered = format_time(&fixed_time(), "%Q");
        assert!(rendered.starts_with("2024-05-01T13:45:10.000"), "{rendered}");
    }

    #[test]
    fn none_minimum_disables_everything() {
        let settings = Settings::new();
        settings.set_level(Level::None);
        for level in Level::all() {
            assert!(!settings.enabled(level));
        }
    }
}
