//! Configuration struct definitions.

use crate::settings::DEFAULT_TIME_FORMAT;
use serde::Deserialize;

/// Gate and line-layout settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// chrono strftime pattern for the timestamp.
    pub time_format: String,
    /// Prefix messages with the calling function.
    pub caller_info: bool,
    /// Source location suffix (none, short, long).
    pub source_info: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            caller_info: true,
            source_info: "short".to_string(),
        }
    }
}

/// Destination settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `stderr`, `stdout`, or a file path (`~` is expanded).
    pub target: String,
    /// Color lines by severity.
    pub colors: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stderr".to_string(),
            colors: true,
        }
    }
}
