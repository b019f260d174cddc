//! Unified error type for all linelog operations.

use crate::level::ParseLevelError;

/// Error type for linelog operations.
#[derive(Debug)]
pub enum Error {
    /// The sink rejected a write or flush.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Text that does not name a severity.
    InvalidLevel(String),
    /// Text that does not name a source-info mode.
    InvalidSourceInfo(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "sink write failed: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "unparseable log level: {level:?}"),
            Self::InvalidSourceInfo(mode) => write!(f, "unparseable source info mode: {mode:?}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.text().to_string())
    }
}

/// Shorthand used by every fallible linelog operation.
pub type Result<T> = std::result::Result<T, Error>;
