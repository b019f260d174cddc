//! How much of the call-site location goes at the end of each line.

use std::fmt;
use std::str::FromStr;

/// Source-location annotation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceInfo {
    /// No `(file:line)` suffix.
    None,
    /// File name only, everything up to the last path separator dropped.
    #[default]
    Short,
    /// File path exactly as the compiler recorded it.
    Long,
}

impl SourceInfo {
    /// Lowercase name, as written in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    /// Whether a suffix is written at all.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keeps the rejected text so config errors can quote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSourceInfoError(String);

impl ParseSourceInfoError {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseSourceInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unparseable source info mode: {:?}", self.0)
    }
}

impl std::error::Error for ParseSourceInfoError {}

impl FromStr for SourceInfo {
    type Err = ParseSourceInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" | "false" | "no" => Ok(Self::None),
            "short" | "file" => Ok(Self::Short),
            "long" | "full" | "path" => Ok(Self::Long),
            _ => Err(ParseSourceInfoError(s.to_string())),
        }
    }
}

impl From<ParseSourceInfoError> for crate::Error {
    fn from(e: ParseSourceInfoError) -> Self {
        Self::InvalidSourceInfo(e.text().to_string())
    }
}
