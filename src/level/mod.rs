//! Severity levels that gate which messages reach the sink.

mod source;

pub use source::{ParseSourceInfoError, SourceInfo};

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    Trace = 0,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    #[default]
    Debug = 1,
    /// Normal operational milestones: connection established, config loaded, etc.
    Info = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures that prevent an operation from completing.
    Error = 4,
    /// Failures after which the process exits.
    Fatal = 5,
    /// Failures after which the calling thread unwinds.
    Panic = 6,
    /// Minimum level that silences every message.
    None = 7,
}

impl Level {
    /// Numeric rank used by the gate.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Fixed short tag written at the start of every line. `None` has no tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "[T]",
            Self::Debug => "[D]",
            Self::Info => "[I]",
            Self::Warn => "[W]",
            Self::Error => "[E]",
            Self::Fatal => "[F]",
            Self::Panic => "[P]",
            Self::None => "",
        }
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
            Self::None => "none",
        }
    }

    /// Reverse of [`Level::tag`]; only exact tags match.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().into_iter().find(|level| level.tag() == tag)
    }

    /// Every level that can carry a message, lowest first.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
            Self::Panic,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The text that failed to parse, untouched.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unparseable log level: {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "t" | "trc" | "trace" => Ok(Self::Trace),
            "d" | "dbg" | "debug" => Ok(Self::Debug),
            "i" | "inf" | "info" | "informational" => Ok(Self::Info),
            "w" | "wrn" | "warn" | "warning" => Ok(Self::Warn),
            "e" | "err" | "error" => Ok(Self::Error),
            "f" | "ftl" | "fatal" => Ok(Self::Fatal),
            "p" | "pan" | "panic" => Ok(Self::Panic),
            "nil" | "null" | "none" | "off" => Ok(Self::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
