//! TOML configuration file: where it lives, how it is read, and how its string
//! fields become typed settings.
//!
//! ```toml
//! [general]
//! level = "info"
//! time_format = "%H:%M:%S"
//! caller_info = false
//! source_info = "short"
//!
//! [output]
//! target = "~/.local/state/myapp/app.log"
//! colors = false
//! ```

mod structs;

pub use structs::{GeneralConfig, OutputConfig};

use crate::level::{Level, SourceInfo};
use crate::output::Sink;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working logger, so every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Reads the config from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Reads the config from `path`; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the file can't be read or the TOML is malformed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Fails on malformed TOML or fields of the wrong type.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/linelog/linelog.toml`, e.g. `~/.config/linelog/linelog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("linelog").join("linelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// [`crate::Error::InvalidLevel`] when `general.level` names no level.
    pub fn level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    /// # Errors
    /// [`crate::Error::InvalidSourceInfo`] when `general.source_info` names no mode.
    pub fn source_info(&self) -> Result<SourceInfo, crate::Error> {
        Ok(self.general.source_info.parse()?)
    }

    /// Opens the configured target.
    ///
    /// # Errors
    /// Fails if a file target can't be created or opened.
    pub fn open_sink(&self) -> Result<Sink, crate::Error> {
        match self.output.target.trim() {
            "" | "stderr" => Ok(Sink::stderr()),
            "stdout" => Ok(Sink::stdout()),
            path => Sink::file(shellexpand::tilde(path).as_ref()),
        }
    }
}
