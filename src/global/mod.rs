//! Process-wide logger for code that has no logger of its own to pass around.
//!
//! Uses `OnceLock` so the logger is installed exactly once, even if several entry
//! points race to initialize it. Its settings stay mutable afterwards through
//! [`Logger::settings`].

use crate::config::Config;
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created with default settings on first use.
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::default)
}

/// Installs `logger` as the process-wide logger. Only the first installation (or
/// first use of [`logger`]) takes effect; returns whether this call installed it.
pub fn init(logger: Logger) -> bool {
    GLOBAL_LOGGER.set(logger).is_ok()
}

/// Installs a logger built from `config`, or re-applies `config` to the one already
/// installed so a late config load still takes effect.
///
/// # Errors
/// Fails on invalid config values or an unopenable file target.
pub fn init_with_config(config: &Config) -> Result<(), crate::Error> {
    if let Some(existing) = GLOBAL_LOGGER.get() {
        return existing.apply_config(config);
    }
    let logger = Logger::from_config(config)?;
    if GLOBAL_LOGGER.set(logger).is_err() {
        // Lost a race with another initializer; keep theirs but honor this config
        return self::logger().apply_config(config);
    }
    Ok(())
}
