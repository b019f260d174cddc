//! `linelog` - leveled, stream-based line logging.
//!
//! Every line carries a severity tag and a timestamp, and optionally the calling
//! function and the source location:
//!
//! ```text
//! [W] 2024-05-01@13:45:10.123 - net::connect: retrying in 5s (client.rs:88)
//! ```
//!
//! Two call shapes exist for each severity: printf-style templates (`infof`) and
//! space-joined element lists (`infoln`). Settings (minimum level, sink, colors,
//! time format, caller and source info) can change at any time from any thread.
//!
//! # Example
//!
//! ```
//! use linelog::{Level, Logger, Sink, SourceInfo, Value};
//!
//! let (sink, buffer) = Sink::buffer();
//! let logger = Logger::builder()
//!     .level(Level::Info)
//!     .sink(sink, false)
//!     .time_format("%H:%M:%S")
//!     .caller_info(false)
//!     .source_info(SourceInfo::None)
//!     .build();
//!
//! logger.debugf("not shown", &[]).unwrap();
//! logger.infof("y=%d", &[Value::from(5)]).unwrap();
//! logger.settings().set_level(Level::Warn);
//! logger.infoln(&["not shown either".into()]).unwrap();
//!
//! assert_eq!(buffer.lines().len(), 1);
//! assert!(buffer.contents().ends_with(" - y=5\n"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `linelog` command-line binary

pub mod caller;
pub mod compose;
pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod output;
pub mod settings;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use caller::{CallSite, Caller, CallerResolver, SiteResolver};
pub use config::Config;
pub use error::{Error, Result};
pub use fmt::{Value, to_json};
pub use level::{Level, ParseLevelError, SourceInfo};
pub use logger::{FATAL_EXIT_CODE, Logger, LoggerBuilder, PANIC_MESSAGE};
pub use output::{Buffer, LineSink, Sink};
pub use settings::Settings;
