//! CLI module for linelog.
//!
//! Emits one log line from the command line using the configuration file, with
//! flags overriding individual settings.

use crate::caller::{CallSite, Caller, CallerResolver};
use crate::config::Config;
use crate::fmt::Value;
use crate::level::{Level, SourceInfo};
use crate::logger::Logger;
use crate::output::Sink;
use crate::settings::Settings;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Severity for the emitted line. `raw` routes through the tag-aware passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Raw,
}

impl LogLevel {
    /// `None` for `raw`, which has no level of its own.
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        match self {
            Self::Trace => Some(Level::Trace),
            Self::Debug => Some(Level::Debug),
            Self::Info => Some(Level::Info),
            Self::Warn => Some(Level::Warn),
            Self::Error => Some(Level::Error),
            Self::Fatal => Some(Level::Fatal),
            Self::Raw => None,
        }
    }
}

/// A shell script has no call site the logger could see, so it names itself.
struct ScriptCaller(String);

impl CallerResolver for ScriptCaller {
    fn resolve(&self, _site: &CallSite) -> Option<Caller> {
        Some(Caller {
            function: self.0.clone(),
            ..Caller::unknown()
        })
    }
}

/// linelog - Write a leveled log line from the command line.
#[derive(Debug, Parser)]
#[command(name = "linelog", version, about = "Write a leveled log line")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum level to emit (trace, debug, info, warn, error, fatal, panic, none)
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<String>,

    /// Timestamp format (chrono strftime)
    #[arg(short, long, value_name = "FORMAT")]
    pub time_format: Option<String>,

    /// Name shown as the calling function
    #[arg(long, value_name = "NAME")]
    pub caller: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Write to stdout instead of the configured target
    #[arg(long)]
    pub stdout: bool,

    /// Treat the first message word as a printf-style template, the rest as its operands
    #[arg(short, long)]
    pub format: bool,

    /// Severity of the line
    #[arg(value_enum)]
    pub level: LogLevel,

    /// Message words
    #[arg(required = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

/// Loads the config and applies flag overrides. Caller info is only shown when
/// `--caller` names one, and there is never a source location to show.
///
/// # Errors
/// Fails on an unreadable config, invalid values, or an unopenable file target.
pub fn build_logger(cli: &Cli) -> Result<Logger, crate::Error> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let logger = match &cli.caller {
        Some(name) => Logger::with_resolver(Settings::new(), ScriptCaller(name.clone())),
        None => Logger::default(),
    };
    logger.apply_config(&config)?;

    let settings = logger.settings();
    settings.set_caller_info(cli.caller.is_some());
    settings.set_source_info(SourceInfo::None);

    if let Some(level) = &cli.min_level {
        settings.set_level(level.parse()?);
    }
    if let Some(format) = &cli.time_format {
        settings.set_time_format(format.clone());
    }
    if cli.stdout || cli.no_color {
        let sink = if cli.stdout { Sink::stdout() } else { settings.sink() };
        let colorize = settings.colorize() && !cli.no_color;
        settings.set_sink(sink, colorize);
    }

    Ok(logger)
}

/// Runs the CLI and maps the outcome to an exit code.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let logger = match build_logger(cli) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("linelog: {e}");
            return ExitCode::FAILURE;
        }
    };

    match emit(&logger, cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("linelog: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Numeric-looking words become numbers so `%d` and `%.2f` apply to them.
fn operand(word: &str) -> Value {
    if let Ok(i) = word.parse::<i64>() {
        Value::Int(i)
    } else if let Ok(x) = word.parse::<f64>() {
        Value::Float(x)
    } else {
        Value::from(word)
    }
}

fn emit(logger: &Logger, cli: &Cli) -> Result<usize, crate::Error> {
    let words: Vec<Value> = cli.message.iter().map(Value::from).collect();
    let operands: Vec<Value> = cli.message.iter().skip(1).map(|w| operand(w)).collect();
    let template = cli.message.first().map_or("", String::as_str);

    let result = match (cli.level.level(), cli.format) {
        (Some(Level::Fatal), true) => logger.fatalf(template, &operands),
        (Some(Level::Fatal), false) => logger.fatalln(&words),
        (Some(level), true) => logger.logf_at(level, CallSite::caller(), template, &operands),
        (Some(level), false) => logger.logln_at(level, CallSite::caller(), &words),
        (None, true) => logger.rawf(template, &operands),
        (None, false) => logger.rawln(&words),
    };
    logger.flush()?;
    result
}
