//! Per-severity entry points. Each one checks the gate before doing any work, composes
//! the line, and hands it to the active line strategy. The byte count and any sink
//! error go straight back to the caller; the logger never retries or escalates.

mod builder;
mod from_config;
mod macros;
mod router;

pub use builder::LoggerBuilder;

use crate::caller::{CallSite, CallerResolver, SiteResolver};
use crate::compose;
use crate::fmt::{Value, render};
use crate::level::Level;
use crate::output::split_terminator;
use crate::settings::Settings;

/// Message carried by the unwind that follows a panic-level log call.
pub const PANIC_MESSAGE: &str = "unrecoverable error";

/// Exit status used after a fatal-level log call.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Settings are shared by reference with every call; setters take effect for the next
/// call on any thread.
pub struct Logger {
    settings: Settings,
    resolver: Box<dyn CallerResolver>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_resolver(settings, SiteResolver)
    }

    /// Swaps in a different way of turning call sites into function/file/line.
    #[must_use]
    pub fn with_resolver(settings: Settings, resolver: impl CallerResolver + 'static) -> Self {
        Self {
            settings,
            resolver: Box::new(resolver),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Live settings; changes apply to subsequent calls.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.settings.enabled(level)
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.settings.level() == Level::None
    }

    /// # Errors
    /// I/O errors from the active sink.
    pub fn flush(&self) -> crate::Result<()> {
        self.settings.line_sink().flush()
    }

    /// Formatted-call dispatch for an explicit level and call site. Fatal and panic
    /// levels only write here; their typed entry points add the termination.
    ///
    /// # Errors
    /// I/O errors from the active sink.
    #[doc(hidden)]
    pub fn logf_at(
        &self,
        level: Level,
        site: CallSite,
        template: &str,
        args: &[Value],
    ) -> crate::Result<usize> {
        if !self.enabled(level) {
            return Ok(0);
        }

        let (template, args) = compose::for_format(
            &self.settings,
            self.resolver.as_ref(),
            level,
            &site,
            template,
            args,
        );
        let rendered = render(&template, &args);
        let (body, terminator) = split_terminator(&rendered);
        self.settings.line_sink().write(level, body, terminator)
    }

    /// Line-call dispatch for an explicit level and call site.
    ///
    /// # Errors
    /// I/O errors from the active sink.
    #[doc(hidden)]
    pub fn logln_at(&self, level: Level, site: CallSite, args: &[Value]) -> crate::Result<usize> {
        if !self.enabled(level) {
            return Ok(0);
        }

        let elements =
            compose::for_line(&self.settings, self.resolver.as_ref(), level, &site, args);
        let body = compose::join(&elements);
        self.settings.line_sink().write(level, &body, "\n")
    }

    #[doc(hidden)]
    pub fn fatalf_at(&self, site: CallSite, template: &str, args: &[Value]) -> ! {
        let _ = self.logf_at(Level::Fatal, site, template, args);
        self.exit()
    }

    #[doc(hidden)]
    pub fn fatalln_at(&self, site: CallSite, args: &[Value]) -> ! {
        let _ = self.logln_at(Level::Fatal, site, args);
        self.exit()
    }

    #[doc(hidden)]
    pub fn panicf_at(&self, site: CallSite, template: &str, args: &[Value]) -> ! {
        let _ = self.logf_at(Level::Panic, site, template, args);
        panic!("{PANIC_MESSAGE}")
    }

    #[doc(hidden)]
    pub fn panicln_at(&self, site: CallSite, args: &[Value]) -> ! {
        let _ = self.logln_at(Level::Panic, site, args);
        panic!("{PANIC_MESSAGE}")
    }

    fn exit(&self) -> ! {
        let _ = self.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Writes a trace message from a printf-style template; a line end is added if missing.
    ///
    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn tracef(&self, template: &str, args: &[Value]) -> crate::Result<usize> {
        self.logf_at(Level::Trace, CallSite::caller(), template, args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn debugf(&self, template: &str, args: &[Value]) -> crate::Result<usize> {
        self.logf_at(Level::Debug, CallSite::caller(), template, args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn infof(&self, template: &str, args: &[Value]) -> crate::Result<usize> {
        self.logf_at(Level::Info, CallSite::caller(), template, args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn warnf(&self, template: &str, args: &[Value]) -> crate::Result<usize> {
        self.logf_at(Level::Warn, CallSite::caller(), template, args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn errorf(&self, template: &str, args: &[Value]) -> crate::Result<usize> {
        self.logf_at(Level::Error, CallSite::caller(), template, args)
    }

    /// Writes the message if fatal is enabled, then exits the process with status 1.
    #[track_caller]
    pub fn fatalf(&self, template: &str, args: &[Value]) -> ! {
        self.fatalf_at(CallSite::caller(), template, args)
    }

    /// Writes the message if panic is enabled, then panics with [`PANIC_MESSAGE`].
    #[track_caller]
    pub fn panicf(&self, template: &str, args: &[Value]) -> ! {
        self.panicf_at(CallSite::caller(), template, args)
    }

    /// Writes a trace message: the elements joined by single spaces, then a line end.
    ///
    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn traceln(&self, args: &[Value]) -> crate::Result<usize> {
        self.logln_at(Level::Trace, CallSite::caller(), args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn debugln(&self, args: &[Value]) -> crate::Result<usize> {
        self.logln_at(Level::Debug, CallSite::caller(), args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn infoln(&self, args: &[Value]) -> crate::Result<usize> {
        self.logln_at(Level::Info, CallSite::caller(), args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn warnln(&self, args: &[Value]) -> crate::Result<usize> {
        self.logln_at(Level::Warn, CallSite::caller(), args)
    }

    /// # Errors
    /// I/O errors from the active sink.
    #[track_caller]
    pub fn errorln(&self, args: &[Value]) -> crate::Result<usize> {
        self.logln_at(Level::Error, CallSite::caller(), args)
    }

    #[track_caller]
    pub fn fatalln(&self, args: &[Value]) -> ! {
        self.fatalln_at(CallSite::caller(), args)
    }

    #[track_caller]
    pub fn panicln(&self, args: &[Value]) -> ! {
        self.panicln_at(CallSite::caller(), args)
    }
}
