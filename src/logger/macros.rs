//! Call-site macros. Compared with the methods they also record the enclosing
//! function, accept plain values instead of a `&[Value]` slice, and skip building
//! the operands entirely when the gate is closed.
//!
//! ```
//! use linelog::{Level, Logger, Sink};
//!
//! let (sink, buffer) = Sink::buffer();
//! let logger = Logger::builder()
//!     .level(Level::Info)
//!     .sink(sink, false)
//!     .time_format("T")
//!     .caller_info(false)
//!     .source_info(linelog::SourceInfo::None)
//!     .build();
//!
//! linelog::debugf!(logger, "hidden").unwrap();
//! linelog::infof!(logger, "y=%d", 5).unwrap();
//! linelog::infoln!(logger, "a", 1, true).unwrap();
//! assert_eq!(buffer.contents(), "[I] T - y=5\n[I] T - a 1 true\n");
//! ```

/// Formatted call at an explicit level.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            logger.logf_at(
                level,
                $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
                $template,
                &[$($crate::Value::from($arg)),*],
            )
        } else {
            ::std::result::Result::<usize, $crate::Error>::Ok(0)
        }
    }};
}

/// Line call at an explicit level.
#[macro_export]
macro_rules! logln {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            logger.logln_at(
                level,
                $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
                &[$($crate::Value::from($arg)),*],
            )
        } else {
            ::std::result::Result::<usize, $crate::Error>::Ok(0)
        }
    }};
}

#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($rest:tt)+) => { $crate::logf!($logger, $crate::Level::Trace, $($rest)+) };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($rest:tt)+) => { $crate::logf!($logger, $crate::Level::Debug, $($rest)+) };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($rest:tt)+) => { $crate::logf!($logger, $crate::Level::Info, $($rest)+) };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($rest:tt)+) => { $crate::logf!($logger, $crate::Level::Warn, $($rest)+) };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($rest:tt)+) => { $crate::logf!($logger, $crate::Level::Error, $($rest)+) };
}

#[macro_export]
macro_rules! traceln {
    ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::logln!($logger, $crate::Level::Trace $(, $arg)*) };
}

#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::logln!($logger, $crate::Level::Debug $(, $arg)*) };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::logln!($logger, $crate::Level::Info $(, $arg)*) };
}

#[macro_export]
macro_rules! warnln {
    ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::logln!($logger, $crate::Level::Warn $(, $arg)*) };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::logln!($logger, $crate::Level::Error $(, $arg)*) };
}

/// Writes if enabled, then exits the process.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::fatalf_at(
            &$logger,
            $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
            $template,
            &[$($crate::Value::from($arg)),*],
        )
    };
}

#[macro_export]
macro_rules! fatalln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::fatalln_at(
            &$logger,
            $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
            &[$($crate::Value::from($arg)),*],
        )
    };
}

/// Writes if enabled, then panics.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::panicf_at(
            &$logger,
            $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
            $template,
            &[$($crate::Value::from($arg)),*],
        )
    };
}

#[macro_export]
macro_rules! panicln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::panicln_at(
            &$logger,
            $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
            &[$($crate::Value::from($arg)),*],
        )
    };
}

/// Tag-routed formatted passthrough; see [`Logger::rawf`](crate::Logger::rawf).
#[macro_export]
macro_rules! rawf {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::rawf_at(
            &$logger,
            $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
            $template,
            &[$($crate::Value::from($arg)),*],
        )
    };
}

/// Tag-routed line passthrough; see [`Logger::rawln`](crate::Logger::rawln).
#[macro_export]
macro_rules! rawln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::rawln_at(
            &$logger,
            $crate::caller::CallSite::new($crate::__function_path!(), ::std::panic::Location::caller()),
            &[$($crate::Value::from($arg)),*],
        )
    };
}
