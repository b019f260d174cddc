//! Where composed lines go. A [`Sink`] is the byte destination; a [`LineSink`] is the
//! strategy that writes one line to it, chosen once whenever the sink or the color
//! mode changes so the hot path never re-decides.

mod plain;
mod sink;
mod styled;

pub use plain::PlainSink;
pub use sink::{Buffer, Sink, SinkKind};
pub use styled::StyledSink;

use crate::level::Level;
use std::sync::Arc;

/// `Send + Sync` so one strategy can serve every thread holding the logger.
pub trait LineSink: Send + Sync {
    /// Writes `body` followed by `terminator` as a single sink write.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, level: Level, body: &str, terminator: &str) -> crate::Result<usize>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> crate::Result<()>;
}

/// Picks the strategy for a sink/color combination.
#[must_use]
pub fn strategy(sink: &Sink, colorize: bool) -> Arc<dyn LineSink> {
    if colorize {
        Arc::new(StyledSink::new(sink.clone()))
    } else {
        Arc::new(PlainSink::new(sink.clone()))
    }
}

/// Splits one trailing line terminator (`\r\n`, `\n` or `\r`) off `line`.
#[must_use]
pub fn split_terminator(line: &str) -> (&str, &str) {
    for terminator in ["\r\n", "\n", "\r"] {
        if let Some(body) = line.strip_suffix(terminator) {
            return (body, terminator);
        }
    }
    (line, "")
}
