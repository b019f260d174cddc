//! Uncolored lines, for files, pipes, and anything that isn't a terminal.

use super::{LineSink, Sink};
use crate::level::Level;

/// Selected when colorize is off; also used for verbatim passthrough text.
#[derive(Debug, Clone)]
pub struct PlainSink {
    sink: Sink,
}

impl PlainSink {
    #[must_use]
    pub const fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl LineSink for PlainSink {
    fn write(&self, _level: Level, body: &str, terminator: &str) -> crate::Result<usize> {
        let mut line = String::with_capacity(body.len() + terminator.len());
        line.push_str(body);
        line.push_str(terminator);
        Ok(self.sink.write_counted(line.as_bytes())?)
    }

    fn flush(&self) -> crate::Result<()> {
        Ok(self.sink.flush()?)
    }
}
