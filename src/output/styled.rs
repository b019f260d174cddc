//! Terminal lines colored by severity. The reset goes before every line end so a
//! color never bleeds into the next line.

use super::{LineSink, Sink};
use crate::fmt::{Color, colorize};
use crate::level::Level;

/// Selected when colorize is on.
#[derive(Debug, Clone)]
pub struct StyledSink {
    sink: Sink,
}

impl StyledSink {
    #[must_use]
    pub const fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl LineSink for StyledSink {
    fn write(&self, level: Level, body: &str, terminator: &str) -> crate::Result<usize> {
        let color = Color::for_level(level);
        let mut line = String::with_capacity(body.len() + 32);
        // Each physical line gets its own span so a reset never lands on the next line
        for (i, segment) in body.split('\n').enumerate() {
            if i > 0 {
                line.push('\n');
            }
            if !segment.is_empty() {
                line.push_str(&colorize(segment, color));
            }
        }
        line.push_str(terminator);
        Ok(self.sink.write_counted(line.as_bytes())?)
    }

    fn flush(&self) -> crate::Result<()> {
        Ok(self.sink.flush()?)
    }
}
