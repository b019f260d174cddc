//! Untyped entry points for text that may already carry a severity tag.
//!
//! A leading `[T]`, `[D]`, `[I]`, `[W]`, `[E]`, `[F]` or `[P]` followed by whitespace
//! (or nothing) is stripped and the rest goes to that level's entry point. Anything
//! else is written exactly as given: no gate, no timestamp, no color.

use super::Logger;
use crate::caller::CallSite;
use crate::compose;
use crate::fmt::{Value, render};
use crate::level::Level;
use regex::Regex;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\[[TDIWEFP]\])(?:\s+|$)").expect("Invalid severity tag regex")
});

/// Level named by a leading tag, and the text after the tag and its separator.
fn split_tag(text: &str) -> Option<(Level, &str)> {
    let captures = TAG_REGEX.captures(text)?;
    let level = Level::from_tag(captures.get(1)?.as_str())?;
    let rest = &text[captures.get(0)?.end()..];
    Some((level, rest))
}

impl Logger {
    /// Formatted passthrough: `"[W] disk at %d%%"` logs a warning, `"plain %s"` is written verbatim.
    ///
    /// # Errors
    /// I/O errors from the sink.
    #[track_caller]
    pub fn rawf(&self, template: &str, args: &[Value]) -> crate::Result<usize> {
        self.rawf_at(CallSite::caller(), template, args)
    }

    /// Line passthrough; the tag is looked for in the first element.
    ///
    /// # Errors
    /// I/O errors from the sink.
    #[track_caller]
    pub fn rawln(&self, args: &[Value]) -> crate::Result<usize> {
        self.rawln_at(CallSite::caller(), args)
    }

    /// # Errors
    /// I/O errors from the sink.
    #[doc(hidden)]
    pub fn rawf_at(&self, site: CallSite, template: &str, args: &[Value]) -> crate::Result<usize> {
        if let Some((level, rest)) = split_tag(template) {
            return match level {
                Level::Fatal => self.fatalf_at(site, rest, args),
                Level::Panic => self.panicf_at(site, rest, args),
                _ => self.logf_at(level, site, rest, args),
            };
        }

        let text = render(template, args);
        Ok(self.settings().sink().write_counted(text.as_bytes())?)
    }

    /// # Errors
    /// I/O errors from the sink.
    #[doc(hidden)]
    pub fn rawln_at(&self, site: CallSite, args: &[Value]) -> crate::Result<usize> {
        let tagged = args
            .split_first()
            .and_then(|(first, rest)| Some((split_tag(first.as_str()?)?, rest)));

        if let Some(((level, remainder), rest)) = tagged {
            let mut forwarded = Vec::with_capacity(args.len());
            if !remainder.is_empty() {
                forwarded.push(Value::from(remainder));
            }
            forwarded.extend_from_slice(rest);

            return match level {
                Level::Fatal => self.fatalln_at(site, &forwarded),
                Level::Panic => self.panicln_at(site, &forwarded),
                _ => self.logln_at(level, site, &forwarded),
            };
        }

        let mut text = compose::join(args);
        text.push('\n');
        Ok(self.settings().sink().write_counted(text.as_bytes())?)
    }
}
