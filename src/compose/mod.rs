//! Builds the metadata around a message.
//!
//! Both call shapes produce the same visible layout:
//!
//! ```text
//! <tag> <timestamp> - [<function>: ]<message>[ (<file>:<line>)]
//! ```
//!
//! Formatted calls get the metadata spliced into the template as extra `%s`/`%d`
//! directives with matching operands; line calls get it as extra leading and trailing
//! elements. The call site is only resolved when the settings ask for caller or
//! source info.

use crate::caller::{CallSite, Caller, CallerResolver, short_file};
use crate::fmt::{Value, render};
use crate::level::{Level, SourceInfo};
use crate::output::split_terminator;
use crate::settings::Settings;

/// Metadata snapshot for one call; each setting is read once.
struct Metadata {
    tag: &'static str,
    timestamp: String,
    function: Option<String>,
    location: Option<(String, i64)>,
}

impl Metadata {
    fn collect(
        settings: &Settings,
        resolver: &dyn CallerResolver,
        level: Level,
        site: &CallSite,
    ) -> Self {
        let caller_info = settings.caller_info();
        let source_info = settings.source_info();

        let (function, location) = if caller_info || source_info.is_enabled() {
            let caller = resolver.resolve(site).unwrap_or_else(Caller::unknown);
            let location = match source_info {
                SourceInfo::None => None,
                SourceInfo::Short => Some((short_file(&caller.file).to_string(), caller.line)),
                SourceInfo::Long => Some((caller.file, caller.line)),
            };
            (caller_info.then_some(caller.function), location)
        } else {
            (None, None)
        };

        Self {
            tag: level.tag(),
            timestamp: settings.timestamp(),
            function,
            location,
        }
    }
}

/// Adjusted template and operands for a formatted call.
///
/// The caller's template is rendered on its own first and travels as a single `%s`
/// operand, so render diagnostics (`%!(EXTRA ..)`, a dangling `%`) stay inside the
/// message and can't reach the metadata. The composed template always ends in
/// exactly one terminator: the caller's own, or `\n`.
#[must_use]
pub fn for_format(
    settings: &Settings,
    resolver: &dyn CallerResolver,
    level: Level,
    site: &CallSite,
    template: &str,
    args: &[Value],
) -> (String, Vec<Value>) {
    let meta = Metadata::collect(settings, resolver, level, site);
    let (body, terminator) = split_terminator(template);

    let mut composed = String::from("%s %s - ");
    let mut operands = Vec::with_capacity(6);
    operands.push(Value::from(meta.tag));
    operands.push(Value::Str(meta.timestamp));

    if let Some(function) = meta.function {
        composed.push_str("%s: ");
        operands.push(Value::Str(function));
    }

    composed.push_str("%s");
    operands.push(Value::Str(render(body, args)));

    if let Some((file, line)) = meta.location {
        composed.push_str(" (%s:%d)");
        operands.push(Value::Str(file));
        operands.push(Value::Int(line));
    }

    composed.push_str(if terminator.is_empty() { "\n" } else { terminator });
    (composed, operands)
}

/// Adjusted element list for a line call; elements are later joined with single spaces.
#[must_use]
pub fn for_line(
    settings: &Settings,
    resolver: &dyn CallerResolver,
    level: Level,
    site: &CallSite,
    args: &[Value],
) -> Vec<Value> {
    let meta = Metadata::collect(settings, resolver, level, site);

    let mut elements = Vec::with_capacity(args.len() + 3);
    elements.push(Value::Str(format!("{} {} -", meta.tag, meta.timestamp)));

    if let Some(function) = meta.function {
        elements.push(Value::Str(format!("{function}:")));
    }

    let Some((file, line)) = meta.location else {
        elements.extend_from_slice(args);
        return elements;
    };

    if let Some((last, rest)) = args.split_last() {
        elements.extend_from_slice(rest);
        // A terminator on the last element would otherwise land before the location
        let text = last.to_string();
        match split_terminator(&text) {
            (_, "") => elements.push(last.clone()),
            (body, _) => elements.push(Value::Str(body.to_string())),
        }
    }
    elements.push(Value::Str(format!("({file}:{line})")));

    elements
}

/// Space-joined text of `elements`, without a terminator.
#[must_use]
pub fn join(elements: &[Value]) -> String {
    let mut line = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&element.to_string());
    }
    line
}
