//! Tests for the per-severity entry points.

use linelog::{Buffer, Error, Level, Logger, Sink, SourceInfo, Value};
use std::io::{self, Write};

fn logger(level: Level) -> (Logger, Buffer) {
    let (sink, buffer) = Sink::buffer();
    let logger = Logger::builder()
        .level(level)
        .sink(sink, false)
        .time_format("T")
        .caller_info(false)
        .source_info(SourceInfo::None)
        .build();
    (logger, buffer)
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn formatted_call_layout() {
    let (logger, buffer) = logger(Level::Info);
    let written = logger.infof("y=%d", &[Value::from(5)]).unwrap();
    assert_eq!(buffer.contents(), "[I] T - y=5\n");
    assert_eq!(written, buffer.contents().len());
}

#[test]
fn line_call_layout() {
    let (logger, buffer) = logger(Level::Trace);
    let written = logger
        .debugln(&["a".into(), 1.into(), true.into()])
        .unwrap();
    assert_eq!(buffer.contents(), "[D] T - a 1 true\n");
    assert_eq!(written, buffer.contents().len());
}

#[test]
fn each_level_writes_its_tag() {
    let (logger, buffer) = logger(Level::Trace);
    logger.tracef("m", &[]).unwrap();
    logger.debugf("m", &[]).unwrap();
    logger.infof("m", &[]).unwrap();
    logger.warnf("m", &[]).unwrap();
    logger.errorf("m", &[]).unwrap();
    logger.traceln(&["m".into()]).unwrap();
    logger.debugln(&["m".into()]).unwrap();
    logger.infoln(&["m".into()]).unwrap();
    logger.warnln(&["m".into()]).unwrap();
    logger.errorln(&["m".into()]).unwrap();

    let tags: Vec<String> = buffer.lines().iter().map(|l| l[..3].to_string()).collect();
    assert_eq!(
        tags,
        ["[T]", "[D]", "[I]", "[W]", "[E]", "[T]", "[D]", "[I]", "[W]", "[E]"]
    );
}

#[test]
fn gated_call_writes_nothing_and_returns_zero() {
    let (logger, buffer) = logger(Level::Info);
    assert_eq!(logger.debugf("hidden %d", &[Value::from(1)]).unwrap(), 0);
    assert_eq!(logger.traceln(&["hidden".into()]).unwrap(), 0);
    assert!(buffer.is_empty());
}

#[test]
fn gate_for_every_level_and_minimum() {
    let non_terminating = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];
    for min in Level::all().into_iter().chain([Level::None]) {
        let (logger, buffer) = logger(min);
        for level in non_terminating {
            let written = linelog::logf!(logger, level, "x").unwrap();
            let expected = min != Level::None && level >= min;
            assert_eq!(written > 0, expected, "{level} at min {min}");
        }
        let expected = non_terminating
            .iter()
            .filter(|&&l| min != Level::None && l >= min)
            .count();
        assert_eq!(buffer.lines().len(), expected);
    }
}

#[test]
fn level_change_applies_to_next_call() {
    let (logger, buffer) = logger(Level::Info);
    logger.settings().set_level(Level::Warn);
    logger.infoln(&["dropped".into()]).unwrap();
    logger.settings().set_level(Level::Trace);
    logger.infoln(&["kept".into()]).unwrap();
    assert_eq!(buffer.lines(), ["[I] T - kept"]);
}

#[test]
fn disabled_logger() {
    let (logger, buffer) = logger(Level::None);
    assert!(logger.is_disabled());
    logger.errorf("nothing", &[]).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn template_terminator_is_not_doubled() {
    let (logger, buffer) = logger(Level::Info);
    logger.infof("one\n", &[]).unwrap();
    logger.infof("two\r", &[]).unwrap();
    assert_eq!(buffer.contents(), "[I] T - one\n[I] T - two\r");
}

#[test]
fn short_source_info_names_this_file() {
    let (logger, buffer) = logger(Level::Info);
    logger.settings().set_source_info(SourceInfo::Short);
    let line = line!() + 1;
    logger.infof("hi\n", &[]).unwrap();
    assert_eq!(buffer.contents(), format!("[I] T - hi (logger.rs:{line})\n"));
}

#[test]
fn long_source_info_keeps_the_path() {
    let (logger, buffer) = logger(Level::Info);
    logger.settings().set_source_info(SourceInfo::Long);
    let line = line!() + 1;
    logger.warnln(&["hi".into()]).unwrap();
    assert_eq!(
        buffer.contents(),
        format!("[W] T - hi ({}:{line})\n", file!())
    );
}

#[test]
fn caller_info_names_the_calling_function() {
    let (logger, buffer) = logger(Level::Info);
    logger.settings().set_caller_info(true);
    logger.infof("hi", &[]).unwrap();
    logger.warnln(&["there".into()]).unwrap();
    assert_eq!(
        buffer.lines(),
        [
            "[I] T - logger::caller_info_names_the_calling_function: hi",
            "[W] T - logger::caller_info_names_the_calling_function: there",
        ]
    );
}

#[test]
fn render_problems_show_inline() {
    let (logger, buffer) = logger(Level::Info);
    logger.infof("%d and %d", &[Value::from(1)]).unwrap();
    logger.infof("%d", &[Value::from("x")]).unwrap();
    assert_eq!(
        buffer.lines(),
        ["[I] T - 1 and %!d(MISSING)", "[I] T - %!d(x)"]
    );
}

#[test]
fn surplus_operands_stay_on_their_line() {
    let (logger, buffer) = logger(Level::Info);
    logger.infof("x", &[Value::from(2), Value::from("b")]).unwrap();
    logger.infof("next", &[]).unwrap();
    assert_eq!(buffer.lines(), ["[I] T - x%!(EXTRA 2, b)", "[I] T - next"]);
    assert!(buffer.contents().ends_with('\n'));
}

#[test]
fn trailing_percent_keeps_the_terminator() {
    let (logger, buffer) = logger(Level::Info);
    logger.infof("50%", &[]).unwrap();
    logger.infof("done%\n", &[]).unwrap();
    assert_eq!(
        buffer.contents(),
        "[I] T - 50%!(NOVERB)\n[I] T - done%!(NOVERB)\n"
    );
}

#[test]
fn render_problems_leave_the_location_intact() {
    let (logger, buffer) = logger(Level::Info);
    logger.settings().set_source_info(SourceInfo::Short);
    let first = line!() + 1;
    logger.infof("50%", &[]).unwrap();
    let second = line!() + 1;
    logger.infof("%d of %d", &[Value::from(1)]).unwrap();
    let third = line!() + 1;
    logger.infof("x", &[Value::from(5)]).unwrap();
    assert_eq!(
        buffer.contents(),
        format!(
            "[I] T - 50%!(NOVERB) (logger.rs:{first})\n\
             [I] T - 1 of %!d(MISSING) (logger.rs:{second})\n\
             [I] T - x%!(EXTRA 5) (logger.rs:{third})\n"
        )
    );
}

#[test]
fn every_formatted_line_ends_in_one_terminator() {
    let (logger, buffer) = logger(Level::Info);
    for template in ["a", "a\n", "a%", "%d", "%s %s"] {
        buffer.clear();
        logger.infof(template, &[Value::from(1)]).unwrap();
        let contents = buffer.contents();
        assert!(contents.ends_with('\n'), "{template:?} -> {contents:?}");
        assert_eq!(contents.matches('\n').count(), 1, "{template:?} -> {contents:?}");
    }
}

#[test]
fn colored_line_keeps_terminator_outside_the_color() {
    let (sink, buffer) = Sink::buffer();
    let logger = Logger::builder()
        .level(Level::Info)
        .sink(sink, true)
        .time_format("T")
        .caller_info(false)
        .source_info(SourceInfo::None)
        .build();
    logger.infof("hi", &[]).unwrap();
    logger.errorln(&["bad".into()]).unwrap();
    assert_eq!(
        buffer.contents(),
        "\x1b[38;2;80;250;123m[I] T - hi\x1b[0m\n\x1b[38;2;255;85;85m[E] T - bad\x1b[0m\n"
    );
}

#[test]
fn colored_diagnostics_stay_inside_one_span() {
    let (sink, buffer) = Sink::buffer();
    let logger = Logger::builder()
        .level(Level::Info)
        .sink(sink, true)
        .time_format("T")
        .caller_info(false)
        .source_info(SourceInfo::None)
        .build();
    logger.warnf("x", &[Value::from(5)]).unwrap();
    assert_eq!(
        buffer.contents(),
        "\x1b[38;2;241;250;140m[W] T - x%!(EXTRA 5)\x1b[0m\n"
    );
}

#[test]
fn sink_failure_is_returned() {
    let logger = Logger::builder()
        .level(Level::Info)
        .sink(Sink::writer(FailingWriter), false)
        .build();
    let err = logger.errorf("lost", &[]).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert!(logger.errorln(&["lost".into()]).is_err());
}

#[test]
fn swapping_the_sink_redirects_output() {
    let (logger, first) = logger(Level::Info);
    let (sink, second) = Sink::buffer();
    logger.infoln(&["one".into()]).unwrap();
    logger.settings().set_sink(sink, false);
    logger.infoln(&["two".into()]).unwrap();
    logger.flush().unwrap();
    assert_eq!(first.lines(), ["[I] T - one"]);
    assert_eq!(second.lines(), ["[I] T - two"]);
}
