//! Tests for panic-level calls: the line is written first, then the thread unwinds.

use linelog::{Buffer, Level, Logger, PANIC_MESSAGE, Sink, SourceInfo, Value};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

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

fn message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
}

#[test]
#[should_panic(expected = "unrecoverable error")]
fn panicf_unwinds() {
    let (logger, _buffer) = logger(Level::Trace);
    logger.panicf("boom", &[]);
}

#[test]
fn panicln_writes_before_unwinding() {
    let (logger, buffer) = logger(Level::Trace);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.panicln(&["boom".into(), Value::from(7)]);
    }));

    let payload = result.unwrap_err();
    assert_eq!(message(payload.as_ref()), Some(PANIC_MESSAGE));
    assert_eq!(buffer.contents(), "[P] T - boom 7\n");
}

#[test]
fn gated_panic_still_unwinds() {
    let (logger, buffer) = logger(Level::None);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.panicf("quiet %d", &[Value::from(1)]);
    }));
    assert!(result.is_err());
    assert!(buffer.is_empty());
}

#[test]
fn panic_macros_and_router() {
    let (logger, buffer) = logger(Level::Trace);

    let cases: [&dyn Fn(); 3] = [
        &|| {
            linelog::panicf!(logger, "macro %s", "f");
        },
        &|| {
            linelog::panicln!(logger, "macro", "ln");
        },
        &|| {
            let _ = linelog::rawf!(logger, "[P] routed");
        },
    ];
    for case in cases {
        assert!(panic::catch_unwind(AssertUnwindSafe(case)).is_err());
    }

    assert_eq!(
        buffer.lines(),
        ["[P] T - macro f", "[P] T - macro ln", "[P] T - routed"]
    );
}
