//! Tests for fatal-level calls. Each test re-runs itself in a child process, where
//! the fatal call exits; the parent checks the exit status and what reached stderr.

use linelog::{FATAL_EXIT_CODE, Level, Logger, Sink, SourceInfo, Value};
use std::env;
use std::process::{Command, Output};

const CHILD_ENV: &str = "LINELOG_FATAL_CHILD";

fn in_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

fn stderr_logger(level: Level) -> Logger {
    Logger::builder()
        .level(level)
        .sink(Sink::stderr(), false)
        .time_format("T")
        .caller_info(false)
        .source_info(SourceInfo::None)
        .build()
}

fn run_child(test: &str) -> Output {
    Command::new(env::current_exe().unwrap())
        .args(["--exact", test, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn fatalf_writes_then_exits() {
    if in_child() {
        stderr_logger(Level::Info).fatalf("disk gone %d", &[Value::from(3)]);
    }

    let output = run_child("fatalf_writes_then_exits");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(stderr(&output).contains("[F] T - disk gone 3\n"), "{}", stderr(&output));
}

#[test]
fn fatalln_writes_then_exits() {
    if in_child() {
        stderr_logger(Level::Info).fatalln(&["disk".into(), "gone".into()]);
    }

    let output = run_child("fatalln_writes_then_exits");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(stderr(&output).contains("[F] T - disk gone\n"));
}

#[test]
fn gated_fatal_still_exits() {
    if in_child() {
        stderr_logger(Level::None).fatalf("silent", &[]);
    }

    let output = run_child("gated_fatal_still_exits");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(!stderr(&output).contains("silent"));
}

#[test]
fn fatal_macro_exits() {
    if in_child() {
        let logger = stderr_logger(Level::Trace);
        linelog::fatalf!(logger, "code %d", 9);
    }

    let output = run_child("fatal_macro_exits");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(stderr(&output).contains("[F] T - code 9\n"));
}

#[test]
fn routed_fatal_exits() {
    if in_child() {
        let logger = stderr_logger(Level::Trace);
        let _ = logger.rawln(&["[F] routed".into()]);
        return;
    }

    let output = run_child("routed_fatal_exits");
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(stderr(&output).contains("[F] T - routed\n"));
}
