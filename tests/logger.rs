//! Tests for the logger facade.

use conslog::{
    Attr, Config, Level, LevelVar, Logger, MemorySink, Record, SinkFn, ThemeDef, Value,
};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn plain_logger(sink: &MemorySink, level: Level) -> Logger {
    Logger::builder()
        .sink(sink.clone())
        .level(level)
        .no_color(true)
        .build()
}

/// Lines without the default `date time` prefix.
fn lines(sink: &MemorySink) -> Vec<String> {
    sink.take()
        .lines()
        .map(|l| l.splitn(3, ' ').nth(2).unwrap_or_default().to_string())
        .collect()
}

#[test]
fn builder_default_level_is_info() {
    let logger = Logger::builder().sink(MemorySink::new()).build();
    assert!(logger.enabled(Level::INFO));
    assert!(!logger.enabled(Level::DEBUG));
    assert!(Logger::default().enabled(Level::WARN));
}

#[test]
fn level_helpers_write_their_level() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, Level::DEBUG);
    logger.debug("d", &[]);
    logger.info("i", &[Attr::int("n", 1)]);
    logger.warn("w", &[]);
    logger.error("e", &[Attr::error("err", io::Error::other("boom"))]);
    logger.log(Level::WARN.offset(2), "custom", &[]);

    assert_eq!(
        lines(&sink),
        ["DBG d", "INF i n=1", "WRN w", "ERR e err=boom", "WRN+2 custom"]
    );
}

#[test]
fn disabled_levels_skip_record_construction() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, Level::WARN);
    let evaluated = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&evaluated);

    logger.info(
        "hidden",
        &[Attr::new(
            "lazy",
            Value::lazy(move || {
                flag.store(true, Ordering::SeqCst);
                Value::from("x")
            }),
        )],
    );

    assert!(!evaluated.load(Ordering::SeqCst));
    assert!(sink.contents().is_empty());
}

#[test]
fn with_and_with_group_derive_loggers() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, Level::INFO);
    let derived = logger
        .with(&[Attr::string("foo", "bar")])
        .with_group("the-group")
        .with(&[Attr::string("bar", "baz")]);

    derived.info("group info", &[Attr::string("attr", "value")]);
    logger.info("plain", &[]);

    assert_eq!(
        lines(&sink),
        [
            "INF group info foo=bar the-group.bar=baz the-group.attr=value",
            "INF plain",
        ]
    );
}

#[test]
fn call_site_is_recorded() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .sink(sink.clone())
        .add_source(true)
        .no_color(true)
        .build();

    let (line, ()) = (line!(), logger.info("here", &[]));

    let out = sink.contents();
    assert!(
        out.contains(&format!("logger.rs:{line} > here")),
        "{out}"
    );
}

#[test]
fn write_errors_are_swallowed_by_log_and_reported_by_try() {
    let logger = Logger::builder()
        .sink(SinkFn(|_: &[u8]| -> io::Result<usize> {
            Err(io::Error::other("nope"))
        }))
        .build();
    logger.error("dropped", &[]);

    let rec = Record::new(Level::ERROR, "reported");
    assert!(logger.try_log_record(&rec).is_err());
    assert!(logger.try_log_record(&Record::new(Level::DEBUG, "filtered")).is_ok());
}

#[test]
fn log_record_respects_level() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, Level::WARN);
    logger.log_record(&Record::new(Level::INFO, "no").with_time(None));
    logger.log_record(&Record::new(Level::ERROR, "yes").with_time(None));
    assert_eq!(sink.contents(), "ERR yes\n");
}

#[test]
fn level_var_adjusts_live_logger() {
    let sink = MemorySink::new();
    let var = LevelVar::new(Level::ERROR);
    let logger = Logger::builder()
        .sink(sink.clone())
        .level(var.clone())
        .no_color(true)
        .build();

    logger.info("before", &[]);
    var.set(Level::INFO);
    logger.info("after", &[]);
    assert_eq!(lines(&sink), ["INF after"]);
}

#[test]
fn from_config_with_uses_handler_section() {
    let config = Config::parse(
        "[handler]\nlevel = \"debug\"\nno_color = true\ntime_format = \"\"\n",
    )
    .unwrap();
    let sink = MemorySink::new();
    let logger = Logger::from_config_with(&config, sink.clone()).unwrap();
    logger.debug("configured", &[]);
    assert_eq!(lines(&sink), ["DBG configured"]);
}

#[test]
fn from_config_with_rejects_unknown_theme() {
    let config = Config::parse("[handler]\ntheme = \"nope\"\n").unwrap();
    assert!(Logger::from_config_with(&config, MemorySink::new()).is_err());
}

#[test]
fn themed_logger_emits_escapes() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .sink(sink.clone())
        .theme(ThemeDef::default_theme())
        .build();
    logger.info("colored", &[]);
    assert!(sink.contents().contains("\x1b[0m"));
}
