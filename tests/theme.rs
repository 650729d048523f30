//! Styled output: every colorized segment is wrapped in its role's SGR
//! sequence and a reset, in line order.

use chrono::Local;
use conslog::{
    Attr, ConsoleHandler, Error, Handler, HandlerOptions, Level, MemorySink, Record, Sgr, Source,
    Style, Theme, ThemeDef, TimeFormat,
};
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// Every `ESC [ ... m` sequence in `s`, in order.
fn escapes(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s;
    while let Some(start) = rest.find('\x1b') {
        let tail = &rest[start..];
        let end = tail.find('m').map_or(tail.len(), |i| i + 1);
        out.push(tail[..end].to_string());
        rest = &tail[end..];
    }
    out
}

fn push_styled(expected: &mut Vec<String>, style: &Style) {
    if !style.is_empty() {
        expected.push(style.as_str().to_string());
        expected.push(Style::RESET.to_string());
    }
}

/// The escape sequences a line written by `theme` should contain.
fn expected_escapes(theme: &ThemeDef, level: Level, attrs: &[bool]) -> Vec<String> {
    let mut expected = Vec::new();
    push_styled(&mut expected, theme.timestamp());
    push_styled(&mut expected, theme.level(level));
    push_styled(&mut expected, theme.source());
    push_styled(&mut expected, theme.attr_key());
    if level >= Level::INFO {
        push_styled(&mut expected, theme.message());
    } else {
        push_styled(&mut expected, theme.message_debug());
    }
    for is_error in attrs {
        push_styled(&mut expected, theme.attr_key());
        if *is_error {
            push_styled(&mut expected, theme.attr_value_error());
        } else {
            push_styled(&mut expected, theme.attr_value());
        }
    }
    expected
}

#[test]
fn builtin_themes_wrap_each_segment() {
    for theme in [ThemeDef::default_theme(), ThemeDef::bright()] {
        let sink = MemorySink::new();
        let h = ConsoleHandler::new(
            sink.clone(),
            HandlerOptions::new()
                .level(Level::DEBUG.offset(-1))
                .add_source(true)
                .time_format(TimeFormat::KITCHEN)
                .theme(theme.clone()),
        )
        .with_attrs(&[Attr::int("pid", 37556)]);

        let now = Local::now();
        let source = Source::caller();
        let cases: Vec<(Level, &str, Vec<Attr>)> = vec![
            (
                Level::DEBUG.offset(-1),
                "Access",
                vec![Attr::string("database", "myapp"), Attr::string("host", "localhost:4962")],
            ),
            (
                Level::DEBUG,
                "Access",
                vec![Attr::string("database", "myapp"), Attr::string("host", "localhost:4962")],
            ),
            (Level::INFO, "Starting listener", vec![Attr::string("listen", ":8080")]),
            (
                Level::INFO.offset(1),
                "Access",
                vec![
                    Attr::string("method", "GET"),
                    Attr::string("path", "/users"),
                    Attr::new("resp_time", Duration::from_millis(10)),
                ],
            ),
            (
                Level::WARN,
                "Slow request",
                vec![
                    Attr::string("method", "POST"),
                    Attr::string("path", "/posts"),
                    Attr::new("resp_time", Duration::from_secs(532)),
                ],
            ),
            (
                Level::ERROR.offset(1),
                "Database connection lost",
                vec![
                    Attr::string("database", "myapp"),
                    Attr::error("error", io::Error::other("connection reset by peer")),
                ],
            ),
        ];

        for (level, msg, attrs) in cases {
            let mut kinds = vec![false];
            kinds.extend(attrs.iter().map(|a| a.key == "error"));
            let rec = Record::new(level, msg)
                .at(&now)
                .with_source(Some(source.clone()))
                .add_attrs(attrs);
            h.handle(&rec).unwrap();

            let line = sink.take();
            assert_eq!(
                escapes(&line),
                expected_escapes(&theme, level, &kinds),
                "{} {level}: {line:?}",
                theme.name
            );
            assert!(line.ends_with('\n'));
        }
    }
}

#[test]
fn no_color_overrides_theme() {
    let sink = MemorySink::new();
    let h = ConsoleHandler::new(
        sink.clone(),
        HandlerOptions::new().no_color(true).theme(ThemeDef::bright()),
    );
    h.handle(
        &Record::new(Level::ERROR, "boom")
            .add(Attr::error("err", io::Error::other("x"))),
    )
    .unwrap();
    assert!(!sink.contents().contains('\x1b'));
    assert_eq!(h.theme().name(), "Plain");
}

#[test]
fn level_band_resolves_at_or_below() {
    let theme = ThemeDef::default_theme();
    assert_eq!(theme.level(Level::ERROR.offset(3)), &theme.level_error);
    assert_eq!(theme.level(Level::WARN.offset(3)), &theme.level_warn);
    assert_eq!(theme.level(Level::INFO), &theme.level_info);
    assert_eq!(theme.level(Level::INFO.offset(-1)), &theme.level_debug);
    assert_eq!(theme.level(Level::new(-100)), &theme.level_debug);
}

#[test]
fn style_composes_sgr_codes() {
    assert_eq!(Style::new(&[Sgr::Bold, Sgr::Red]).as_str(), "\x1b[1;31m");
    assert_eq!(Style::new(&[Sgr::BrightBlack]).as_str(), "\x1b[90m");
    assert!(Style::new(&[]).is_empty());
    assert_eq!(
        Style::parse("bold #ff5555").unwrap().as_str(),
        "\x1b[1;38;2;255;85;85m"
    );
}

#[test]
fn style_parse_rejects_unknown_names() {
    assert!(matches!(Style::parse("sparkly"), Err(Error::InvalidStyle(_))));
}

#[test]
fn by_name_is_case_insensitive() {
    assert_eq!(ThemeDef::by_name("BRIGHT"), Some(ThemeDef::bright()));
    assert_eq!(ThemeDef::by_name("plain"), Some(ThemeDef::plain()));
    assert_eq!(ThemeDef::by_name("solarized"), None);
}

#[test]
fn from_roles_overrides_base() {
    let roles = HashMap::from([("level_error".to_string(), "underline magenta".to_string())]);
    let theme = ThemeDef::from_roles("mine", ThemeDef::default_theme(), &roles).unwrap();
    assert_eq!(theme.name(), "mine");
    assert_eq!(theme.level_error().as_str(), "\x1b[4;35m");
    assert_eq!(theme.level_warn(), ThemeDef::default_theme().level_warn());

    let bad = HashMap::from([("headline".to_string(), "bold".to_string())]);
    assert!(ThemeDef::from_roles("bad", ThemeDef::plain(), &bad).is_err());
}
