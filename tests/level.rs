use conslog::{Level, LevelVar, Leveler};

#[test]
fn named_levels_are_ordered() {
    assert!(Level::DEBUG < Level::INFO);
    assert!(Level::INFO < Level::WARN);
    assert!(Level::WARN < Level::ERROR);
    assert_eq!(Level::default(), Level::INFO);
    assert_eq!(Level::all(), [Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR]);
}

#[test]
fn display_shows_offset_from_threshold() {
    assert_eq!(Level::INFO.to_string(), "INFO");
    assert_eq!(Level::WARN.offset(2).to_string(), "WARN+2");
    assert_eq!(Level::DEBUG.offset(-1).to_string(), "DEBUG-1");
    assert_eq!(Level::new(3).to_string(), "INFO+3");
}

#[test]
fn short_names() {
    assert_eq!(Level::DEBUG.short_name(), "DBG");
    assert_eq!(Level::INFO.short_name(), "INF");
    assert_eq!(Level::WARN.offset(1).short_name(), "WRN");
    assert_eq!(Level::ERROR.offset(10).short_name(), "ERR");
    assert_eq!(Level::ERROR.offset(10).delta(), 10);
}

#[test]
fn offset_saturates() {
    assert_eq!(Level::new(i32::MAX).offset(1).value(), i32::MAX);
    assert_eq!(Level::new(i32::MIN).offset(-1).value(), i32::MIN);
}

#[test]
fn parse_names_aliases_and_offsets() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::DEBUG);
    assert_eq!("INF".parse::<Level>().unwrap(), Level::INFO);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::WARN);
    assert_eq!("err".parse::<Level>().unwrap(), Level::ERROR);
    assert_eq!("warn+2".parse::<Level>().unwrap(), Level::new(6));
    assert_eq!("debug-1".parse::<Level>().unwrap(), Level::new(-5));
    assert_eq!(" -4 ".parse::<Level>().unwrap(), Level::DEBUG);
}

#[test]
fn parse_rejects_garbage() {
    assert!("verbose".parse::<Level>().is_err());
    assert!("info+x".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn display_round_trips_through_parse() {
    for level in [Level::DEBUG.offset(-3), Level::INFO, Level::WARN.offset(1), Level::ERROR] {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
}

#[test]
fn level_var_is_shared_between_clones() {
    let var = LevelVar::new(Level::INFO);
    let other = var.clone();
    other.set(Level::ERROR);
    assert_eq!(var.get(), Level::ERROR);
    assert_eq!(var.level(), Level::ERROR);
    assert_eq!(LevelVar::default().get(), Level::INFO);
}
