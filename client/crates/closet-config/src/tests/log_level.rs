use crate::LogLevel;

use log::LevelFilter;

#[test]
fn given_mixed_case_level_when_parsed_then_matches() {
    let level: LogLevel = "DeBuG".parse().unwrap();
    assert_eq!(*level, LevelFilter::Debug);
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    let level: LogLevel = "verbose".parse().unwrap();
    assert_eq!(*level, LevelFilter::Info);
}

#[test]
fn given_off_when_converted_then_level_filter_off() {
    let level = LogLevel::parse_lenient("off");
    assert_eq!(LevelFilter::from(level), LevelFilter::Off);
}
