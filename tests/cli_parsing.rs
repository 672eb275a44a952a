//! Tests for CLI argument parsing.

use clap::Parser;
use soc_status::{Config, LogFormat, LogLevel};

#[test]
fn test_cli_defaults() {
    let config = Config::try_parse_from(["soc_status"]).expect("Should parse bare invocation");

    assert_eq!(config.api_base, "http://localhost:5000");
    assert_eq!(config.poll_interval_ms, 3000);
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.max_consecutive_failures, 0);
    assert_eq!(config.duration_seconds, 0);
    assert_eq!(config.routes.len(), 7);
    // LogLevel doesn't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    // For LogFormat, we can match on variants
    match config.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("Should default to Plain format"),
    }
}

#[test]
fn test_cli_with_options() {
    let args = [
        "soc_status",
        "--api-base",
        "http://siem.lab:5000",
        "--poll-interval-ms",
        "1000",
        "--timeout-seconds",
        "3",
        "--max-consecutive-failures",
        "5",
        "--duration-seconds",
        "30",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args).expect("Should parse full invocation");

    assert_eq!(config.api_base, "http://siem.lab:5000");
    assert_eq!(config.poll_interval_ms, 1000);
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.max_consecutive_failures, 5);
    assert_eq!(config.duration_seconds, 30);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    match config.log_format {
        LogFormat::Json => {}
        LogFormat::Plain => panic!("Should parse as Json format"),
    }
}

#[test]
fn test_cli_routes_split_on_commas() {
    let args = ["soc_status", "--routes", "/,/alerts,/globe"];
    let config = Config::try_parse_from(args).expect("Should parse routes list");

    assert_eq!(config.routes, vec!["/", "/alerts", "/globe"]);
}

#[test]
fn test_cli_routes_flag_repeats_append() {
    let args = ["soc_status", "--routes", "/", "--routes", "/network"];
    let config = Config::try_parse_from(args).expect("Should parse repeated flags");

    assert_eq!(config.routes, vec!["/", "/network"]);
}

#[test]
fn test_cli_all_log_levels_parse() {
    for (arg_value, expected) in [
        ("error", LogLevel::Error),
        ("warn", LogLevel::Warn),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
    ] {
        let args = ["soc_status", "--log-level", arg_value];
        let config = Config::try_parse_from(args)
            .unwrap_or_else(|_| panic!("Should parse log-level={}", arg_value));
        assert_eq!(
            log::LevelFilter::from(config.log_level.clone()),
            log::LevelFilter::from(expected),
            "log-level={} should parse correctly",
            arg_value
        );
    }
}

#[test]
fn test_cli_rejects_non_numeric_interval() {
    let args = ["soc_status", "--poll-interval-ms", "fast"];
    let result = Config::try_parse_from(args);

    assert!(result.is_err(), "Should fail on a non-numeric interval");
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("invalid value") || error_msg.contains("fast"),
        "Error message should mention the bad value: {}",
        error_msg
    );
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let args = ["soc_status", "--refresh-rate", "1"];
    let result = Config::try_parse_from(args);

    assert!(result.is_err(), "Should fail on an unknown flag");
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("unexpected") || error_msg.contains("unrecognized"),
        "Error message should mention the unknown flag: {}",
        error_msg
    );
}

#[test]
fn test_cli_rejects_invalid_log_level() {
    let args = ["soc_status", "--log-level", "loud"];
    let result = Config::try_parse_from(args);

    assert!(result.is_err(), "Should fail on an invalid log level");
}
