// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(LogLevel::from_u8(7), None);
}

#[test]
fn test_log_level_new_rejects_out_of_range() {
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_log_level_try_from_matches_new() {
    assert_eq!(LogLevel::try_from(4_u8).ok(), Some(LogLevel::DEBUG));
    assert!(LogLevel::try_from(200_u8).is_err());
    assert_eq!(u8::from(LogLevel::WARN), 2);
}

#[test]
fn test_log_level_filter_directives() {
    assert_eq!(LogLevel::SILENT.filter_directive(), "off");
    assert_eq!(LogLevel::WARN.filter_directive(), "warn");
    assert_eq!(LogLevel::DEBUG.filter_directive(), "debug");
    // dump has no tracing counterpart, it rides on trace
    assert_eq!(LogLevel::DUMP.filter_directive(), "trace");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_file_level(LogLevel::DUMP)
        .with_log_file("churn.log".to_string())
        .with_show_target(true)
        .build();

    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.file_level(), LogLevel::DUMP);
    assert_eq!(config.log_file(), Some("churn.log"));
    assert!(config.show_target());
}

#[test]
fn test_log_config_maybe_log_file() {
    let config = LogConfig::builder()
        .maybe_with_log_file(None::<String>)
        .build();
    assert!(config.log_file().is_none());

    let config = LogConfig::builder()
        .maybe_with_log_file(Some("out/churn.log".to_string()))
        .build();
    assert_eq!(config.log_file(), Some("out/churn.log"));
}
