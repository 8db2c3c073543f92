//! Tests for cli.rs - `hblog` argument handling and message delivery

mod common;

use clap::Parser;
use common::capturing_factory;
use hbtools_logger::cli::{Cli, run_with};
use hbtools_logger::ConsoleStyle;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_messages_are_logged_at_requested_level() {
    let (factory, console) = capturing_factory(ConsoleStyle::Plain);
    let cli = Cli::try_parse_from([
        "hblog", "--name", "svc", "--level", "warning", "low disk", "high load",
    ])
    .unwrap();

    run_with(&cli, &factory).unwrap();

    assert_eq!(
        console.lines(),
        vec!["WARNING - low disk", "WARNING - high load"]
    );
}

#[test]
fn test_messages_below_threshold_are_dropped() {
    let (factory, console) = capturing_factory(ConsoleStyle::Plain);
    let cli = Cli::try_parse_from([
        "hblog",
        "--name",
        "svc",
        "--verbose-level",
        "error",
        "--level",
        "info",
        "ignored",
    ])
    .unwrap();

    run_with(&cli, &factory).unwrap();

    assert!(console.contents().is_empty());
}

#[test]
fn test_file_only_run_writes_log_file() {
    let temp_dir = tempdir().unwrap();
    let log_dir = temp_dir.path().join("logs");
    let (factory, console) = capturing_factory(ConsoleStyle::Plain);
    let cli = Cli::try_parse_from([
        "hblog",
        "--name",
        "job",
        "--log-dir",
        log_dir.to_str().unwrap(),
        "--no-stdout",
        "finished",
    ])
    .unwrap();

    run_with(&cli, &factory).unwrap();

    assert!(console.contents().is_empty());
    let content = fs::read_to_string(log_dir.join("job.log")).unwrap();
    assert!(content.trim_end().ends_with(" - job - INFO - finished"), "{content}");
}

#[test]
fn test_no_sink_is_reported() {
    let (factory, _console) = capturing_factory(ConsoleStyle::Plain);
    let cli = Cli::try_parse_from(["hblog", "--name", "svc", "--no-stdout", "msg"]).unwrap();

    let err = run_with(&cli, &factory).unwrap_err();
    assert!(
        format!("{err:#}").contains("either `log_dir` must be a path"),
        "{err:#}"
    );
}

#[test]
fn test_options_from_config_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("logging.toml");
    fs::write(
        &config_path,
        r#"
[loggers.svc]
verbose_level = "debug"
"#,
    )
    .unwrap();

    let (factory, console) = capturing_factory(ConsoleStyle::Plain);
    let cli = Cli::try_parse_from([
        "hblog",
        "--name",
        "svc",
        "--config",
        config_path.to_str().unwrap(),
        "--level",
        "debug",
        "configured",
    ])
    .unwrap();

    run_with(&cli, &factory).unwrap();

    assert_eq!(console.lines(), vec!["DEBUG - configured"]);
}

#[test]
fn test_config_without_logger_table_fails() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("logging.toml");
    fs::write(&config_path, "[loggers.other]\n").unwrap();

    let (factory, _console) = capturing_factory(ConsoleStyle::Plain);
    let cli = Cli::try_parse_from([
        "hblog",
        "--name",
        "svc",
        "--config",
        config_path.to_str().unwrap(),
        "msg",
    ])
    .unwrap();

    let err = run_with(&cli, &factory).unwrap_err();
    assert!(err.to_string().contains("[loggers.svc]"), "{err}");
    assert!(factory.is_empty());
}
