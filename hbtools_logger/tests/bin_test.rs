//! Tests for bin.rs - exit status and error reporting of the `hblog` binary

use std::process::Command;

#[test]
fn test_setup_error_is_reported_once() {
    let output = Command::new(env!("CARGO_BIN_EXE_hblog"))
        .args(["--name", "svc", "--no-stdout", "unreachable"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("either `log_dir` must be a path").count(),
        1,
        "{stderr}"
    );
    assert!(stderr.starts_with("hblog fatal error: "), "{stderr}");
}

#[test]
fn test_successful_run_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_hblog"))
        .args(["--name", "svc", "--level", "error", "disk full"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("disk full"), "{stdout}");
}
