use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn signal_toolkit() -> Command {
    Command::cargo_bin("signal-toolkit").unwrap()
}

fn png_count(dir: &std::path::Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "png"))
        .count()
}

// =============================================================================
// GENERAL
// =============================================================================

#[test]
fn test_no_args_shows_help() {
    signal_toolkit()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    signal_toolkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("signal-toolkit"));
}

#[test]
fn test_help_flag() {
    signal_toolkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("interactive"));
}

// =============================================================================
// BATCH SUBCOMMAND
// =============================================================================

#[test]
fn test_batch_writes_three_plots() {
    let dir = tempfile::tempdir().unwrap();
    let plots = dir.path().join("plots");

    signal_toolkit()
        .args(["batch", "--noise-level", "0", "--seed", "1", "--output-dir"])
        .arg(&plots)
        .assert()
        .success()
        .stdout(predicate::str::contains("Peak: noisy 50.00 Hz (1.000)"))
        .stdout(predicate::str::contains("Saved: ").count(3))
        .stdout(predicate::str::contains("signal_comparison_"))
        .stdout(predicate::str::contains("noisy_fft_"))
        .stdout(predicate::str::contains("filtered_fft_"));

    assert_eq!(png_count(&plots), 3);
}

#[test]
fn test_batch_no_plots() {
    let dir = tempfile::tempdir().unwrap();
    let plots = dir.path().join("plots");

    signal_toolkit()
        .args(["batch", "--frequency", "20", "--cutoff", "40", "--no-plots", "--output-dir"])
        .arg(&plots)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:").not());

    assert!(!plots.exists());
}

#[test]
fn test_batch_invalid_cutoff_fails() {
    let dir = tempfile::tempdir().unwrap();

    signal_toolkit()
        .args(["batch", "--cutoff", "500", "--no-plots", "--output-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Nyquist"));
}

#[test]
fn test_batch_window_too_large_fails() {
    signal_toolkit()
        .args(["batch", "--window", "5000", "--no-plots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("window size 5000"));
}

#[test]
fn test_batch_config_file_with_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "frequency": 20.0, "noise_level": 0.0, "cutoff": 40.0 }"#).unwrap();

    signal_toolkit()
        .args(["batch", "--no-plots", "--frequency", "25", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Peak: noisy 25.00 Hz"));
}

#[test]
fn test_batch_missing_config_fails() {
    signal_toolkit()
        .args(["batch", "--no-plots", "--config", "/nonexistent/config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

// =============================================================================
// INTERACTIVE SUBCOMMAND
// =============================================================================

#[test]
fn test_interactive_reports_errors_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let plots = dir.path().join("plots");

    signal_toolkit()
        .args(["interactive", "--seed", "3", "--output-dir"])
        .arg(&plots)
        .write_stdin("abc\n1\n0.3\n60\n50\n1\n0.3\n600\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:").count(2))
        .stdout(predicate::str::contains("Saved: ").count(3));

    assert_eq!(png_count(&plots), 3);
}

#[test]
fn test_interactive_empty_input_exits_cleanly() {
    signal_toolkit()
        .args(["interactive", "--no-plots"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frequency (Hz)"));
}
