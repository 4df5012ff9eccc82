//! Integration tests for the `blyncctl` binary.
//!
//! These tests exercise the CLI via `assert_cmd`. Commands that would touch
//! hardware run under `--dry-run` (simulated backend) so they pass on hosts
//! with no device attached.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("blyncctl")
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("blyncctl"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── Argument validation at the CLI boundary ──

#[test]
fn cli_rejects_unknown_color() {
    cli()
        .args(["--dry-run", "color", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn cli_rejects_bad_hex_color() {
    cli()
        .args(["--dry-run", "color", "#GGHHII"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn cli_rejects_unknown_speed() {
    cli()
        .args(["--dry-run", "color", "red", "--flash", "--speed", "sometimes"])
        .assert()
        .failure();
}

// ── Dry-run command behavior ──

#[test]
fn dry_run_color_prints_simulated_report() {
    cli()
        .args(["--dry-run", "color", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[simulate] #FF0000 solid"))
        .stdout(predicate::str::contains("Light: #FF0000"));
}

#[test]
fn dry_run_color_flash_fast() {
    cli()
        .args(["--dry-run", "color", "blue", "--flash", "--speed", "fast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[simulate] #0000FF flash fast"))
        .stdout(predicate::str::contains("(flashing)"));
}

#[test]
fn dry_run_color_hex_argument() {
    cli()
        .args(["--dry-run", "color", "#10AB30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[simulate] #10AB30 solid"));
}

#[test]
fn dry_run_off_goes_dark() {
    cli()
        .args(["--dry-run", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[simulate] #000000 solid"))
        .stdout(predicate::str::contains("Light: off"));
}

#[test]
fn dry_run_pulse_bounded_iterations() {
    let output = cli()
        .args([
            "--dry-run",
            "pulse",
            "green",
            "--iterations",
            "2",
            "--interval-ms",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done."))
        .get_output()
        .stdout
        .clone();

    // Two pulses: on, off, on, off.
    let text = String::from_utf8_lossy(&output);
    assert_eq!(text.matches("[simulate] #00FF00 solid").count(), 2);
    assert_eq!(text.matches("[simulate] #000000 solid").count(), 2);
}

// ── Device-requiring/looping commands exercised via --help ──

#[test]
fn cli_cycle_help_succeeds() {
    cli()
        .args(["cycle", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle"));
}

#[test]
fn cli_pulse_help_succeeds() {
    cli()
        .args(["pulse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pulse"));
}

// ── Informational commands ──

#[test]
fn cli_devices_succeeds() {
    cli().arg("devices").assert().success();
}

#[test]
fn cli_devices_json_produces_valid_json() {
    let output = cli()
        .args(["--json", "devices"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("devices --json should produce valid JSON");
    assert!(json["count"].is_number());
    assert!(json["devices"].is_array());
}

#[test]
fn cli_status_succeeds() {
    cli().arg("status").assert().success();
}

#[test]
fn cli_status_json_produces_valid_json() {
    let output = cli()
        .args(["--json", "status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("status --json should produce valid JSON");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"].is_object());
}

#[test]
fn cli_config_json_produces_valid_json() {
    let output = cli()
        .args(["--json", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert!(
        json["settings"].is_object(),
        "JSON output should contain 'settings' object"
    );
    assert!(
        json["config_file"].is_string() || json["config_file"].is_null(),
        "config_file should be string or null"
    );
}
