//! Integration tests for the relnag CLI
//!
//! These tests run the binary against a complete workspace: config,
//! phonebook and issue file in a temp directory.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a relnag command
fn relnag() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("relnag"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

const PHONEBOOK: &str = r#"[
    {"mail": "dev@corp.com", "aliases": ["dev@bugs.corp.org"], "manager": "lead@corp.com"},
    {"mail": "dev2@corp.com", "manager": "lead@corp.com"},
    {"mail": "qa@corp.com", "manager": "lead2@corp.com"},
    {"mail": "lead@corp.com", "manager": "dir@corp.com", "title": "Engineering Manager"},
    {"mail": "lead2@corp.com", "manager": "dir@corp.com", "title": "Engineering Manager"},
    {"mail": "dir@corp.com", "manager": "vp@corp.com", "title": "Director, Engineering"},
    {"mail": "vp@corp.com", "rank": "vp"}
]"#;

const ISSUES: &str = r#"[
    {"id": "1001", "summary": "Crash on startup", "assignee": "dev@bugs.corp.org",
     "tracking": "blocking", "url": "https://issues.corp.com/1001"},
    {"id": "1002", "summary": "Broken layout", "assignee": "dev2@corp.com", "tracking": "+"},
    {"id": "1003", "summary": "Flaky test", "assignee": "qa@corp.com", "tracking": "+"},
    {"id": "1004", "summary": "Outside patch", "assignee": "friend@elsewhere.org", "tracking": "blocking"}
]"#;

/// Workspace with config, phonebook and issues; release on 2026-11-09
fn setup_workspace(template: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    fs::write(dir.join("people.json"), PHONEBOOK).unwrap();
    fs::write(dir.join("issues.json"), ISSUES).unwrap();
    fs::write(
        dir.join("config.toml"),
        format!(
            r#"phonebook = "people.json"

[nag]
cc = ["drivers@corp.com"]
template = "{template}"

[nag.extra]
release = "Firefox 133"

[release]
dates = ["2026-11-09", "2026-12-07"]
"#
        ),
    )
    .unwrap();

    let config = dir.join("config.toml");
    let issues = dir.join("issues.json");
    (temp, config, issues)
}

fn run_args<'a>(config: &'a Path, issues: &'a Path, date: &'a str) -> Vec<&'a OsStr> {
    vec![
        OsStr::new("--config"),
        config.as_os_str(),
        OsStr::new("run"),
        OsStr::new("--issues"),
        issues.as_os_str(),
        OsStr::new("--date"),
        OsStr::new(date),
        OsStr::new("--dry-run"),
    ]
}

#[test]
fn test_version() {
    relnag()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("relnag"));
}

#[test]
fn test_version_subcommand_json() {
    relnag()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    relnag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Release-driven reminder escalation"));
}

#[test]
fn test_no_args_shows_info() {
    relnag().assert().success().stdout(predicate::str::contains("relnag --help"));
}

#[test]
fn test_policy_mid_band_wednesday() {
    relnag()
        .args(["policy", "--priority", "high", "--days", "12", "--weekday", "wed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nag days:    Mon, Thu"))
        .stdout(predicate::str::contains("Escalation:  director"))
        .stdout(predicate::str::contains("No nag on"));
}

#[test]
fn test_policy_json_after_release() {
    let output = relnag()
        .args(["--json", "policy", "--priority", "normal", "--days", "-1", "--weekday", "sun"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nag_today"], true);
    assert_eq!(json["escalation"], "vp");
    assert_eq!(json["nag_days"].as_array().unwrap().len(), 7);
}

#[test]
fn test_policy_from_release_schedule() {
    let (_temp, config, _issues) = setup_workspace("tracking_nag.html");

    let output = relnag()
        .arg("--config")
        .arg(&config)
        .args(["--json", "policy", "--priority", "high", "--date", "2026-10-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["days_until_release"], 25);
    assert_eq!(json["weekday"], "Thu");
    assert_eq!(json["nag_today"], true);
    assert_eq!(json["escalation"], "manager");
}

#[test]
fn test_dry_run_prepares_one_message_per_manager() {
    let (_temp, config, issues) = setup_workspace("tracking_nag.html");

    relnag()
        .args(run_args(&config, &issues, "2026-10-15"))
        .assert()
        .success()
        .stdout(predicate::str::contains("25 day(s) until the 2026-11-09 release"))
        .stdout(predicate::str::contains("Prepared 2 message(s):"))
        .stdout(predicate::str::contains("dev2@corp.com, dev@corp.com"))
        .stdout(predicate::str::contains("not a member:     1"))
        .stdout(predicate::str::contains("DRY RUN:"));
}

#[test]
fn test_dry_run_json_report() {
    let (_temp, config, issues) = setup_workspace("tracking_nag.html");

    let output = relnag().arg("--json").args(run_args(&config, &issues, "2026-10-15")).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["considered"], 4);
    assert_eq!(json["queued"], 3);
    assert_eq!(json["not_member"], 1);
    assert_eq!(json["sent"], 2);

    let prepared = json["prepared"].as_array().unwrap();
    assert_eq!(prepared[0]["target"], "lead2@corp.com");
    assert_eq!(prepared[1]["target"], "lead@corp.com");

    let body = prepared[1]["body"].as_str().unwrap();
    assert!(body.contains("Firefox 133"));
    assert!(body.contains("Crash on startup"));
    assert!(body.contains("Broken layout"));
}

#[test]
fn test_not_a_nag_day() {
    let (_temp, config, issues) = setup_workspace("tracking_nag.html");

    // Wednesday, 26 days out: weekly band, Thursdays only
    relnag()
        .args(run_args(&config, &issues, "2026-10-14"))
        .assert()
        .success()
        .stdout(predicate::str::contains("not a nag day:    4"))
        .stdout(predicate::str::contains("No messages to send."));
}

#[test]
fn test_unknown_template_fails() {
    let (_temp, config, issues) = setup_workspace("missing.html");

    relnag()
        .args(run_args(&config, &issues, "2026-10-15"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("template not found: missing.html"));
}

#[test]
fn test_no_upcoming_release_fails() {
    let (_temp, config, issues) = setup_workspace("tracking_nag.html");

    relnag()
        .args(run_args(&config, &issues, "2027-01-01"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no release scheduled on or after 2027-01-01"));
}

#[test]
fn test_missing_issue_file_fails() {
    let (temp, config, _issues) = setup_workspace("tracking_nag.html");
    let missing = temp.path().join("nope.json");

    relnag()
        .args(run_args(&config, &missing, "2026-10-15"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read issues"));
}
