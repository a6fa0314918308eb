//! End-to-end integration tests for the logging flow.
//!
//! Tests the full pipeline: log → list → summary → audit → delete
//! against a temporary database through the built binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

fn fp_binary() -> String {
    env!("CARGO_BIN_EXE_fp").to_string()
}

/// Temp home plus a config file pointing at a temp database.
struct Harness {
    home: TempDir,
    config: NamedTempFile,
}

impl Harness {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let db_path = home.path().join("fp.db");

        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, r#"database_path = "{}""#, db_path.display()).unwrap();
        writeln!(config, r#"user_id = "e2e""#).unwrap();
        config.flush().unwrap();

        Self { home, config }
    }

    fn run(&self, args: &[&str]) -> Output {
        run_in(self.home.path(), self.config.path(), args)
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "fp {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

fn run_in(home: &Path, config: &Path, args: &[&str]) -> Output {
    Command::new(fp_binary())
        .env("HOME", home)
        .env_remove("FP_DATABASE_PATH")
        .env_remove("FP_USER_ID")
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("failed to run fp")
}

fn logged_id(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("ID: "))
        .expect("log output should include the activity ID")
        .to_string()
}

#[test]
fn test_log_list_summary_delete() {
    let harness = Harness::new();

    let car = harness.run_ok(&["log", "car", "20", "--date", "2025-03-14"]);
    assert!(car.starts_with("Added 20 km of Car Travel on 2025-03-14: 4.20 kg CO₂"));
    let car_id = logged_id(&car);

    harness.run_ok(&["log", "non_vegetarian_meal", "1", "--date", "2025-03-14"]);
    harness.run_ok(&["log", "electricity", "10", "--date", "2025-03-02"]);

    let listed = harness.run_ok(&["list"]);
    let lines: Vec<_> = listed.lines().collect();
    assert_eq!(lines.len(), 3);
    // Same day: newest insertion first
    assert!(lines[0].contains("Non-Veg Meal"));
    assert!(lines[1].contains(&car_id));
    assert!(lines[2].contains("Electricity"));

    let summary = harness.run_ok(&["summary", "--date", "2025-03-14", "--json"]);
    let snapshot: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(snapshot["status"]["status"], "medium");
    assert_eq!(snapshot["day_count"], 2);
    assert_eq!(snapshot["activity_count"], 3);
    let monthly = snapshot["monthly_total"].as_f64().unwrap();
    assert!((monthly - 15.7).abs() < 1e-9);

    let audit = harness.run_ok(&["audit"]);
    assert_eq!(audit, "All 3 activities match their stamped carbon.\n");

    let deleted = harness.run_ok(&["delete", &car_id]);
    assert_eq!(deleted, format!("Activity deleted: {car_id} (2 remaining)\n"));
    let listed = harness.run_ok(&["list"]);
    assert_eq!(listed.lines().count(), 2);
    assert!(!listed.contains(&car_id));
}

#[test]
fn test_log_rejects_invalid_input() {
    let harness = Harness::new();

    let future = harness.run(&["log", "car", "5", "--date", "9999-12-31"]);
    assert!(!future.status.success());

    let negative = harness.run(&["log", "car", "-5", "--date", "2025-03-14"]);
    assert!(!negative.status.success());

    let unknown = harness.run(&["log", "plane", "5"]);
    assert!(!unknown.status.success());

    let listed = harness.run_ok(&["list"]);
    assert!(listed.starts_with("No activities logged yet."));
}

#[test]
fn test_delete_unknown_id_fails() {
    let harness = Harness::new();
    let output = harness.run(&["delete", "does-not-exist"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no activity with ID does-not-exist"));
}

#[test]
fn test_preview_does_not_store() {
    let harness = Harness::new();

    let preview = harness.run_ok(&["preview", "non_vegetarian_meal", "2"]);
    assert!(preview.contains("Estimated Carbon Emission: 6.60 kg CO₂"));

    let partial = harness.run_ok(&["preview", "car"]);
    assert!(partial.contains("Enter a quantity in km"));

    let listed = harness.run_ok(&["list"]);
    assert!(listed.starts_with("No activities logged yet."));
}

#[test]
fn test_activities_are_scoped_by_configured_user() {
    let harness = Harness::new();
    harness.run_ok(&["log", "bike", "4", "--date", "2025-03-14"]);

    let other = Command::new(fp_binary())
        .env("HOME", harness.home.path())
        .env("FP_USER_ID", "someone-else")
        .arg("--config")
        .arg(harness.config.path())
        .arg("list")
        .output()
        .unwrap();
    assert!(other.status.success());
    assert!(String::from_utf8_lossy(&other.stdout).starts_with("No activities logged yet."));
}
