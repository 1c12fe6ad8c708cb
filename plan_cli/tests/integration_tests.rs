//! Integration tests for the fitplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Profile and catalog loading from flags
//! - Day, week, fasting and targets output
//! - CSV/JSON export
//! - Catalog validation exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REFERENCE_PROFILE: &str = r#"{
    "gender": "male",
    "date_of_birth": "1995-01-01",
    "primary_goal": "get_fit_toned",
    "activity_level": "lightly_active",
    "training_frequency": "4-5",
    "height_cm": 175,
    "weight_kg": 70
}"#;

const OBESE_PROFILE: &str = r#"{
    "gender": "female",
    "primary_goal": "lose_weight",
    "activity_level": "sedentary",
    "bmi": 32.0,
    "height_cm": 165,
    "weight_kg": 87
}"#;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI with config and data dirs isolated under `home`
fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitplan"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_profile(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("profile.json");
    fs::write(&path, contents).expect("Failed to write profile");
    path
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is not valid JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Personalized fasting, training and meal plans",
        ));
}

#[test]
fn test_default_command_shows_day_one() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);

    cli(temp_dir.path())
        .arg("--profile")
        .arg(&profile)
        .arg("--today")
        .arg("2025-06-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 (week 1)"))
        .stdout(predicate::str::contains("Intake:"));
}

#[test]
fn test_missing_configured_profile_uses_defaults() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("day")
        .assert()
        .success()
        .stderr(predicate::str::contains("planning with default answers"));
}

#[test]
fn test_explicit_missing_profile_fails() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("--profile")
        .arg(temp_dir.path().join("nope.json"))
        .arg("day")
        .assert()
        .failure();
}

#[test]
fn test_malformed_profile_fails() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), "{ not json");

    cli(temp_dir.path())
        .arg("--profile")
        .arg(&profile)
        .arg("fasting")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Json"));
}

#[test]
fn test_day_json() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);

    let day = json_output(
        cli(temp_dir.path())
            .arg("--profile")
            .arg(&profile)
            .arg("--today")
            .arg("2025-06-01")
            .arg("--json")
            .arg("day")
            .arg("--day")
            .arg("2"),
    );

    assert_eq!(day["day_number"], 2);
    assert_eq!(day["week_number"], 1);
    assert_eq!(day["is_rest_day"], false);
    assert_eq!(day["meal_plan"]["meals"].as_array().unwrap().len(), 2);
    assert_eq!(day["exercise_plan"]["exercises"].as_array().unwrap().len(), 6);
    assert_eq!(day["meal_plan"]["daily_calorie_target"], 2267);
}

#[test]
fn test_rest_day_json() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);

    let day = json_output(
        cli(temp_dir.path())
            .arg("--profile")
            .arg(&profile)
            .arg("--json")
            .arg("day")
            .arg("--day")
            .arg("4"),
    );

    assert_eq!(day["is_rest_day"], true);
    assert!(day["exercise_plan"]["exercises"].as_array().unwrap().is_empty());
    assert_eq!(day["exercise_plan"]["total_sets"], 0);
    assert_eq!(day["meal_plan"]["meals"].as_array().unwrap().len(), 2);
}

#[test]
fn test_day_zero_rejected() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("day")
        .arg("--day")
        .arg("0")
        .assert()
        .failure();
}

#[test]
fn test_week_json() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);

    let week = json_output(
        cli(temp_dir.path())
            .arg("--profile")
            .arg(&profile)
            .arg("--json")
            .arg("week")
            .arg("--week")
            .arg("2"),
    );

    assert_eq!(week["start_day"], 8);
    assert_eq!(week["week_number"], 2);
    let days = week["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day_number"], 8);
    assert_eq!(days[6]["day_number"], 14);
    assert_eq!(week["summary"]["training_days"], 5);
    assert_eq!(week["summary"]["rest_days"], 2);
}

#[test]
fn test_week_text_summary() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);

    cli(temp_dir.path())
        .arg("--profile")
        .arg(&profile)
        .arg("week")
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEK 1 (days 1-7)"))
        .stdout(predicate::str::contains("5 training / 2 rest days"));
}

#[test]
fn test_week_far_in_the_future() {
    let temp_dir = setup_test_dir();

    let week = json_output(
        cli(temp_dir.path())
            .arg("--json")
            .arg("week")
            .arg("--week")
            .arg("700000000"),
    );

    let days = week["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[6]["day_number"], u64::from(u32::MAX));

    cli(temp_dir.path())
        .arg("week")
        .arg("--week")
        .arg("700000000")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("-{})", u32::MAX)));
}

#[test]
fn test_fasting_obese_profile() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), OBESE_PROFILE);

    let plan = json_output(
        cli(temp_dir.path())
            .arg("--profile")
            .arg(&profile)
            .arg("--json")
            .arg("fasting"),
    );

    assert_eq!(plan["protocol"], "18:6");
    assert_eq!(plan["meal_count_intent"], 1);
    assert_eq!(plan["bmi_category"], "obese");

    cli(temp_dir.path())
        .arg("--profile")
        .arg(&profile)
        .arg("fasting")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eating window: 12:00-18:00"));
}

#[test]
fn test_targets_reference_profile() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);

    let targets = json_output(
        cli(temp_dir.path())
            .arg("--profile")
            .arg(&profile)
            .arg("--today")
            .arg("2025-06-01")
            .arg("--json")
            .arg("targets"),
    );

    assert_eq!(targets["age_years"], 30);
    assert_eq!(targets["daily_calories"], 2267);
    assert_eq!(targets["daily_protein_g"], 98);
}

#[test]
fn test_invalid_today_rejected() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("--today")
        .arg("June 1st")
        .arg("targets")
        .assert()
        .failure();
}

#[test]
fn test_export_csv() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);
    let out = temp_dir.path().join("exports/plan.csv");

    cli(temp_dir.path())
        .arg("--profile")
        .arg(&profile)
        .arg("export")
        .arg("--weeks")
        .arg("2")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 14 days"));

    let csv_content = fs::read_to_string(&out).expect("Failed to read CSV");
    let mut lines = csv_content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("day,week,rest_day"));
    assert_eq!(lines.count(), 14);
}

#[test]
fn test_export_json() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), REFERENCE_PROFILE);
    let out = temp_dir.path().join("plan.json");

    cli(temp_dir.path())
        .arg("--profile")
        .arg(&profile)
        .arg("export")
        .arg("--weeks")
        .arg("3")
        .arg("--out")
        .arg(&out)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let weeks: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let weeks = weeks.as_array().unwrap();
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[2]["start_day"], 15);
}

#[test]
fn test_export_unknown_format() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("export")
        .arg("--out")
        .arg(temp_dir.path().join("plan.pdf"))
        .arg("--format")
        .arg("pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn test_catalog_default_is_valid() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("51 exercises, 27 meals"))
        .stdout(predicate::str::contains("Catalog is valid"));
}

#[test]
fn test_catalog_invalid_file_fails() {
    let temp_dir = setup_test_dir();
    let catalog = temp_dir.path().join("catalog.json");
    fs::write(&catalog, r#"{"exercises": [], "meals": []}"#).unwrap();

    cli(temp_dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog validation errors"))
        .stderr(predicate::str::contains("no Dinner meals"));
}

#[test]
fn test_empty_catalog_day_is_under_populated() {
    let temp_dir = setup_test_dir();
    let catalog = temp_dir.path().join("catalog.json");
    fs::write(&catalog, r#"{"exercises": [], "meals": []}"#).unwrap();

    let day = json_output(
        cli(temp_dir.path())
            .arg("--catalog")
            .arg(&catalog)
            .arg("--json")
            .arg("day"),
    );

    assert_eq!(day["under_populated"], true);
    assert!(day["meal_plan"]["meals"].as_array().unwrap().is_empty());
}

#[test]
fn test_config_file_sets_profile_and_json() {
    let temp_dir = setup_test_dir();
    let profile = write_profile(temp_dir.path(), OBESE_PROFILE);
    let config_dir = temp_dir.path().join("config/fitplan");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[profile]\npath = {:?}\n\n[output]\nformat = \"json\"\n",
            profile.display().to_string()
        ),
    )
    .unwrap();

    let plan = json_output(cli(temp_dir.path()).arg("fasting"));
    assert_eq!(plan["protocol"], "18:6");
}
