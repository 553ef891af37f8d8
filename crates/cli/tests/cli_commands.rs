use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn windfarm(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("windfarm").expect("binary");
    cmd.env_remove("WINDFARM_DATA_DIR")
        .env_remove("WINDFARM_PROMPTS_DIR")
        .env_remove("WINDFARM_CONFIG")
        .arg("--quiet")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("valid json on stdout")
}

#[test]
fn validate_fails_without_a_data_dir() {
    let tmp = tempdir().unwrap();
    let output = windfarm(&tmp.path().join("missing"))
        .arg("validate")
        .output()
        .expect("run");
    assert!(!output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["ok"], Value::Bool(false));
    assert_eq!(report["data_dir"]["exists"], Value::Bool(false));
}

#[test]
fn validate_reports_config_flags() {
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join("project_status.json"),
        r#"{"features": {"ensemble_predictions": false}}"#,
    )
    .unwrap();
    let output = windfarm(tmp.path()).arg("validate").output().expect("run");
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["config"]["features"]["ensemble_predictions"], Value::Bool(false));
    assert!(report["tables"]["present"].as_array().unwrap().is_empty());
}

#[test]
fn route_honours_the_config_and_pattern_override() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("status.json");
    fs::write(
        &config,
        r#"{"features": {"ensemble_predictions": false},
            "model_performance": {"lstm": {"rmse": 0.16}}}"#,
    )
    .unwrap();

    let fallback = windfarm(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["route", "how accurate is the ensemble?"])
        .output()
        .expect("run");
    assert!(fallback.status.success());
    let body = stdout_json(&fallback);
    assert_eq!(body["status"], "fallback");
    assert_eq!(body["alternatives"][0]["model"], "lstm");

    let forced = windfarm(tmp.path())
        .args(["route", "wind farm 4 overview", "--pattern-type", "temporal"])
        .output()
        .expect("run");
    let body = stdout_json(&forced);
    assert_eq!(body["detected_intents"], serde_json::json!(["temporal"]));
    assert_eq!(body["extracted_entities"]["wind_farms"], serde_json::json!(["wp4"]));
}

#[test]
fn fetch_rejects_unknown_categories() {
    let tmp = tempdir().unwrap();
    windfarm(tmp.path())
        .args(["fetch", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weather"));
}

#[test]
fn fetch_on_an_empty_dir_is_total() {
    let tmp = tempdir().unwrap();
    let output = windfarm(tmp.path())
        .args(["fetch", "power_curve", "--farm", "WF2"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["category"], "power_curve");
    assert_eq!(body["wind_farm"], "wp2");
    assert_eq!(body["source_files"], serde_json::json!([]));
}
