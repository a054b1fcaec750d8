//! Runs the `capgrid` binary against the bundled demo input.

use std::path::PathBuf;
use std::process::Command;

fn capgrid() -> Command {
    Command::new(env!("CARGO_BIN_EXE_capgrid"))
}

fn demo_input() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/sample-dashboard.json")
}

#[test]
fn snapshot_text_report() {
    let out = capgrid()
        .args(["snapshot", "--today", "2026-10-19", "--input"])
        .arg(demo_input())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("capgrid Capacity Analytics"));
    assert!(stdout.contains("MODERATE (55%)"));
    assert!(stdout.contains("1. Sarah Chen"));
}

#[test]
fn snapshot_json_is_parseable() {
    let out = capgrid()
        .args(["snapshot", "--format", "json", "--today", "2026-10-19", "--input"])
        .arg(demo_input())
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["generated_for"], "2026-10-19");
    assert_eq!(json["series"].as_array().unwrap().len(), 365);
    assert_eq!(json["regions"].as_array().unwrap().len(), 10);
}

#[test]
fn snapshot_honors_config_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("capgrid.toml");
    std::fs::write(&config, "[risk]\nlow_max = 900.0\nmoderate_max = 1300.0\n").unwrap();

    let out = capgrid()
        .args(["snapshot", "--format", "json", "--today", "2026-10-19", "--input"])
        .arg(demo_input())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["provisioning_risk"], "high");
}

#[test]
fn snapshot_rejects_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("capgrid.toml");
    std::fs::write(&config, "[risk]\nlow_max = 3000.0\nmoderate_max = 1000.0\n").unwrap();

    let out = capgrid()
        .args(["snapshot", "--input"])
        .arg(demo_input())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn classify_prints_tier() {
    let out = capgrid().args(["classify", "1400", "1100"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("HIGH"));
    assert!(stdout.contains("gauge 85%"));
}

#[test]
fn classify_rejects_negative_load() {
    let out = capgrid()
        .args(["classify", "--", "-5", "10"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn series_emits_banded_points() {
    let out = capgrid()
        .args(["series", "--days", "30", "--seed", "7", "--anchor", "2026-01-01"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 30);
    assert_eq!(points[0]["date"], "2026-01-01");
    assert_eq!(points[29]["date"], "2026-01-30");
    for p in points {
        assert!(p["upper"].as_i64().unwrap() >= p["forecast"].as_i64().unwrap());
        assert!(p["forecast"].as_i64().unwrap() >= p["lower"].as_i64().unwrap());
    }
}

#[test]
fn series_rejects_window_past_cap() {
    let out = capgrid()
        .args(["series", "--days", "9223372036854775807", "--anchor", "2026-01-01"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("series.window_days"));
}

#[test]
fn init_writes_scaffold() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capgrid.toml");

    let out = capgrid().args(["init", "--path"]).arg(&path).output().unwrap();
    assert!(out.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[risk]"));
    assert!(content.contains("low_max"));
}
