use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn workspace_config(name: &str) -> String {
    format!("{}/../../configs/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn mission_prints_profile_with_defaults() {
    Command::cargo_bin("mission")
        .expect("mission bin")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Round Trip Profile ==="))
        .stdout(predicate::str::contains("Arrival        : t = 0.708858 yr"))
        .stdout(predicate::str::contains("(launch window)"))
        .stdout(predicate::str::contains("Return arc     : lowering leg"));
}

#[test]
fn mission_prints_calendar_dates() {
    Command::cargo_bin("mission")
        .expect("mission bin")
        .args([
            "--config",
            &workspace_config("mission.toml"),
            "--launch-date",
            "2030-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2030-09-16]"));
}

#[test]
fn mission_json_summary_to_stdout() {
    let output = Command::cargo_bin("mission")
        .expect("mission bin")
        .args(["--json", "-", "--launch-date", "2030-01-01"])
        .output()
        .expect("run mission");
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(summary["departure_source"], "searched");
    assert_eq!(summary["calendar"]["launch"], "2030-01-01");
    let t_arrival = summary["t_arrival_years"].as_f64().expect("t_arrival");
    assert!((t_arrival - 0.709).abs() < 1e-3);
}

#[test]
fn mission_fails_without_window_and_falls_back_on_request() {
    Command::cargo_bin("mission")
        .expect("mission bin")
        .args(["--horizon", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no launch window"));

    Command::cargo_bin("mission")
        .expect("mission bin")
        .args(["--horizon", "1.5", "--fallback-wait", "1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FALLBACK"));
}

#[test]
fn mission_rejects_invalid_overrides() {
    Command::cargo_bin("mission")
        .expect("mission bin")
        .args(["--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("window.step_years"));

    Command::cargo_bin("mission")
        .expect("mission bin")
        .args(["--phase-matched", "--destination-phase", "10"])
        .assert()
        .failure();
}

#[test]
fn trajectory_writes_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested").join("trajectory.csv");
    Command::cargo_bin("trajectory")
        .expect("trajectory bin")
        .args([
            "--config",
            &workspace_config("mission.yaml"),
            "--frames",
            "40",
            "--phase-matched",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("csv");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 41);
    assert!(lines[0].starts_with("frame,t_years,t_days,phase"));
    assert!(lines[1].contains(",outbound,"));
    assert!(lines[40].contains(",return,"));
}

#[test]
fn trajectory_rejects_single_frame() {
    Command::cargo_bin("trajectory")
        .expect("trajectory bin")
        .args(["--frames", "1", "--output", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two frames"));
}
