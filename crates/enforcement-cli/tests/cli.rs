use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config");
        fs::create_dir_all(&config).unwrap();
        fs::write(
            config.join("enforcement.yaml"),
            "dependency_score_threshold: 0.7\nrestricted_region: RESTRICTED\n",
        )
        .unwrap();
        Self::write_runtime(&config, -0.5);
        Self { dir }
    }

    fn write_runtime(config: &Path, threshold: f64) {
        fs::write(
            config.join("runtime.yaml"),
            format!("kill_switch: false\nkarma_confidence_threshold: {threshold}\nenv: test\n"),
        )
        .unwrap();
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn request(&self, name: &str, dependency: f64, karma: f64) -> PathBuf {
        let path = self.dir.path().join(name);
        let body = serde_json::json!({
            "text": "hello",
            "meta": {
                "emotional_output": {"tone": "neutral", "dependency_score": dependency},
                "risk_flags": []
            },
            "age_state": "ALLOWED",
            "region_state": "IN",
            "platform_policy_state": "YOUTUBE",
            "karma_signal": karma
        });
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    fn enforcer(&self) -> Command {
        let mut cmd = Command::cargo_bin("enforcer").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--config-dir")
            .arg(self.config_dir())
            .arg("--audit-log")
            .arg(self.dir.path().join("logs").join("audit.jsonl"));
        cmd
    }

    fn enforce(&self, request: &Path) -> Value {
        let output = self
            .enforcer()
            .arg("enforce")
            .arg("--request")
            .arg(request)
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

#[test]
fn check_config_prints_snapshot() {
    let ws = Workspace::new();
    ws.enforcer()
        .arg("check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("dependency_score_threshold"));
}

#[test]
fn check_config_fails_on_missing_document() {
    let ws = Workspace::new();
    fs::remove_file(ws.config_dir().join("runtime.yaml")).unwrap();
    ws.enforcer().arg("check-config").assert().failure();
}

#[test]
fn enforce_prints_gateway_response() {
    let ws = Workspace::new();
    let response = ws.enforce(&ws.request("rewrite.json", 0.85, 0.9));
    assert_eq!(response["decision"], "REWRITE");
    assert_eq!(response["reason"], "DETERMINISTIC_ENFORCEMENT_APPLIED");
    assert_eq!(
        response["evaluator_trace"][0]["rewrite_class"],
        "REDUCE_EMOTIONAL_DEPENDENCY"
    );
}

#[test]
fn enforce_fails_closed_without_config() {
    let ws = Workspace::new();
    fs::remove_dir_all(ws.config_dir()).unwrap();
    let response = ws.enforce(&ws.request("ok.json", 0.1, 0.0));
    assert_eq!(response["decision"], "BLOCK");
    assert_eq!(response["reason"], "ENFORCEMENT_FAILURE_FAIL_CLOSED");
}

#[test]
fn replay_all_flags_drift_with_exit_code() {
    let ws = Workspace::new();
    ws.enforce(&ws.request("a.json", 0.1, 0.3));
    ws.enforce(&ws.request("b.json", 0.1, -0.45));

    ws.enforcer()
        .arg("replay-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched\": 2"));

    Workspace::write_runtime(&ws.config_dir(), -0.4);
    ws.enforcer()
        .arg("replay-all")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"matched\": 1"));
}

#[test]
fn replay_unknown_trace_fails() {
    let ws = Workspace::new();
    ws.enforcer()
        .arg("replay")
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("trace not found"));
}

#[test]
fn replay_reports_match_for_logged_trace() {
    let ws = Workspace::new();
    ws.enforce(&ws.request("a.json", 0.85, 0.0));

    let log = fs::read_to_string(ws.dir.path().join("logs").join("audit.jsonl")).unwrap();
    let record: Value = serde_json::from_str(log.lines().next().unwrap()).unwrap();
    let trace_id = record["trace_id"].as_str().unwrap();

    let output = ws.enforcer().arg("replay").arg(trace_id).output().unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["deterministic_match"], true);
    assert_eq!(report["replayed_decision"], "REWRITE");
}
