//! Smoke tests -- verify the binary surface without touching the network.

use assert_cmd::Command;

const EVENT_JSON: &str = r#"{
    "entity": {"metadata": {"name": "server01"}},
    "check": {"metadata": {"name": "disk"}, "status": 2, "output": "disk full"}
}"#;

#[test]
fn test_cli_help() {
    Command::cargo_bin("sensu-ilert-handler")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("iLert incident management"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("sensu-ilert-handler")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("sensu-ilert-handler"));
}

#[test]
fn test_missing_token_fails_before_submission() {
    Command::cargo_bin("sensu-ilert-handler")
        .unwrap()
        .env_remove("ILERT_SENSU_TOKEN")
        .write_stdin(EVENT_JSON)
        .assert()
        .failure()
        .stderr(predicates::str::contains("authentication token is empty"));
}

#[test]
fn test_event_without_check_fails() {
    Command::cargo_bin("sensu-ilert-handler")
        .unwrap()
        .args(["--token", "test-token"])
        .write_stdin(r#"{"entity": {"metadata": {"name": "server01"}}}"#)
        .assert()
        .failure()
        .stderr(predicates::str::contains("event does not contain check"));
}

#[test]
fn test_garbage_stdin_fails() {
    Command::cargo_bin("sensu-ilert-handler")
        .unwrap()
        .args(["--token", "test-token"])
        .write_stdin("not an event")
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to parse event from stdin"));
}

#[test]
fn test_invalid_status_map_fails_before_submission() {
    Command::cargo_bin("sensu-ilert-handler")
        .unwrap()
        .args(["--token", "test-token", "--status-map", r#"{"sev1": [1]}"#])
        .write_stdin(EVENT_JSON)
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid iLert severity"));
}
