// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command running in an empty directory, with no config file to discover.
fn commitgate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("commitgate").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("COMMITGATE_CONFIG");
    cmd
}

#[test]
fn valid_title_passes() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir)
        .args(["check", "--title", "feat: add login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PR title"));
}

#[test]
fn prose_message_fails() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir)
        .args(["--format", "json", "check", "-m", "Added login"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not-a-conventional-commit"));
}

#[test]
fn warnings_do_not_fail() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir)
        .args(["check", "-m", "fix: Fixed the bug."])
        .assert()
        .success()
        .stdout(predicate::str::contains("subject-case"))
        .stdout(predicate::str::contains("subject-ends-with-period"));
}

#[test]
fn batch_with_one_bad_commit_fails() {
    let dir = TempDir::new().unwrap();
    let batch = dir.path().join("batch.json");
    std::fs::write(
        &batch,
        r#"[
            {"identity": "PR title", "message": "feat(auth): add login"},
            {"identity": "commit 1111111", "message": "feat(auth): add login form"},
            {"identity": "commit 2222222", "message": "feet(auth): add session"},
            {"identity": "commit 3333333", "message": "test(auth): cover login form"}
        ]"#,
    )
    .unwrap();

    let output = commitgate(&dir)
        .args(["--format", "json", "check", "--jobs", "3", "--batch"])
        .arg(&batch)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);

    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    let invalid: Vec<&str> = results
        .iter()
        .filter(|r| r["valid"] == false)
        .map(|r| r["identity"].as_str().unwrap())
        .collect();
    assert_eq!(invalid, vec!["commit 2222222"]);
    assert_eq!(results[2]["findings"][0]["code"], "unknown-type");
}

#[test]
fn batch_from_stdin_with_github_annotations() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir)
        .args(["--format", "github", "check", "--batch", "-"])
        .write_stdin(
            r#"[{"identity": "commit abc1234", "message": "fix(auth)!: remove legacy token\n\nBREAKING CHANGE: "}]"#,
        )
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "::error title=commit abc1234::empty-breaking-change-description",
        ));
}

#[test]
fn message_from_stdin_by_default() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir)
        .write_stdin("docs: describe the gate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("stdin"));
}

#[test]
fn config_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("commitgate.toml"),
        "allowed_types = [\"feat\"]\n",
    )
    .unwrap();

    commitgate(&dir)
        .args(["check", "-m", "fix: handle null"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unknown-type"));
}

#[test]
fn unknown_config_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "max_subject_lenght = 50\n").unwrap();

    commitgate(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", "-m", "feat: add login"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_subject_lenght"));
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir)
        .args(["check", "--file", "missing.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir).arg("init").assert().success();
    assert!(dir.path().join("commitgate.toml").exists());

    commitgate(&dir).arg("init").assert().code(2);
    commitgate(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn version_prints_package_version() {
    let dir = TempDir::new().unwrap();
    commitgate(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
