use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated HOME so a developer's real config never leaks into the tests.
fn auditq(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("auditq").expect("binary");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn show_prints_full_question() {
    let home = TempDir::new().expect("tempdir");
    auditq(&home)
        .args(["show", "504"])
        .assert()
        .success()
        .stdout("In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), SafeToken\n");
}

#[test]
fn show_out_of_range_fails_with_code() {
    let home = TempDir::new().expect("tempdir");
    auditq(&home)
        .args(["show", "505"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[CORPUS_INDEX_OUT_OF_RANGE]"));
}

#[test]
fn list_json_with_search() {
    let home = TempDir::new().expect("tempdir");
    let out = auditq(&home)
        .args(["list", "--search", "permit", "--json"])
        .output()
        .expect("run");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    let arr = v.as_array().expect("array");
    assert!(!arr.is_empty());
    assert!(arr.iter().all(|q| q["text"]
        .as_str()
        .unwrap_or_default()
        .to_lowercase()
        .contains("permit")));
}

#[test]
fn list_plain_has_one_line_per_question() {
    let home = TempDir::new().expect("tempdir");
    let out = auditq(&home).arg("list").output().expect("run");
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).expect("utf8");
    assert_eq!(text.lines().count(), 505);
    assert!(text.lines().next().unwrap_or_default().starts_with("   0  "));
}

#[test]
fn prompt_question_by_text() {
    let home = TempDir::new().expect("tempdir");
    auditq(&home)
        .args(["prompt", "question", "--text", "TEST_Q"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Security Question (scope for this run):** TEST_Q\n",
        ));
}

#[test]
fn prompt_question_requires_a_source() {
    let home = TempDir::new().expect("tempdir");
    auditq(&home).args(["prompt", "question"]).assert().failure();
}

#[test]
fn prompt_validation_reads_stdin() {
    let home = TempDir::new().expect("tempdir");
    auditq(&home)
        .args(["prompt", "validation", "--file", "-"])
        .write_stdin("## Title\nFrom stdin")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**SECURITY CLAIM TO VALIDATE:**\n## Title\nFrom stdin\n",
        ));
}

#[test]
fn export_csv_to_file() {
    let home = TempDir::new().expect("tempdir");
    let path = home.path().join("questions.csv");
    auditq(&home)
        .args(["export", "--format", "csv", "--out"])
        .arg(&path)
        .assert()
        .success();
    let text = std::fs::read_to_string(&path).expect("read");
    assert!(text.starts_with("index,id,text\n0,"));
}

#[test]
fn report_on_empty_run_dir() {
    let home = TempDir::new().expect("tempdir");
    auditq(&home)
        .args(["report", "--out-dir"])
        .arg(home.path().join("nothing-here"))
        .assert()
        .success()
        .stdout(predicate::str::contains("_No outcomes recorded._"));
}

#[test]
fn run_rejects_remote_ollama_before_any_request() {
    let home = TempDir::new().expect("tempdir");
    auditq(&home)
        .args(["run", "--ollama-url", "https://api.example.com", "--to", "1"])
        .arg("--out-dir")
        .arg(home.path().join("run"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("[AI_REMOTE_NOT_ALLOWED]"));
}

#[test]
fn explicit_bad_config_is_fatal() {
    let home = TempDir::new().expect("tempdir");
    let cfg = home.path().join("bad.toml");
    std::fs::write(&cfg, "model = [").expect("write");
    auditq(&home)
        .arg("--config")
        .arg(&cfg)
        .args(["show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[CONFIG_INVALID]"));
}

#[test]
fn discovered_config_supplies_out_dir() {
    let home = TempDir::new().expect("tempdir");
    let run_dir = home.path().join("from-config");
    std::fs::create_dir_all(run_dir.join("outcomes")).expect("dirs");
    std::fs::write(
        home.path().join(".auditq.toml"),
        format!("out_dir = {:?}\n", run_dir.display().to_string()),
    )
    .expect("write config");
    std::fs::write(
        run_dir.join("manifest.json"),
        r#"{"corpus_fingerprint":"abc","question_count":505,"model":"from-config-model","created_at":"2026-10-16T00:00:00Z"}"#,
    )
    .expect("write manifest");

    auditq(&home)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Model: `from-config-model`"));
}
