use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn add_project(root: &Path, name: &str, manifest: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("package.json"), manifest).unwrap();
}

fn scanner(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dep-license-scanner").unwrap();
    cmd.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn json_report(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn test_json_report_summary() {
    let ws = TempDir::new().unwrap();
    add_project(
        ws.path(),
        "web",
        r#"{"dependencies": {"react": "^18.0.0"}, "devDependencies": {"eslint": "^8.0.0"}}"#,
    );
    add_project(
        ws.path(),
        "node_modules",
        r#"{"dependencies": {"left-pad": "1.0.0"}}"#,
    );

    let output = scanner(ws.path())
        .args(["scan", "--report", "json", "--path"])
        .arg(ws.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report = json_report(&output.stdout);
    assert_eq!(report["summary"]["totalScanned"], 2);
    assert_eq!(report["summary"]["permissive"], 2);
    assert_eq!(report["summary"]["unknown"], 0);
    assert_eq!(report["permissive"][0]["license"], "MIT");
    assert_eq!(report["permissive"][0]["category"], "permissive");
}

#[test]
fn test_terminal_report_lists_unknown() {
    let ws = TempDir::new().unwrap();
    add_project(
        ws.path(),
        "app",
        r#"{"dependencies": {"some-unlisted-pkg": "1.0.0"}}"#,
    );

    scanner(ws.path())
        .args(["scan", "-p"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("LICENSE SCANNER SUMMARY"))
        .stdout(predicate::str::contains("some-unlisted-pkg"))
        .stdout(predicate::str::contains("NO-LICENSE"));
}

#[test]
fn test_quiet_prints_summary_line() {
    let ws = TempDir::new().unwrap();
    add_project(ws.path(), "app", r#"{"dependencies": {"vue": "^3.0.0"}}"#);

    scanner(ws.path())
        .args(["scan", "--quiet", "--path"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout("Total: 1  Permissive: 1  Copyleft: 0  Unknown: 0\n");
}

#[test]
fn test_fail_on_copyleft_exits_one() {
    let ws = TempDir::new().unwrap();
    add_project(
        ws.path(),
        "app",
        r#"{"dependencies": {"readline-gpl": "1.0.0", "axios": "^1.0.0"}}"#,
    );
    std::fs::create_dir(ws.path().join(".dep-license-scanner")).unwrap();
    std::fs::write(
        ws.path().join(".dep-license-scanner/config.toml"),
        "[packages]\n\"readline-gpl\" = \"GPL-3.0\"\n",
    )
    .unwrap();

    scanner(ws.path())
        .args(["scan", "--quiet", "--fail-on", "copyleft", "--path"])
        .arg(ws.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 copyleft dependencies found"));

    scanner(ws.path())
        .args(["scan", "--quiet", "--fail-on", "proprietary", "--path"])
        .arg(ws.path())
        .assert()
        .code(0);
}

#[test]
fn test_strict_mode_exit_codes() {
    let ws = TempDir::new().unwrap();
    add_project(ws.path(), "broken", "{ not json");

    scanner(ws.path())
        .args(["scan", "--quiet", "--path"])
        .arg(ws.path())
        .assert()
        .success();

    scanner(ws.path())
        .args(["scan", "--strict", "--path"])
        .arg(ws.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to parse manifest"));

    scanner(ws.path())
        .args(["scan", "--strict", "--path"])
        .arg(ws.path().join("missing"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read workspace directory"));
}

#[test]
fn test_missing_workspace_is_empty_report_when_lenient() {
    let ws = TempDir::new().unwrap();

    let output = scanner(ws.path())
        .args(["scan", "--report", "json", "--path"])
        .arg(ws.path().join("missing"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_report(&output.stdout)["summary"]["totalScanned"], 0);
}

#[test]
fn test_invalid_config_is_internal_error() {
    let ws = TempDir::new().unwrap();
    let config = ws.path().join("bad.toml");
    std::fs::write(&config, "[scan\n").unwrap();

    scanner(ws.path())
        .args(["scan", "--config"])
        .arg(&config)
        .arg("--path")
        .arg(ws.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid configuration file"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    scanner(home.path()).assert().code(2);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let home = TempDir::new().unwrap();
    scanner(home.path())
        .args(["scan", "--no-such-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn test_version_exits_zero() {
    let home = TempDir::new().unwrap();
    scanner(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
