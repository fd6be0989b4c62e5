//! Integration tests for configured scans
//!
//! Tests the interaction between tmplcheck.toml and the check command:
//! extension filtering, disabled checks, and explicit --config paths.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tmplcheck() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("tmplcheck"))
}

#[test]
fn discovered_config_disables_checks() {
    let temp = TempDir::new().unwrap();
    // Unclosed comment, but the comments check is off.
    fs::write(temp.path().join("index.html"), "<!-- draft\n{{.Title}}\n").unwrap();
    fs::write(temp.path().join("tmplcheck.toml"), "[checks]\ncomments = false\n").unwrap();

    tmplcheck()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn explicit_config_narrows_extensions() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.tmpl"), "{{.Name\n").unwrap();
    fs::write(temp.path().join("ok.html"), "{{.Name}}\n").unwrap();
    let config = temp.path().join("only-html.toml");
    fs::write(&config, "[scan]\nextensions = [\"html\"]\n").unwrap();

    // The broken .tmpl file is outside the configured extensions.
    tmplcheck()
        .args(["check", "--config"])
        .arg(&config)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All templates balanced."));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.html"), "{{.Title}}\n").unwrap();

    tmplcheck()
        .args(["check", "--config", "/no/such/tmplcheck.toml"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read config"));
}

#[test]
fn block_findings_report_keyword_and_line() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("events.html"),
        "<ul>\n{{range .Events}}\n<li>{{.Name}}</li>\n</ul>\n",
    )
    .unwrap();

    tmplcheck()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unclosed {{range}} block"))
        .stdout(predicate::str::contains("2 [blocks]"));
}

#[test]
fn findings_from_multiple_files_are_grouped() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.html"), "{{.A\n").unwrap();
    fs::write(temp.path().join("b.html"), "B}}\n").unwrap();

    tmplcheck()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("a.html"))
        .stdout(predicate::str::contains("b.html"))
        .stdout(predicate::str::contains("2 problem(s) in 2 file(s)"));
}
