//! Binary-level tests; HOME points at a temporary directory so the real
//! `~/.pyinitrc` is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pyinit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pyinit").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn settings_file(home: &TempDir) -> String {
    std::fs::read_to_string(home.path().join(".pyinitrc")).unwrap()
}

#[test]
fn test_version_flags() {
    let home = TempDir::new().unwrap();
    let expected = format!("pyinit {}", env!("CARGO_PKG_VERSION"));

    for flag in ["--version", "-v"] {
        pyinit(&home)
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(expected.clone()));
    }

    // Version output never starts the interactive flow
    assert!(!home.path().join(".pyinitrc").exists());
}

#[test]
fn test_config_show_writes_defaults() {
    let home = TempDir::new().unwrap();

    pyinit(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Banner enabled"))
        .stdout(predicate::str::contains("true"))
        .stdout(predicate::str::contains(".pyinitrc"));

    assert!(settings_file(&home).contains("show_banner=true"));
}

#[test]
fn test_banner_toggle_persists() {
    let home = TempDir::new().unwrap();

    pyinit(&home)
        .args(["config", "banner", "disable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Banner disabled"));
    assert!(settings_file(&home).contains("show_banner=false"));

    pyinit(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    pyinit(&home)
        .args(["config", "banner", "enable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Banner enabled"));
    assert!(settings_file(&home).contains("show_banner=true"));
}

#[test]
fn test_config_reset_restores_defaults() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".pyinitrc"),
        "show_banner=0\ncolour=blue\n",
    )
    .unwrap();

    pyinit(&home)
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration reset to defaults"));

    let content = settings_file(&home);
    assert!(content.contains("show_banner=true"));
    assert!(!content.contains("colour"));
}

#[test]
fn test_banner_requires_action() {
    let home = TempDir::new().unwrap();
    pyinit(&home).args(["config", "banner"]).assert().failure();
}

#[test]
fn test_interactive_flow_without_terminal_fails_cleanly() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".pyinitrc"), "show_banner=false\n").unwrap();

    pyinit(&home)
        .current_dir(home.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to collect project info"));

    assert_eq!(std::fs::read_dir(home.path()).unwrap().count(), 1);
}
