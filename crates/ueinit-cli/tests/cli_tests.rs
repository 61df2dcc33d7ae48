//! End-to-end tests for the `ueinit` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ueinit() -> Command {
    Command::cargo_bin("ueinit").expect("binary builds")
}

fn project_dir(name: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(format!("{name}.uproject")), "{}").unwrap();
    temp
}

fn read(temp: &TempDir, rel: &str) -> String {
    fs::read_to_string(temp.path().join(rel)).unwrap()
}

// ── flags ─────────────────────────────────────────────────────────────────────

#[test]
fn help_describes_the_version_argument() {
    ueinit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("VERSION"))
        .stdout(predicate::str::contains("Unreal Engine"));
}

#[test]
fn version_flag_matches_cargo() {
    ueinit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    ueinit().arg("--bogus").assert().code(2);
}

// ── argument-driven scaffold ──────────────────────────────────────────────────

#[test]
fn scaffolds_with_a_version_argument() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .arg("5.3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo"))
        // No argument means interactive; with one the menu must not appear.
        .stdout(predicate::str::contains("Select an engine version").not());

    let build_cs = read(&temp, "Source/Demo/Demo.Build.cs");
    assert!(build_cs.contains("public class Demo : ModuleRules"));

    let target_cs = read(&temp, "Source/Demo.Target.cs");
    assert!(target_cs.contains("DefaultBuildSettings = BuildSettingsVersion.V4;"));
    assert!(target_cs.contains("IncludeOrderVersion = EngineIncludeOrderVersion.Unreal5_3;"));

    let editor_cs = read(&temp, "Source/DemoEditor.Target.cs");
    assert!(editor_cs.contains("public class DemoEditorTarget : TargetRules"));
    assert!(editor_cs.contains("Type = TargetType.Editor;"));
}

#[test]
fn minor_beyond_the_table_uses_the_latest_sentinels() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .arg("5.12")
        .assert()
        .success();

    let target_cs = read(&temp, "Source/Demo.Target.cs");
    assert!(target_cs.contains("BuildSettingsVersion.Latest;"));
    assert!(target_cs.contains("EngineIncludeOrderVersion.Latest;"));
}

#[test]
fn malformed_version_argument_fails_without_prompting() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .arg("4.27")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("4.27"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("Source").exists());
}

#[test]
fn missing_descriptor_fails_before_any_write() {
    let temp = TempDir::new().unwrap();

    ueinit()
        .current_dir(temp.path())
        .arg("5.3")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".uproject"));

    assert!(!temp.path().join("Source").exists());
}

#[test]
fn existing_source_directory_aborts_untouched() {
    let temp = project_dir("Demo");
    fs::create_dir(temp.path().join("Source")).unwrap();
    fs::write(temp.path().join("Source/keep.txt"), "precious").unwrap();

    ueinit()
        .current_dir(temp.path())
        .arg("5.3")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(read(&temp, "Source/keep.txt"), "precious");
    assert!(!temp.path().join("Source/Demo").exists());
}

#[test]
fn quiet_mode_emits_nothing_on_success() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .args(["--quiet", "5.0"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("Source/Demo/Demo.Build.cs").exists());
}

// ── interactive scaffold ──────────────────────────────────────────────────────

#[test]
fn interactive_menu_index_selects_the_canonical_version() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select an engine version"));

    // Menu entry 5 is canonical version 5.4.
    let target_cs = read(&temp, "Source/Demo.Target.cs");
    assert!(target_cs.contains("EngineIncludeOrderVersion.Unreal5_4;"));
    assert!(target_cs.contains("BuildSettingsVersion.V5;"));
}

#[test]
fn interactive_retries_until_a_valid_version() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .write_stdin("\n11\n5.9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing entered"))
        .stdout(predicate::str::contains("'11' is not a valid choice"));

    let target_cs = read(&temp, "Source/Demo.Target.cs");
    assert!(target_cs.contains("EngineIncludeOrderVersion.Unreal5_9;"));
    assert!(target_cs.contains("BuildSettingsVersion.V5;"));
}

#[test]
fn interactive_free_form_version_is_accepted() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .write_stdin("5.2\n")
        .assert()
        .success();

    let target_cs = read(&temp, "Source/Demo.Target.cs");
    assert!(target_cs.contains("BuildSettingsVersion.V3;"));
}

#[test]
fn closed_stdin_is_a_fatal_fault() {
    let temp = project_dir("Demo");

    ueinit()
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input stream closed"));

    assert!(!temp.path().join("Source").exists());
}
