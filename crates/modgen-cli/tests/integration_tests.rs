//! End-to-end tests driving the compiled `modgen` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bower.json"), r#"{"name":"tmp"}"#).unwrap();
    dir
}

fn modgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("modgen").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_shows_usage() {
    let dir = project();
    modgen(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("modgen"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_matches_cargo() {
    let dir = project();
    modgen(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    let dir = project();
    modgen(&dir).assert().failure().code(2);
}

#[test]
fn new_component_creates_expected_files() {
    let dir = project();
    modgen(&dir)
        .args(["new", "component", "test-name", "--skip-inject"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test-name-cp.js"));

    let base = dir.path().join("app/scripts/test-name");
    for file in [
        "test-name-cp.html",
        "_test-name-cp.scss",
        "test-name-cp.js",
        "test-name-cp.spec.js",
    ] {
        assert!(base.join(file).exists(), "missing {file}");
    }

    let script = std::fs::read_to_string(base.join("test-name-cp.js")).unwrap();
    assert!(script.contains("module('tmp')"));
    assert!(script.contains("testName"));
    assert!(script.contains("scripts/test-name/test-name-cp.html"));

    let spec = std::fs::read_to_string(base.join("test-name-cp.spec.js")).unwrap();
    assert!(spec.contains("('<test-name></test-name>')"));
}

#[test]
fn new_component_in_sub_folder() {
    let dir = project();
    modgen(&dir)
        .args(["new", "cp", "test-name", "test-path", "--skip-inject"])
        .assert()
        .success();

    let script = dir
        .path()
        .join("app/scripts/test-path/test-name/test-name-cp.js");
    let contents = std::fs::read_to_string(script).unwrap();
    assert!(contents.contains("scripts/test-path/test-name/test-name-cp.html"));
}

#[test]
fn new_with_service_and_no_template() {
    let dir = project();
    modgen(&dir)
        .args([
            "new",
            "component",
            "test-name",
            "--create-service",
            "service",
            "--no-template",
            "--skip-inject",
        ])
        .assert()
        .success();

    let base = dir.path().join("app/scripts/test-name");
    assert!(base.join("test-name-s.js").exists());
    assert!(base.join("test-name-s.spec.js").exists());
    assert!(!base.join("test-name-cp.html").exists());

    let script = std::fs::read_to_string(base.join("test-name-cp.js")).unwrap();
    assert!(!script.contains("templateUrl"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = project();
    modgen(&dir)
        .args(["new", "component", "test-name", "--dry-run", "--skip-inject"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("test-name-cp.js"));

    assert!(!dir.path().join("app").exists());
}

#[test]
fn persisted_config_is_honoured() {
    let dir = project();
    std::fs::write(
        dir.path().join(".modgen.json"),
        r#"{ "createTemplate": false }"#,
    )
    .unwrap();

    modgen(&dir)
        .args(["new", "component", "test-name", "--skip-inject"])
        .assert()
        .success();

    let base = dir.path().join("app/scripts/test-name");
    assert!(base.join("test-name-cp.js").exists());
    assert!(!base.join("test-name-cp.html").exists());
}

#[test]
fn use_defaults_ignores_persisted_config() {
    let dir = project();
    std::fs::write(
        dir.path().join(".modgen.json"),
        r#"{ "createTemplate": false }"#,
    )
    .unwrap();

    modgen(&dir)
        .args([
            "new",
            "component",
            "test-name",
            "--use-defaults",
            "--skip-inject",
        ])
        .assert()
        .success();

    assert!(
        dir.path()
            .join("app/scripts/test-name/test-name-cp.html")
            .exists()
    );
}

#[test]
fn malformed_config_key_recovers_with_warning() {
    let dir = project();
    std::fs::write(dir.path().join(".modgen.json"), r#"{ "fileExt": ".js" }"#).unwrap();

    modgen(&dir)
        .args(["new", "component", "test-name", "--skip-inject"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fileExt"));

    assert!(
        dir.path()
            .join("app/scripts/test-name/test-name-cp.js")
            .exists()
    );
}

#[test]
fn list_shows_all_sub_generators() {
    let dir = project();
    let output = modgen(&dir).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    for id in ["cp", "rt", "service", "factory"] {
        assert!(stdout.contains(id), "missing {id} in list output");
    }
}

#[test]
fn config_get_reads_nested_keys() {
    let dir = project();
    modgen(&dir)
        .args(["config", "get", "fileExt.style"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".scss"));
}

#[test]
fn config_list_prints_effective_json() {
    let dir = project();
    modgen(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pathOutputStyle"));
}

#[test]
fn config_path_points_at_project_file() {
    let dir = project();
    modgen(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".modgen.json"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = project();
    modgen(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modgen"));
}
