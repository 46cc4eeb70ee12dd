use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn packager() -> Command {
    let mut cmd = Command::cargo_bin("onefile_packager").expect("binary should be built");
    cmd.env_remove("ONEFILE_PYTHON");
    cmd
}

#[test]
fn test_help_lists_entry_points() {
    packager()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deps").and(predicate::str::contains("build")));
}

#[test]
fn test_declined_icon_prompt_exits_with_cancel_code() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    packager()
        .current_dir(temp.path())
        .args(["build", "--no-pause"])
        .write_stdin("x\nn\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid input").and(predicate::str::contains("Cancelled")));

    assert!(!temp.path().join("frp-tunnel-tool").exists());
}

#[test]
fn test_missing_interpreter_is_fatal() {
    packager()
        .args(["--python", "/nonexistent/python-3f8a", "deps", "--check", "--no-pause"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[cfg(unix)]
#[test]
fn test_satisfied_environment_installs_nothing() {
    // `true` accepts any arguments, so every module looks importable
    packager()
        .args(["--python", "true", "deps", "--no-pause"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All dependencies are already installed")
                .and(predicate::str::contains("Installation complete").not()),
        );
}

#[test]
fn test_blank_interpreter_is_rejected() {
    packager()
        .args(["--python", " ", "deps", "--no-pause"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments: --python must not be empty"));
}
