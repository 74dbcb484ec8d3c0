//! End-to-end tests for the kickstart binary
//!
//! Every test runs with `HOME` pointed at a scratch directory so no user
//! configuration leaks in, and with `--bootstrap none` unless the test is
//! about environment tooling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn kickstart(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kickstart").expect("binary should build");
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .current_dir(home);
    cmd
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

// ─── types ─────────────────────────────────────────────────────────────────

#[test]
fn test_types_json_lists_all_types() {
    let temp = TempDir::new().unwrap();

    let output = kickstart(temp.path())
        .args(["types", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let types: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = types
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["data-engineering", "data-science", "machine-learning", "generative-ai"]
    );
    assert!(types[1]["files"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f == "notebooks/eda.ipynb"));
}

#[test]
fn test_types_table() {
    let temp = TempDir::new().unwrap();

    kickstart(temp.path())
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("machine-learning"))
        .stdout(predicate::str::contains("gen-ai"));
}

// ─── new ───────────────────────────────────────────────────────────────────

#[test]
fn test_new_creates_project() {
    let temp = TempDir::new().unwrap();

    kickstart(temp.path())
        .args([
            "new", "--type", "data-science", "--name", "churn", "--author", "Jane Doe",
            "--bootstrap", "none",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created data-science project 'churn'"));

    let root = temp.path().join("churn");
    for file in [
        "src/main.py",
        "src/model_training.py",
        "notebooks/eda.ipynb",
        "tests/test_model.py",
        ".gitignore",
        ".env.example",
    ] {
        assert!(root.join(file).is_file(), "{} missing", file);
    }
    assert_eq!(fs::read_to_string(root.join("src/main.py")).unwrap(), "");
    assert!(fs::read_to_string(root.join("LICENSE"))
        .unwrap()
        .contains("Jane Doe"));
}

#[test]
fn test_new_logs_success_message() {
    let temp = TempDir::new().unwrap();

    kickstart(temp.path())
        .args(["new", "-t", "de", "-n", "etl", "-b", "none"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Workspace for data-engineering project 'etl' has been created successfully",
        ));
}

#[test]
fn test_new_output_dir_and_config_author() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("kickstart.yaml");
    fs::write(&config, "default-author: Configured Author\nbootstrap: none\n").unwrap();
    let out = temp.path().join("projects");

    kickstart(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["new", "--type", "ml", "--name", "vision", "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    let license = fs::read_to_string(out.join("vision/LICENSE")).unwrap();
    assert!(license.contains("Configured Author"));
    assert!(!out.join("vision/venv").exists());
}

#[test]
fn test_new_without_author_uses_placeholder() {
    let temp = TempDir::new().unwrap();

    kickstart(temp.path())
        .args(["new", "--type", "gen-ai", "--name", "muse", "--bootstrap", "none"])
        .assert()
        .success();

    let license = fs::read_to_string(temp.path().join("muse/LICENSE")).unwrap();
    assert!(license.contains("Your Name"));
}

#[test]
fn test_dry_run_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    kickstart(temp.path())
        .args(["new", "--type", "ml", "--name", "preview", "--dry-run", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("preview/src/inference.py"))
        .stdout(predicate::str::contains("LICENSE"));

    assert!(is_empty_dir(&out));
}

#[test]
fn test_invalid_type_fails_without_changes() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    kickstart(temp.path())
        .args(["new", "--type", "web", "--name", "site", "--output-dir"])
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Unknown project type: web"));

    assert!(is_empty_dir(&out));
}

#[test]
fn test_blank_name_fails() {
    let temp = TempDir::new().unwrap();

    kickstart(temp.path())
        .args(["new", "--type", "ml", "--name", "  ", "--bootstrap", "none"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    kickstart(temp.path())
        .args(["--config", "does-not-exist.yaml", "types"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_rerun_preserves_user_content() {
    let temp = TempDir::new().unwrap();
    let args = ["new", "--type", "ds", "--name", "again", "--bootstrap", "none"];

    kickstart(temp.path()).args(args).assert().success();
    let config_py = temp.path().join("again/src/config.py");
    fs::write(&config_py, "DEBUG = True\n").unwrap();

    kickstart(temp.path()).args(args).assert().success();

    assert_eq!(fs::read_to_string(&config_py).unwrap(), "DEBUG = True\n");
}

// ─── prompts ───────────────────────────────────────────────────────────────

/// Config that keeps prompted runs away from real Python tooling
fn no_env_config(dir: &Path) -> std::path::PathBuf {
    let config = dir.join("kickstart.yaml");
    fs::write(&config, "bootstrap: none\n").unwrap();
    config
}

#[test]
fn test_bare_command_reads_piped_answers() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let config = no_env_config(home.path());

    kickstart(home.path())
        .current_dir(work.path())
        .arg("-c")
        .arg(&config)
        .write_stdin("ml\ndemo\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created machine-learning project 'demo'"));

    let root = work.path().join("demo");
    assert!(root.join("src/inference.py").is_file());
    assert!(fs::read_to_string(root.join("LICENSE"))
        .unwrap()
        .contains("Your Name"));
}

#[test]
fn test_piped_author_answer_is_used() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let config = no_env_config(home.path());

    kickstart(home.path())
        .current_dir(work.path())
        .arg("-c")
        .arg(&config)
        .args(["new", "--type", "de"])
        .write_stdin("flows\nAda Lovelace\n")
        .assert()
        .success();

    assert!(fs::read_to_string(work.path().join("flows/LICENSE"))
        .unwrap()
        .contains("Ada Lovelace"));
}

#[test]
fn test_piped_invalid_type_fails_without_changes() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let config = no_env_config(home.path());

    kickstart(home.path())
        .current_dir(work.path())
        .arg("-c")
        .arg(&config)
        .write_stdin("web\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown project type: web"));

    assert!(is_empty_dir(work.path()));
}

#[cfg(unix)]
#[test]
fn test_missing_environment_tool_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("kickstart.yaml");
    fs::write(
        &config,
        "tools:\n  venv:\n    program: kickstart-missing-python\n    args: [\"{target}\"]\n",
    )
    .unwrap();

    kickstart(temp.path())
        .arg("-c")
        .arg(&config)
        .args(["new", "--type", "ml", "--name", "nopy", "--bootstrap", "venv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("kickstart-missing-python"));

    // Skeleton stays behind for a retry
    assert!(temp.path().join("nopy/src/training.py").is_file());
}
