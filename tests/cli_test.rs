//! CLI surface tests for the seoup binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_describes_pipeline() {
    Command::cargo_bin("seoup")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetch trending SEO keywords"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_prints_defaults_as_yaml() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("seoup")
        .unwrap()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("model: gemini-2.5-flash"))
        .stdout(predicate::str::contains("html-path: index.html"))
        .stdout(predicate::str::contains("api-key-env: GEMINI_API_KEY"));
}

#[test]
fn test_config_reflects_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("site.yml"),
        "site:\n  topic: \"Winter fashion trends\"\n",
    )
    .unwrap();

    Command::cargo_bin("seoup")
        .unwrap()
        .current_dir(dir.path())
        .args(["--config", "site.yml", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topic: Winter fashion trends"))
        .stdout(predicate::str::contains("model: gemini-2.5-flash"));
}
