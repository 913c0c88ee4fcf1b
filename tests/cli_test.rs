//! Integration tests for the envexist binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
modules:
  - name: clitest
    need:
      - name: host
        description: database host
        example: localhost
    want:
      - name: user
    may:
      - { name: port, description: listen port, example: "5432" }
"#;

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("envexist.yml"), manifest).unwrap();
    temp
}

fn envexist(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("envexist"));
    cmd.current_dir(temp.path())
        .env_remove("ENVEXIST_MANIFEST")
        .env_remove("CLITEST_HOST")
        .env_remove("CLITEST_USER")
        .env_remove("CLITEST_PORT")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envexist"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("environment variables"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envexist"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    let mut cmd = envexist(&temp);
    cmd.env("CLITEST_HOST", "db.internal");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All environment variables resolved"));
    Ok(())
}

#[test]
fn cli_check_fails_with_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    let mut cmd = envexist(&temp);
    cmd.arg("check");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("|*CLITEST_HOST"))
        .stdout(predicate::str::contains("|*5432"))
        .stdout(predicate::str::contains(
            "Missing required variables: CLITEST_HOST",
        ));
    Ok(())
}

#[test]
fn cli_check_print_outputs_resolved_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    let mut cmd = envexist(&temp);
    cmd.args(["check", "--print"]).env("CLITEST_HOST", "db.internal");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CLITEST_HOST=db.internal"))
        .stdout(predicate::str::contains("CLITEST_PORT=5432"))
        .stdout(predicate::str::contains("CLITEST_USER=").not());
    Ok(())
}

#[test]
fn cli_env_file_satisfies_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    fs::write(temp.path().join(".env"), "CLITEST_HOST=from-file\n")?;

    let mut cmd = envexist(&temp);
    cmd.args(["check", "--print", "--env-file", ".env"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CLITEST_HOST=from-file"));
    Ok(())
}

#[test]
fn cli_env_file_overrides_process_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    fs::write(temp.path().join(".env"), "CLITEST_PORT=6543\n")?;

    let mut cmd = envexist(&temp);
    cmd.args(["check", "--print", "--env-file", ".env"])
        .env("CLITEST_HOST", "h")
        .env("CLITEST_PORT", "1111");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CLITEST_PORT=6543"));
    Ok(())
}

#[test]
fn cli_list_shows_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    let mut cmd = envexist(&temp);
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "| Name                 | Value                | Description               | Example         |",
        ))
        .stdout(predicate::str::contains("CLITEST_USER"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    let mut cmd = envexist(&temp);
    cmd.args(["list", "--json"]).env("CLITEST_HOST", "h");
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    let keys: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["CLITEST_HOST", "CLITEST_PORT", "CLITEST_USER"]);
    Ok(())
}

#[test]
fn cli_mask_secrets_hides_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("modules:\n  - name: clitest\n    need: [{ name: api_token }]\n");
    let mut cmd = envexist(&temp);
    cmd.args(["--mask-secrets", "check", "--print"])
        .env("CLITEST_API_TOKEN", "hunter2");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CLITEST_API_TOKEN=[REDACTED]"))
        .stdout(predicate::str::contains("hunter2").not());
    Ok(())
}

#[test]
fn cli_manifest_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("conf"))?;
    fs::write(temp.path().join("conf/env.yml"), MANIFEST)?;

    let mut cmd = envexist(&temp);
    cmd.args(["--manifest", "conf/env.yml", "list"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CLITEST_HOST"));
    Ok(())
}

#[test]
fn cli_missing_manifest_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = envexist(&temp);
    cmd.arg("check");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Manifest not found"));
    Ok(())
}

#[test]
fn cli_invalid_manifest_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("modules: [");
    let mut cmd = envexist(&temp);
    cmd.arg("list");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse manifest"));
    Ok(())
}

#[test]
fn cli_missing_env_file_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MANIFEST);
    let mut cmd = envexist(&temp);
    cmd.args(["check", "--env-file", "missing.env"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("missing.env"));
    Ok(())
}
