use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn slashsync_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("slashsync"));
    cmd.env_remove("RUST_LOG")
        .env_remove("DISCORD_APPLICATION_ID")
        .env_remove("DISCORD_GUILD_ID")
        .env_remove("DISCORD_BOT_TOKEN");
    cmd
}

fn write_commands(dir: &Path, yaml: &str) -> std::path::PathBuf {
    let path = dir.join("commands.yml");
    fs::write(&path, yaml).expect("write commands.yml");
    path
}

#[test]
fn validate_prints_table_for_valid_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(
        dir.path(),
        "commands:\n  - name: ping\n    description: Replies pong\n  - name: Inspect\n    type: 2\n",
    );

    slashsync_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("ping"))
        .stdout(contains("chat_input"))
        .stdout(contains("user"))
        .stdout(contains("2 command(s) valid"));
}

#[test]
fn validate_defaults_to_commands_yml_in_cwd() {
    let dir = TempDir::new().expect("tempdir");
    write_commands(dir.path(), "commands:\n  - name: ping\n    description: Replies pong\n");

    slashsync_cmd()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("1 command(s) valid"));
}

#[test]
fn validate_json_emits_wire_format() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(dir.path(), "commands:\n  - name: ping\n    description: Replies pong\n");

    let output = slashsync_cmd()
        .args(["validate", "--json"])
        .arg(&path)
        .output()
        .expect("run slashsync validate --json");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["commands"][0]["name"], "ping");
    assert_eq!(json["commands"][0]["type"], 1);
}

#[test]
fn validate_rejects_duplicate_names() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(
        dir.path(),
        "commands:\n  - name: ping\n    description: a\n  - name: ping\n    description: b\n",
    );

    slashsync_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("is not a valid command set"))
        .stderr(contains("duplicate chat_input command name 'ping'"));
}

#[test]
fn validate_reports_missing_file() {
    let dir = TempDir::new().expect("tempdir");

    slashsync_cmd()
        .arg("validate")
        .arg(dir.path().join("absent.yml"))
        .assert()
        .failure()
        .stderr(contains("command file not found"));
}

#[test]
fn sync_requires_application_id() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(dir.path(), "commands:\n  - name: ping\n    description: Replies pong\n");

    slashsync_cmd()
        .arg("sync")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("--app-id"));
}

#[test]
fn sync_rejects_invalid_file_before_needing_a_token() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(dir.path(), "commands: []\n");

    slashsync_cmd()
        .args(["sync", "--app-id", "1234"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("no commands"));
}

#[test]
fn sync_requires_token() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(dir.path(), "commands:\n  - name: ping\n    description: Replies pong\n");

    slashsync_cmd()
        .args(["sync", "--app-id", "1234", "--dry-run"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("DISCORD_BOT_TOKEN"));
}

#[test]
fn validate_write_exports_normalized_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(
        dir.path(),
        "commands:\n  - name: poll\n    description: Run a poll\n    options:\n      - { name: minutes, description: How long, type: 4, min_value: 1, required: false }\n  - name: Quote\n    type: 3\n",
    );
    let out = dir.path().join("normalized.yml");

    slashsync_cmd()
        .arg("validate")
        .arg(&path)
        .arg("--write")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).expect("read normalized.yml");
    assert!(written.contains("type: 1"), "chat input type made explicit: {written}");
    assert!(written.contains("type: 3"), "got: {written}");
    assert!(written.contains("min_value: 1\n"), "got: {written}");
    assert!(!written.contains("required"), "optional flag omitted: {written}");
    assert!(!dir.path().join("normalized.yml.tmp").exists());
}

#[test]
fn validate_write_skipped_for_invalid_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_commands(dir.path(), "commands:\n  - name: ping\n");
    let out = dir.path().join("normalized.yml");

    slashsync_cmd()
        .arg("validate")
        .arg(&path)
        .arg("--write")
        .arg(&out)
        .assert()
        .failure();
    assert!(!out.exists());
}
