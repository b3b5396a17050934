//! Tests for the headless binary's argument handling and offline commands.

use std::path::Path;
use std::process::{Command, Output};

use photo_browser::config::CLIENT_ID_ENV_VAR;
use tempfile::TempDir;

fn photo_browser_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_photo-browser"));
    cmd.env_remove(CLIENT_ID_ENV_VAR).env_remove("PHOTO_BROWSER_LOG");
    cmd
}

/// Config pointing storage at `dir`, with no client id.
fn offline_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    let storage = dir.join("data");
    std::fs::write(
        &path,
        format!("[storage]\ndir = {:?}\n", storage.to_string_lossy()),
    )
    .unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    photo_browser_cmd()
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_subcommands() {
    let output = run(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["feed", "search", "favorites", "like", "--config"] {
        assert!(stdout.contains(name), "help is missing {}", name);
    }
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_feed_without_client_id_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(dir.path());

    let output = run(&["--config", config.to_str().unwrap(), "feed"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create API client"));
    assert!(stderr.contains(CLIENT_ID_ENV_VAR));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[feed]\nfirst_page = 0\n").unwrap();

    let output = run(&["--config", config.to_str().unwrap(), "favorites", "list"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_favorites_list_and_remove_work_offline() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(dir.path());
    let config = config.to_str().unwrap();

    let output = run(&["--config", config, "favorites", "list"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No favorites saved"));

    let output = run(&["--config", config, "favorites", "remove", "nope"]);
    assert!(output.status.success());
}
