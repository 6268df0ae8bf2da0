//! Testes de integração para a CLI do TopHit.

use std::process::Command;

fn tophit_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tophit"))
}

#[test]
fn test_version_command() {
    let output = tophit_bin()
        .arg("version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tophit"));
}

#[test]
fn test_help_command() {
    let output = tophit_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("search"));
    assert!(stdout.contains("providers"));
}

#[test]
fn test_providers_command() {
    let output = tophit_bin()
        .arg("providers")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("settings"));
    assert!(stdout.contains("files"));
    assert!(stdout.contains("ProjectFilesProvider"));
}

#[test]
fn test_init_creates_config() {
    let dir = tempfile::tempdir().unwrap();

    let output = tophit_bin()
        .args(["init", "--path"])
        .arg(dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let config_path = dir.path().join("tophit.toml");
    assert!(config_path.exists());

    let config = tophit::Config::load(&config_path).unwrap();
    assert!(!config.options.is_empty());
}

#[test]
fn test_search_default_options() {
    let dir = tempfile::tempdir().unwrap();

    let output = tophit_bin()
        .current_dir(dir.path())
        .args(["search", "font"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Font size"));
    assert!(!stdout.contains("Theme"));
}

#[test]
fn test_search_project_files_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("README.md"), "# demo").unwrap();

    let output = tophit_bin()
        .current_dir(dir.path())
        .args(["search", "readme", "--json", "--project"])
        .arg(dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let hits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["option"], "README.md");
    assert_eq!(hits[0]["group"], "Files");
}
