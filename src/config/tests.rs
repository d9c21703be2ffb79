//! Tests for the config module

use super::loader::*;
use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.interpreter.candidates, vec!["python3", "python"]);
    assert_eq!(config.repository.url, DEFAULT_REPOSITORY_URL);
    assert_eq!(config.repository.dir, PathBuf::from("AutoMV_repo"));
    assert_eq!(config.environment.dir, PathBuf::from("venv"));
    assert_eq!(config.packages.install, vec!["gradio", "python-dotenv"]);
    assert!(config.packages.upgrade);
    assert!(config.packages.quiet);
    assert_eq!(config.app.entry, PathBuf::from("app.py"));
    assert_eq!(config.setup.marker_policy, MarkerPolicy::Sentinel);
    assert!(config.patches.enabled);
    assert_eq!(config.app_url(), "http://localhost:7860");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[interpreter]
candidates = ["python3.11"]

[repository]
url = "https://example.com/fork.git"
branch = "dev"
depth = 1

[packages]
install = ["gradio"]
quiet = false

[app]
port = 8080

[setup]
marker_policy = "presence"

[patches]
enabled = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.interpreter.candidates, vec!["python3.11"]);
    assert_eq!(config.repository.branch.as_deref(), Some("dev"));
    assert_eq!(config.repository.depth, Some(1));
    // Unset keys keep their defaults
    assert_eq!(config.repository.dir, PathBuf::from("AutoMV_repo"));
    assert!(config.packages.upgrade);
    assert!(!config.packages.quiet);
    assert_eq!(config.app_url(), "http://localhost:8080");
    assert_eq!(config.setup.marker_policy, MarkerPolicy::Presence);
    assert!(!config.patches.enabled);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[packages]\ninstal = [\"gradio\"]\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.packages.install, vec!["gradio", "python-dotenv"]);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "instal");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("install"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[setup]\nmarker_policy = \"sometimes\"\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    assert!(err.to_string().contains("launcher.toml"));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let (config, warnings) = load_or_default(dir.path(), None).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.app.port, 7860);
}

#[test]
fn test_load_or_default_reads_base_dir_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[app]\nport = 9000\n").unwrap();

    let (config, _) = load_or_default(dir.path(), None).unwrap();
    assert_eq!(config.app.port, 9000);
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_or_default(dir.path(), Some(Path::new(&missing))).is_err());
}

#[test]
fn test_env_overrides() {
    let mut output = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        |key| match key {
            "AUTOMV_PYTHON" => Some("python".to_string()),
            "AUTOMV_REPO_URL" => Some("https://example.com/mirror.git".to_string()),
            "AUTOMV_MARKER_POLICY" => Some("presence".to_string()),
            _ => None,
        },
        &mut output,
    );

    // Moved to the front, not duplicated
    assert_eq!(config.interpreter.candidates, vec!["python", "python3"]);
    assert_eq!(config.repository.url, "https://example.com/mirror.git");
    assert_eq!(config.setup.marker_policy, MarkerPolicy::Presence);
    assert!(output.is_empty());
}

#[test]
fn test_invalid_marker_policy_env_falls_back_with_warning() {
    let mut config = Config::default();
    config.setup.marker_policy = MarkerPolicy::Presence;

    let mut output = Vec::new();
    let config = with_env_overrides_from(
        config,
        |key| (key == "AUTOMV_MARKER_POLICY").then(|| "sentinal".to_string()),
        &mut output,
    );

    assert_eq!(config.setup.marker_policy, MarkerPolicy::Sentinel);
    let msg = String::from_utf8(output).unwrap();
    assert!(msg.contains("Did you mean 'sentinel'?"), "{msg}");
}

#[test]
fn test_blank_env_values_are_ignored() {
    let mut output = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        |key| (key == "AUTOMV_REPO_URL" || key == "AUTOMV_PYTHON").then(|| "  ".to_string()),
        &mut output,
    );
    assert_eq!(config.repository.url, DEFAULT_REPOSITORY_URL);
    assert_eq!(config.interpreter.candidates, vec!["python3", "python"]);
}

#[test]
fn test_child_paths() {
    for ok in ["venv", "AutoMV_repo", "./venv", "envs/automv"] {
        assert!(is_child_path(Path::new(ok)), "{ok}");
    }
    for bad in ["", ".", "./", "..", "../venv", "envs/../../x", "/home/user"] {
        assert!(!is_child_path(Path::new(bad)), "{bad}");
    }
}

#[test]
fn test_directories_outside_base_dir_are_rejected() {
    for (section, value) in [
        ("repository", ""),
        ("repository", "."),
        ("environment", ".."),
        ("environment", "/home/user"),
    ] {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, format!("[{section}]\ndir = \"{value}\"\n")).unwrap();

        let err = load_with_warnings(&path).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config, "{section}.dir = {value:?}");
        assert!(err.to_string().contains(&format!("{section}.dir")), "{err}");
    }
}

#[test]
fn test_default_directories_pass_the_check() {
    assert!(Config::default().check_directories().is_ok());
}
