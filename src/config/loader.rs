//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LauncherError, LauncherResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, MarkerPolicy};

/// Default configuration file name inside the base directory
pub const CONFIG_FILE: &str = "launcher.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LauncherResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LauncherError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LauncherError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config
        .check_directories()
        .map_err(|e| LauncherError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, `<base>/launcher.toml`, or defaults
///
/// An explicit path must exist; the default file is optional.
pub fn load_or_default(
    base_dir: &Path,
    explicit: Option<&Path>,
) -> LauncherResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let default_path = base_dir.join(CONFIG_FILE);
    if default_path.exists() {
        return load_with_warnings(&default_path);
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (AUTOMV_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary variable source; invalid values are reported to `writer`
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    // AUTOMV_PYTHON is tried before the configured candidates
    if let Some(python) = get_env("AUTOMV_PYTHON").filter(|v| !v.trim().is_empty()) {
        let python = python.trim().to_string();
        config.interpreter.candidates.retain(|c| c != &python);
        config.interpreter.candidates.insert(0, python);
    }

    if let Some(url) = get_env("AUTOMV_REPO_URL").filter(|v| !v.trim().is_empty()) {
        config.repository.url = url.trim().to_string();
    }

    if let Some(policy) = get_env("AUTOMV_MARKER_POLICY") {
        let validator = EnvVarValidator::new("AUTOMV_MARKER_POLICY", MarkerPolicy::VALID_VALUES);
        config.setup.marker_policy =
            validator.parse_with_writer(&policy, MarkerPolicy::parse, MarkerPolicy::default(), writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "interpreter",
        "candidates",
        "repository",
        "url",
        "dir",
        "branch",
        "depth",
        "environment",
        "packages",
        "install",
        "upgrade",
        "quiet",
        "app",
        "entry",
        "port",
        "setup",
        "marker_policy",
        "patches",
        "enabled",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
