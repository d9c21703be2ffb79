//! Configuration type definitions

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{LauncherError, LauncherResult};

use super::loader::{self, ConfigWarning};

// Re-export MarkerPolicy from domain layer
pub use crate::domain::value_objects::MarkerPolicy;

/// Upstream location of the application repository
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/multimodal-art-projection/AutoMV.git";

/// Interpreter probing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InterpreterConfig {
    /// Names tried in order with `--version`
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
        }
    }
}

fn default_candidates() -> Vec<String> {
    vec!["python3".to_string(), "python".to_string()]
}

/// Application repository configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_url")]
    pub url: String,

    /// Clone directory, relative to the base directory
    #[serde(default = "default_repository_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub branch: Option<String>,

    /// Shallow clone depth
    #[serde(default)]
    pub depth: Option<u32>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            url: default_repository_url(),
            dir: default_repository_dir(),
            branch: None,
            depth: None,
        }
    }
}

fn default_repository_url() -> String {
    DEFAULT_REPOSITORY_URL.to_string()
}

fn default_repository_dir() -> PathBuf {
    PathBuf::from("AutoMV_repo")
}

/// Virtual environment configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    /// Environment directory, relative to the base directory
    #[serde(default = "default_environment_dir")]
    pub dir: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            dir: default_environment_dir(),
        }
    }
}

fn default_environment_dir() -> PathBuf {
    PathBuf::from("venv")
}

/// Package installation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PackagesConfig {
    #[serde(default = "default_packages")]
    pub install: Vec<String>,

    #[serde(default = "default_true")]
    pub upgrade: bool,

    #[serde(default = "default_true")]
    pub quiet: bool,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            install: default_packages(),
            upgrade: true,
            quiet: true,
        }
    }
}

fn default_packages() -> Vec<String> {
    vec!["gradio".to_string(), "python-dotenv".to_string()]
}

/// UI entry point configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Entry point script, relative to the base directory
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Port the UI listens on (shown to the user, not enforced)
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            port: default_port(),
        }
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from("app.py")
}

fn default_port() -> u16 {
    7860
}

/// Setup bookkeeping configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SetupConfig {
    #[serde(default)]
    pub marker_policy: MarkerPolicy,
}

/// Provider patch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PatchesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for PatchesConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main launcher configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub interpreter: InterpreterConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub packages: PackagesConfig,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub setup: SetupConfig,

    #[serde(default)]
    pub patches: PatchesConfig,
}

impl Config {
    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> LauncherResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Directories the launcher creates (and may remove) must stay inside the base directory
    pub fn check_directories(&self) -> LauncherResult<()> {
        for (key, dir) in [
            ("repository.dir", &self.repository.dir),
            ("environment.dir", &self.environment.dir),
        ] {
            if !is_child_path(dir) {
                return Err(LauncherError::UnsafeDirectory {
                    key: key.to_string(),
                    path: dir.clone(),
                });
            }
        }
        Ok(())
    }

    /// URL shown to the user once the UI is starting
    pub fn app_url(&self) -> String {
        format!("http://localhost:{}", self.app.port)
    }
}

/// A non-empty relative path of plain names; `.` segments are allowed, `..` and roots are not
pub fn is_child_path(path: &Path) -> bool {
    let mut named = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    named
}
