//! Error types for the launcher
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`
//! only at the outermost boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for launcher operations
pub type LauncherResult<T> = Result<T, LauncherError>;

/// Coarse classification of a launcher failure.
///
/// Every kind is terminal: the launcher reports it once and exits with status 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingDependency,
    FetchFailure,
    EnvironmentCreationFailure,
    InstallFailure,
    PatchFailure,
    LaunchFailure,
    Config,
    State,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingDependency => "MissingDependency",
            ErrorKind::FetchFailure => "FetchFailure",
            ErrorKind::EnvironmentCreationFailure => "EnvironmentCreationFailure",
            ErrorKind::InstallFailure => "InstallFailure",
            ErrorKind::PatchFailure => "PatchFailure",
            ErrorKind::LaunchFailure => "LaunchFailure",
            ErrorKind::Config => "Config",
            ErrorKind::State => "State",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for launcher operations
#[derive(Error, Debug)]
pub enum LauncherError {
    /// No Python interpreter answered a `--version` probe
    #[error("no Python interpreter found (tried: {})", tried.join(", "))]
    MissingInterpreter { tried: Vec<String> },

    /// A required external tool is not installed
    #[error("'{tool}' is required but was not found on PATH")]
    MissingTool { tool: String },

    /// Cloning the application repository failed
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Creating the virtual environment failed
    #[error("failed to create environment at {path}: {reason}")]
    EnvironmentCreation { path: PathBuf, reason: String },

    /// Installing packages into the environment failed
    #[error("failed to install {}: {reason}", packages.join(", "))]
    Install {
        packages: Vec<String>,
        reason: String,
    },

    /// Reading or writing a file during patching failed
    #[error("failed to patch {path}: {source}")]
    Patch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The UI entry point could not be started
    #[error("failed to launch {entry}: {reason}")]
    Launch { entry: PathBuf, reason: String },

    /// Configuration file is unreadable or invalid
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A configured directory is not a plain child of the base directory
    #[error("refusing to use {} for {key}: it must be a relative path inside the base directory", path.display())]
    UnsafeDirectory { key: String, path: PathBuf },

    /// Setup state file is unreadable or corrupted
    #[error("setup state at {path} is corrupted: {message}")]
    CorruptState { path: PathBuf, message: String },

    /// IO error while maintaining setup bookkeeping (state, lock, marker dirs)
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LauncherError::MissingInterpreter { .. } | LauncherError::MissingTool { .. } => {
                ErrorKind::MissingDependency
            }
            LauncherError::Fetch { .. } => ErrorKind::FetchFailure,
            LauncherError::EnvironmentCreation { .. } => ErrorKind::EnvironmentCreationFailure,
            LauncherError::Install { .. } => ErrorKind::InstallFailure,
            LauncherError::Patch { .. } => ErrorKind::PatchFailure,
            LauncherError::Launch { .. } => ErrorKind::LaunchFailure,
            LauncherError::InvalidConfig { .. } | LauncherError::UnsafeDirectory { .. } => {
                ErrorKind::Config
            }
            LauncherError::CorruptState { .. } | LauncherError::Io { .. } => ErrorKind::State,
        }
    }

    /// Remedy shown under the diagnostic line, when there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            LauncherError::MissingInterpreter { .. } => Some(
                "Install Python 3: macOS `brew install python3`, \
                 Debian/Ubuntu `sudo apt install python3 python3-venv`, \
                 Windows https://www.python.org/downloads/"
                    .to_string(),
            ),
            LauncherError::MissingTool { tool } if tool == "git" => Some(
                "Install git: macOS `xcode-select --install`, \
                 Debian/Ubuntu `sudo apt install git`, \
                 Windows https://git-scm.com/download/win"
                    .to_string(),
            ),
            LauncherError::MissingTool { tool } => Some(format!("Install '{tool}' and retry")),
            LauncherError::Fetch { .. } => {
                Some("Check your internet connection and run the launcher again".to_string())
            }
            LauncherError::EnvironmentCreation { .. } => Some(
                "Make sure the Python `venv` module is available \
                 (Debian/Ubuntu: `sudo apt install python3-venv`)"
                    .to_string(),
            ),
            LauncherError::Install { .. } => Some(
                "Run again with -v to see pip's output, or check your internet connection"
                    .to_string(),
            ),
            LauncherError::CorruptState { path, .. } => Some(format!(
                "Delete {} to redo setup from scratch",
                path.display()
            )),
            LauncherError::InvalidConfig { file, .. } => {
                Some(format!("Fix or remove {}", file.display()))
            }
            LauncherError::UnsafeDirectory { .. } => Some(
                "Use a directory name such as `AutoMV_repo` or `venv` in launcher.toml".to_string(),
            ),
            LauncherError::Patch { .. }
            | LauncherError::Launch { .. }
            | LauncherError::Io { .. } => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LauncherError::Io {
            path: path.into(),
            source,
        }
    }
}
