//! Virtual environment descriptor and its activation
//!
//! Activation is modelled as data: the set of environment changes a child
//! process needs so that `python` and `pip` resolve inside the environment.
//! The launcher never changes its own process environment.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A Python virtual environment rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
    windows: bool,
}

impl VirtualEnv {
    /// Descriptor for the current platform's layout
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, cfg!(windows))
    }

    /// Descriptor for an explicit layout (`Scripts\` on Windows, `bin/` elsewhere)
    pub fn with_layout(root: impl Into<PathBuf>, windows: bool) -> Self {
        Self {
            root: root.into(),
            windows,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's executables
    pub fn scripts_dir(&self) -> PathBuf {
        if self.windows {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    /// The environment's own interpreter
    pub fn python(&self) -> PathBuf {
        if self.windows {
            self.scripts_dir().join("python.exe")
        } else {
            self.scripts_dir().join("python")
        }
    }

    /// Environment changes for child processes, given the PATH they would otherwise inherit
    pub fn activation(&self, inherited_path: Option<&OsStr>) -> Activation {
        let mut entries: Vec<PathBuf> = vec![self.scripts_dir()];
        if let Some(path) = inherited_path {
            entries.extend(std::env::split_paths(path));
        }
        let path = std::env::join_paths(&entries).unwrap_or_else(|_| {
            // An inherited entry contained the separator; fall back to the scripts dir alone.
            self.scripts_dir().into_os_string()
        });

        Activation {
            set: vec![
                (OsString::from("VIRTUAL_ENV"), self.root.clone().into_os_string()),
                (OsString::from("PATH"), path),
            ],
            remove: vec![OsString::from("PYTHONHOME")],
        }
    }
}

/// Environment variable changes applied to one child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activation {
    set: Vec<(OsString, OsString)>,
    remove: Vec<OsString>,
}

impl Activation {
    pub fn set_vars(&self) -> &[(OsString, OsString)] {
        &self.set
    }

    pub fn removed_vars(&self) -> &[OsString] {
        &self.remove
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.set
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }
}
