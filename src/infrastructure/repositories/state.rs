//! TOML State Repository
//!
//! Persists setup progress records at `<base>/.automv-launcher/state.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{SetupState, StepRecord, STATE_VERSION};
use crate::domain::ports::StateRepository;
use crate::error::{LauncherError, LauncherResult};

/// Launcher bookkeeping directory inside the base directory
pub const STATE_DIR: &str = ".automv-launcher";
pub const STATE_FILE: &str = "state.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlStepRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlState {
    version: u32,
    #[serde(default)]
    steps: BTreeMap<String, TomlStepRecord>,
}

pub struct TomlStateRepository {
    path: PathBuf,
}

impl TomlStateRepository {
    /// Repository for the standard location under `base_dir`
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self {
            path: base_dir.join(STATE_DIR).join(STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupted(&self, message: impl Into<String>) -> LauncherError {
        LauncherError::CorruptState {
            path: self.path.clone(),
            message: message.into(),
        }
    }
}

impl StateRepository for TomlStateRepository {
    fn load(&self) -> LauncherResult<SetupState> {
        if !self.path.exists() {
            return Ok(SetupState::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| LauncherError::io(&self.path, e))?;
        let toml_state: TomlState =
            toml::from_str(&content).map_err(|e| self.corrupted(e.to_string()))?;

        if toml_state.version > STATE_VERSION {
            return Err(self.corrupted(format!(
                "state version {} is newer than supported version {}",
                toml_state.version, STATE_VERSION
            )));
        }

        Ok(from_toml(toml_state))
    }

    fn save(&self, state: &SetupState) -> LauncherResult<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| LauncherError::io(parent, e))?;

        let content = toml::to_string_pretty(&to_toml(state))
            .map_err(|e| self.corrupted(e.to_string()))?;

        // Sibling temp file + rename: readers see either the old or the new state
        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| LauncherError::io(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| LauncherError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| LauncherError::io(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), "saved setup state");
        Ok(())
    }
}

fn from_toml(toml_state: TomlState) -> SetupState {
    let steps = toml_state
        .steps
        .into_iter()
        .map(|(key, r)| {
            (
                key,
                StepRecord {
                    started_at: r.started_at,
                    completed_at: r.completed_at,
                    detail: r.detail,
                },
            )
        })
        .collect();
    SetupState::from_records(toml_state.version, steps)
}

fn to_toml(state: &SetupState) -> TomlState {
    TomlState {
        version: state.version,
        steps: state
            .records()
            .map(|(key, r)| {
                (
                    key.to_string(),
                    TomlStepRecord {
                        started_at: r.started_at,
                        completed_at: r.completed_at,
                        detail: r.detail.clone(),
                    },
                )
            })
            .collect(),
    }
}
