//! Apply a patch set to a checked-out tree
//!
//! Reads each file relative to `root`, runs the marker-gated edits and writes
//! back only files whose content changed.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::ports::{LaunchEvent, LaunchEventSink};
use crate::domain::services::{apply_file_patch, PatchOutcome, PatchSet};
use crate::error::{LauncherError, LauncherResult};

/// Counts per outcome for one patch set run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub patched: usize,
    pub already_patched: usize,
    pub unchanged: usize,
    pub missing: usize,
    pub warnings: usize,
}

impl PatchSummary {
    fn count(&mut self, outcome: &PatchOutcome) {
        match outcome {
            PatchOutcome::Missing => self.missing += 1,
            PatchOutcome::AlreadyPatched => self.already_patched += 1,
            PatchOutcome::Unchanged { .. } => self.unchanged += 1,
            PatchOutcome::Patched { .. } => self.patched += 1,
        }
        if outcome.is_warning() {
            self.warnings += 1;
        }
    }
}

pub fn apply_patch_set<E: LaunchEventSink>(
    root: &Path,
    set: &PatchSet,
    events: &E,
) -> LauncherResult<PatchSummary> {
    let mut summary = PatchSummary::default();

    for file in &set.files {
        let path = root.join(&file.path);
        let content = match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(source) => return Err(LauncherError::Patch { path, source }),
        };

        let outcome = match content {
            None => PatchOutcome::Missing,
            Some(content) => {
                let (outcome, rewritten) = apply_file_patch(file, &content);
                if let Some(rewritten) = rewritten {
                    fs::write(&path, rewritten)
                        .map_err(|source| LauncherError::Patch {
                            path: path.clone(),
                            source,
                        })?;
                }
                outcome
            }
        };

        tracing::debug!(set = %set.name, file = %file.path.display(), ?outcome, "patch applied");
        summary.count(&outcome);
        events.on_event(LaunchEvent::FilePatched {
            file: file.path.clone(),
            outcome,
        });
    }

    Ok(summary)
}
