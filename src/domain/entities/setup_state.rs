//! Setup State Entity
//!
//! Progress records for setup steps. A step is marked started before its
//! command runs and complete only after it succeeded, so a directory left
//! behind by an interrupted clone or environment creation carries a started
//! record without a completion.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::SetupStep;

/// Current state file format version
pub const STATE_VERSION: u32 = 1;

/// Where a step stands according to the setup state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepProgress {
    /// No record at all
    Unknown,
    /// Started by a launcher that never recorded the outcome
    Started,
    Complete,
}

/// One started or completed step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Free-form detail, e.g. the URL cloned or the interpreter used
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupState {
    pub version: u32,
    steps: BTreeMap<String, StepRecord>,
}

impl SetupState {
    pub fn new() -> Self {
        Self {
            version: STATE_VERSION,
            steps: BTreeMap::new(),
        }
    }

    pub fn from_records(version: u32, steps: BTreeMap<String, StepRecord>) -> Self {
        Self { version, steps }
    }

    pub fn progress(&self, step: SetupStep) -> StepProgress {
        match self.steps.get(step.key()) {
            None => StepProgress::Unknown,
            Some(r) if r.completed_at.is_some() => StepProgress::Complete,
            Some(_) => StepProgress::Started,
        }
    }

    pub fn is_complete(&self, step: SetupStep) -> bool {
        self.progress(step) == StepProgress::Complete
    }

    pub fn record(&self, step: SetupStep) -> Option<&StepRecord> {
        self.steps.get(step.key())
    }

    /// Replaces any earlier record, so a redone step starts clean
    pub fn mark_started(&mut self, step: SetupStep, started_at: DateTime<Utc>) {
        self.steps.insert(
            step.key().to_string(),
            StepRecord {
                started_at: Some(started_at),
                completed_at: None,
                detail: None,
            },
        );
    }

    pub fn mark_complete(
        &mut self,
        step: SetupStep,
        detail: Option<String>,
        completed_at: DateTime<Utc>,
    ) {
        let started_at = self.steps.get(step.key()).and_then(|r| r.started_at);
        self.steps.insert(
            step.key().to_string(),
            StepRecord {
                started_at,
                completed_at: Some(completed_at),
                detail,
            },
        );
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &StepRecord)> {
        self.steps.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for SetupState {
    fn default() -> Self {
        Self::new()
    }
}
