//! Launch Event Port
//!
//! Provides an observable interface for the launch sequence.
//! Enables terminal progress output and silent operation in tests.

use std::path::PathBuf;

use crate::domain::services::PatchOutcome;
use crate::domain::value_objects::{Interpreter, SetupStep};

/// How the UI process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppExit {
    pub code: Option<i32>,
    pub interrupted: bool,
}

impl AppExit {
    pub fn is_clean(&self) -> bool {
        !self.interrupted && self.code == Some(0)
    }
}

/// Event emitted during the launch sequence
#[derive(Debug, Clone)]
pub enum LaunchEvent {
    /// Interpreter probe succeeded
    InterpreterResolved { interpreter: Interpreter },

    /// Another launcher holds the setup lock
    WaitingForLock,

    /// A step is about to run
    StepStarted { step: SetupStep },

    /// A step was not needed
    StepSkipped { step: SetupStep, reason: String },

    /// A step finished successfully
    StepCompleted { step: SetupStep },

    /// A directory without a completion record was removed before redoing its step
    StaleDirectoryRemoved { step: SetupStep, path: PathBuf },

    /// One file of the provider patch set was processed
    FilePatched { file: PathBuf, outcome: PatchOutcome },

    /// The UI process is about to start
    AppStarting { entry: PathBuf, url: String },

    /// The UI process returned
    AppExited { exit: AppExit },
}

/// Trait for receiving launch events
pub trait LaunchEventSink {
    fn on_event(&self, event: LaunchEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LaunchEventSink for NoopEventSink {
    fn on_event(&self, _event: LaunchEvent) {}
}

impl<T: LaunchEventSink + ?Sized> LaunchEventSink for &T {
    fn on_event(&self, event: LaunchEvent) {
        (**self).on_event(event)
    }
}
