//! ProcessRunner port - abstraction over spawning external commands
//!
//! Implementations:
//! - `SystemRunner` - real processes via `std::process::Command`
//! - scripted fakes in tests

use std::fmt;
use std::io;

use crate::domain::value_objects::CommandSpec;

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExitInfo {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Result of a finished child process
///
/// `stdout`/`stderr` are only populated for `OutputMode::Capture`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub status: ExitInfo,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn from_status(status: ExitInfo) -> Self {
        Self {
            status,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Runs a command to completion, blocking the caller
///
/// An `Err` means the process could not be started at all (typically
/// `io::ErrorKind::NotFound`); a started process that fails is an `Ok` with a
/// non-success status.
pub trait ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessOutput>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessOutput> {
        (**self).run(spec)
    }
}
