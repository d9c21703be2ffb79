//! Resolved Python interpreter

use std::fmt;

/// The interpreter chosen by the resolution step
///
/// `program` is the name (or path) that answered the probe; it is used for every
/// later call that runs outside the virtual environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    program: String,
    version: String,
}

impl Interpreter {
    pub fn new(program: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: version.into(),
        }
    }

    /// Build from a successful `--version` probe.
    ///
    /// Python 2 printed its version on stderr, Python 3 on stdout.
    pub fn from_probe(program: &str, stdout: &str, stderr: &str) -> Self {
        let reported = if stdout.trim().is_empty() {
            stderr.trim()
        } else {
            stdout.trim()
        };
        let version = reported
            .strip_prefix("Python ")
            .unwrap_or(reported)
            .to_string();
        Self::new(program, version)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} ({})", self.program, self.version)
        }
    }
}
