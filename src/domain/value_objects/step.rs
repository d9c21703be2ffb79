//! Setup step identifiers

use std::fmt;

/// One stage of the launch sequence, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SetupStep {
    /// Clone the application repository
    Fetch,
    /// Apply provider patches to the clone
    Patch,
    /// Create the virtual environment
    Environment,
    /// Install/upgrade packages into the environment
    Install,
    /// Run the UI entry point
    Launch,
}

impl SetupStep {
    pub const ALL: [SetupStep; 5] = [
        SetupStep::Fetch,
        SetupStep::Patch,
        SetupStep::Environment,
        SetupStep::Install,
        SetupStep::Launch,
    ];

    /// Key used in the setup state file
    pub fn key(&self) -> &'static str {
        match self {
            SetupStep::Fetch => "fetch",
            SetupStep::Patch => "patch",
            SetupStep::Environment => "environment",
            SetupStep::Install => "install",
            SetupStep::Launch => "launch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SetupStep::Fetch => "Fetch application",
            SetupStep::Patch => "Apply provider patches",
            SetupStep::Environment => "Create environment",
            SetupStep::Install => "Install packages",
            SetupStep::Launch => "Launch UI",
        }
    }

    /// Whether the step leaves a marker directory behind and gets a completion record
    pub fn is_gated(&self) -> bool {
        matches!(self, SetupStep::Fetch | SetupStep::Environment)
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
