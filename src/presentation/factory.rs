//! Use Case Factory
//!
//! Creates the launch use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::LaunchUseCase;
use crate::infrastructure::{CtrlcInterrupts, FileSetupLock, SystemRunner, TomlStateRepository};

/// Type alias for the LaunchUseCase backed by real processes and files
pub type SystemLaunchUseCase =
    LaunchUseCase<SystemRunner, TomlStateRepository, FileSetupLock, CtrlcInterrupts>;

/// Create a launch use case whose state and lock live under `base_dir`
pub fn create_launch_use_case(base_dir: &Path) -> SystemLaunchUseCase {
    LaunchUseCase::new(
        SystemRunner::new(),
        TomlStateRepository::for_base_dir(base_dir),
        FileSetupLock::for_base_dir(base_dir),
        CtrlcInterrupts::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StateRepository;

    #[test]
    fn state_lives_under_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let _use_case = create_launch_use_case(dir.path());

        let repo = TomlStateRepository::for_base_dir(dir.path());
        assert!(repo.path().starts_with(dir.path()));
        assert!(repo.load().unwrap().is_empty());
    }
}
