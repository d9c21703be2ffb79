//! Launch plan: configuration resolved against a base directory

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::services::{byteplus_patch_set, PatchSet};
use crate::domain::value_objects::MarkerPolicy;
use crate::error::LauncherResult;

/// Everything the launch sequence needs, with paths made absolute
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub base_dir: PathBuf,
    pub candidates: Vec<String>,
    pub repository_url: String,
    pub repository_dir: PathBuf,
    pub branch: Option<String>,
    pub depth: Option<u32>,
    pub environment_dir: PathBuf,
    pub packages: Vec<String>,
    pub upgrade: bool,
    pub quiet_install: bool,
    pub entry: PathBuf,
    pub app_url: String,
    pub marker_policy: MarkerPolicy,
    pub patch_set: Option<PatchSet>,
    /// PATH the children would inherit; the environment's scripts dir is prepended to it
    pub inherited_path: Option<OsString>,
}

impl LaunchPlan {
    /// Fails when a configured directory would resolve outside `base_dir`
    pub fn from_config(base_dir: impl Into<PathBuf>, config: &Config) -> LauncherResult<Self> {
        config.check_directories()?;
        let base_dir = base_dir.into();
        Ok(Self {
            candidates: config.interpreter.candidates.clone(),
            repository_url: config.repository.url.clone(),
            repository_dir: base_dir.join(&config.repository.dir),
            branch: config.repository.branch.clone(),
            depth: config.repository.depth,
            environment_dir: base_dir.join(&config.environment.dir),
            packages: config.packages.install.clone(),
            upgrade: config.packages.upgrade,
            quiet_install: config.packages.quiet,
            entry: base_dir.join(&config.app.entry),
            app_url: config.app_url(),
            marker_policy: config.setup.marker_policy,
            patch_set: config.patches.enabled.then(byteplus_patch_set),
            inherited_path: None,
            base_dir,
        })
    }

    pub fn with_inherited_path(mut self, path: Option<OsString>) -> Self {
        self.inherited_path = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LauncherError;

    #[test]
    fn paths_are_joined_to_base_dir() {
        let plan = LaunchPlan::from_config("/opt/automv", &Config::default()).unwrap();

        assert_eq!(plan.repository_dir, PathBuf::from("/opt/automv/AutoMV_repo"));
        assert_eq!(plan.environment_dir, PathBuf::from("/opt/automv/venv"));
        assert_eq!(plan.entry, PathBuf::from("/opt/automv/app.py"));
        assert!(plan.patch_set.is_some());
        assert!(plan.inherited_path.is_none());
    }

    #[test]
    fn disabled_patches_leave_no_patch_set() {
        let mut config = Config::default();
        config.patches.enabled = false;

        let plan = LaunchPlan::from_config("/opt/automv", &config).unwrap();
        assert!(plan.patch_set.is_none());
    }

    #[test]
    fn directories_must_stay_inside_base_dir() {
        for dir in ["", ".", "..", "/var/cache/automv-venv"] {
            let mut config = Config::default();
            config.environment.dir = PathBuf::from(dir);

            let err = LaunchPlan::from_config("/opt/automv", &config).unwrap_err();
            assert!(
                matches!(err, LauncherError::UnsafeDirectory { ref key, .. } if key == "environment.dir"),
                "{dir:?}: {err}"
            );
        }
    }
}
