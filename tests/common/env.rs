//! Test environment for isolated launcher runs.
//!
//! Each `LauncherEnv` owns a temp base directory and a temp `bin/` that holds the
//! fake toolchain. The launcher runs with a cleared environment whose `PATH` is
//! only that `bin/`, so the real Python and git on the machine are never used.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fakes;

/// Result of one launcher run
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct LauncherEnv {
    pub base: TempDir,
    tools: TempDir,
}

impl LauncherEnv {
    /// Base directory with `app.py` and a full fake toolchain
    pub fn new() -> Self {
        let env = Self::bare();
        env.install_tool("python3", fakes::PYTHON3);
        env.install_tool("git", fakes::GIT);
        env.write("app.py", "print('AutoMV UI')\n");
        env
    }

    /// Empty base directory and an empty tool directory
    pub fn bare() -> Self {
        let env = Self {
            base: tempfile::tempdir().unwrap(),
            tools: tempfile::tempdir().unwrap(),
        };
        fs::create_dir_all(env.tools.path().join("bin")).unwrap();
        fs::write(env.tools.path().join("venv-python"), fakes::VENV_PYTHON).unwrap();
        make_executable(&env.tools.path().join("venv-python"));
        env
    }

    pub fn install_tool(&self, name: &str, script: &str) {
        let path = self.tools.path().join("bin").join(name);
        fs::write(&path, script).unwrap();
        make_executable(&path);
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.base.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn log_path(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    /// Command lines seen by the fakes since the last `clear_log`
    pub fn calls(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    pub fn clear_log(&self) {
        let _ = fs::remove_file(self.log_path());
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_automv-launcher"));
        cmd.env_clear()
            .current_dir(self.base.path())
            .arg("--dir")
            .arg(self.base.path())
            .arg("--no-pause")
            .args(args)
            .env("PATH", self.tools.path().join("bin"))
            .env("NO_COLOR", "1")
            .env("FAKE_LOG", self.log_path())
            .env("FAKE_VENV_PYTHON", self.tools.path().join("venv-python"));

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("failed to execute automv-launcher"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn make_executable(path: &Path) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}
