//! System Process Runner
//!
//! Runs command specs as real child processes.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{ExitInfo, ProcessOutput, ProcessRunner};
use crate::domain::value_objects::{CommandSpec, OutputMode};

/// Process runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(spec.program());
        cmd.args(spec.get_args());

        if let Some(dir) = spec.cwd() {
            cmd.current_dir(dir);
        }
        for key in spec.env_remove() {
            cmd.env_remove(key);
        }
        for (key, value) in spec.envs() {
            cmd.env(key, value);
        }

        match spec.output() {
            OutputMode::Inherit => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            OutputMode::Capture => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
            }
        }

        cmd
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessOutput> {
        tracing::debug!(command = %spec, cwd = ?spec.cwd(), "spawning");
        let mut cmd = Self::build(spec);

        let output = match spec.output() {
            OutputMode::Inherit => {
                let status = cmd.status()?;
                ProcessOutput::from_status(ExitInfo {
                    code: status.code(),
                })
            }
            OutputMode::Capture => {
                let out = cmd.output()?;
                ProcessOutput {
                    status: ExitInfo {
                        code: out.status.code(),
                    },
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
                }
            }
        };

        tracing::debug!(command = %spec, status = %output.status, "finished");
        Ok(output)
    }
}
