//! Launch Use Case
//!
//! Orchestrates the bootstrap sequence. Every external effect goes through a
//! port, so the whole sequence runs against fakes in tests.

use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::config::is_child_path;
use crate::domain::entities::{SetupState, StepProgress};
use crate::domain::ports::{
    AppExit, InterruptSource, LaunchEvent, LaunchEventSink, ProcessRunner, SetupLock,
    StateRepository,
};
use crate::domain::services::{decide, GateDecision};
use crate::domain::value_objects::{Activation, CommandSpec, Interpreter, SetupStep, VirtualEnv};
use crate::error::{LauncherError, LauncherResult};

use super::options::LaunchPlan;
use crate::application::patch::apply_patch_set;

/// Completion detail for a directory that existed before any record of it
const ADOPTED: &str = "adopted existing directory";

/// Releases the setup lock when setup ends, whichever way it ends
struct LockGuard<'a, L: SetupLock> {
    lock: &'a L,
}

impl<L: SetupLock> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// Launch use case - brings a base directory from nothing to a running UI
pub struct LaunchUseCase<R, S, L, I>
where
    R: ProcessRunner,
    S: StateRepository,
    L: SetupLock,
    I: InterruptSource,
{
    runner: R,
    state_repo: S,
    lock: L,
    interrupts: I,
}

impl<R, S, L, I> LaunchUseCase<R, S, L, I>
where
    R: ProcessRunner,
    S: StateRepository,
    L: SetupLock,
    I: InterruptSource,
{
    pub fn new(runner: R, state_repo: S, lock: L, interrupts: I) -> Self {
        Self {
            runner,
            state_repo,
            lock,
            interrupts,
        }
    }

    /// Run the whole sequence and return how the UI process ended
    ///
    /// Any `Err` is terminal; nothing after the failing step ran.
    pub fn execute<E: LaunchEventSink>(
        &self,
        plan: &LaunchPlan,
        events: &E,
    ) -> LauncherResult<AppExit> {
        let interpreter = self.resolve_interpreter(plan)?;
        events.on_event(LaunchEvent::InterpreterResolved {
            interpreter: interpreter.clone(),
        });

        let venv = self.prepare(plan, &interpreter, events)?;
        let activation = venv.activation(plan.inherited_path.as_deref());

        self.launch(plan, &venv, &activation, events)
    }

    /// Probe candidates in order; the first one whose `--version` succeeds wins
    pub fn resolve_interpreter(&self, plan: &LaunchPlan) -> LauncherResult<Interpreter> {
        for candidate in &plan.candidates {
            let probe = CommandSpec::new(candidate).arg("--version").capture();
            match self.runner.run(&probe) {
                Ok(output) if output.status.success() => {
                    let interpreter =
                        Interpreter::from_probe(candidate, &output.stdout, &output.stderr);
                    tracing::info!(%interpreter, "interpreter resolved");
                    return Ok(interpreter);
                }
                Ok(output) => {
                    tracing::debug!(%candidate, status = %output.status, "interpreter probe failed")
                }
                Err(e) => tracing::debug!(%candidate, error = %e, "interpreter not runnable"),
            }
        }

        Err(LauncherError::MissingInterpreter {
            tried: plan.candidates.clone(),
        })
    }

    /// Setup steps under the lock: fetch, patch, environment, install
    fn prepare<E: LaunchEventSink>(
        &self,
        plan: &LaunchPlan,
        interpreter: &Interpreter,
        events: &E,
    ) -> LauncherResult<VirtualEnv> {
        if !self.lock.try_acquire()? {
            events.on_event(LaunchEvent::WaitingForLock);
            self.lock.acquire()?;
        }
        let _guard = LockGuard { lock: &self.lock };

        let mut state = self.state_repo.load()?;

        self.ensure_tree(plan, &mut state, events)?;
        self.patch_tree(plan, events)?;
        let venv = self.ensure_environment(plan, interpreter, &mut state, events)?;
        self.install_packages(plan, &venv, events)?;

        Ok(venv)
    }

    /// Decide a gated step and clean up whatever an unfinished earlier run left
    ///
    /// Returns `true` when the step has to run.
    fn gate<E: LaunchEventSink>(
        &self,
        plan: &LaunchPlan,
        step: SetupStep,
        dir: &Path,
        state: &mut SetupState,
        events: &E,
    ) -> LauncherResult<bool> {
        let dir_exists = dir.exists();
        let progress = state.progress(step);
        let decision = decide(plan.marker_policy, dir_exists, progress);
        tracing::info!(
            step = step.key(),
            dir_exists,
            ?progress,
            policy = plan.marker_policy.as_str(),
            ?decision,
            "step gate"
        );

        match decision {
            GateDecision::Skip => {
                events.on_event(LaunchEvent::StepSkipped {
                    step,
                    reason: format!("{} already exists", dir.display()),
                });
                Ok(false)
            }
            GateDecision::Adopt => {
                state.mark_complete(step, Some(ADOPTED.to_string()), Utc::now());
                self.state_repo.save(state)?;
                tracing::info!(step = step.key(), dir = %dir.display(), "adopted existing directory");
                events.on_event(LaunchEvent::StepSkipped {
                    step,
                    reason: format!("{} already exists, kept as is", dir.display()),
                });
                Ok(false)
            }
            GateDecision::Run => {
                if progress == StepProgress::Complete {
                    tracing::warn!(step = step.key(), dir = %dir.display(), "recorded directory vanished; redoing step");
                }
                Ok(true)
            }
            GateDecision::ClearAndRun => {
                remove_dir(&plan.base_dir, dir)?;
                tracing::warn!(step = step.key(), dir = %dir.display(), "removed unfinished directory");
                events.on_event(LaunchEvent::StaleDirectoryRemoved {
                    step,
                    path: dir.to_path_buf(),
                });
                Ok(true)
            }
        }
    }

    /// Persist that `step` is about to produce its directory
    fn begin(&self, step: SetupStep, state: &mut SetupState) -> LauncherResult<()> {
        state.mark_started(step, Utc::now());
        self.state_repo.save(state)
    }

    fn record<E: LaunchEventSink>(
        &self,
        step: SetupStep,
        detail: String,
        state: &mut SetupState,
        events: &E,
    ) -> LauncherResult<()> {
        state.mark_complete(step, Some(detail), Utc::now());
        self.state_repo.save(state)?;
        events.on_event(LaunchEvent::StepCompleted { step });
        Ok(())
    }

    fn ensure_tree<E: LaunchEventSink>(
        &self,
        plan: &LaunchPlan,
        state: &mut SetupState,
        events: &E,
    ) -> LauncherResult<()> {
        let step = SetupStep::Fetch;
        if !self.gate(plan, step, &plan.repository_dir, state, events)? {
            return Ok(());
        }

        self.require_tool("git")?;
        self.begin(step, state)?;
        events.on_event(LaunchEvent::StepStarted { step });

        let mut clone = CommandSpec::new("git").arg("clone");
        if let Some(depth) = plan.depth {
            clone = clone.arg("--depth").arg(depth.to_string());
        }
        if let Some(branch) = &plan.branch {
            clone = clone.arg("--branch").arg(branch);
        }
        let clone = clone
            .arg(&plan.repository_url)
            .arg(&plan.repository_dir)
            .current_dir(&plan.base_dir);

        let fetch_error = |reason: String| LauncherError::Fetch {
            url: plan.repository_url.clone(),
            reason,
        };
        let output = self
            .runner
            .run(&clone)
            .map_err(|e| fetch_error(format!("could not run git: {e}")))?;
        if !output.status.success() {
            return Err(fetch_error(format!("git clone failed ({})", output.status)));
        }

        self.record(step, plan.repository_url.clone(), state, events)
    }

    /// Patches run every time; an absent tree (presence policy) just reports missing files
    fn patch_tree<E: LaunchEventSink>(&self, plan: &LaunchPlan, events: &E) -> LauncherResult<()> {
        let step = SetupStep::Patch;
        let Some(set) = &plan.patch_set else {
            events.on_event(LaunchEvent::StepSkipped {
                step,
                reason: "disabled in configuration".to_string(),
            });
            return Ok(());
        };

        events.on_event(LaunchEvent::StepStarted { step });
        let summary = apply_patch_set(&plan.repository_dir, set, events)?;
        tracing::info!(set = %set.name, ?summary, "patch set applied");
        events.on_event(LaunchEvent::StepCompleted { step });
        Ok(())
    }

    fn ensure_environment<E: LaunchEventSink>(
        &self,
        plan: &LaunchPlan,
        interpreter: &Interpreter,
        state: &mut SetupState,
        events: &E,
    ) -> LauncherResult<VirtualEnv> {
        let step = SetupStep::Environment;
        let venv = VirtualEnv::new(&plan.environment_dir);
        if !self.gate(plan, step, venv.root(), state, events)? {
            return Ok(venv);
        }

        self.begin(step, state)?;
        events.on_event(LaunchEvent::StepStarted { step });
        let create = CommandSpec::new(interpreter.program())
            .args(["-m", "venv"])
            .arg(venv.root())
            .current_dir(&plan.base_dir);

        let creation_error = |reason: String| LauncherError::EnvironmentCreation {
            path: venv.root().to_path_buf(),
            reason,
        };
        let output = self
            .runner
            .run(&create)
            .map_err(|e| creation_error(format!("could not run {}: {e}", interpreter.program())))?;
        if !output.status.success() {
            return Err(creation_error(format!("venv exited with {}", output.status)));
        }

        self.record(step, interpreter.program().to_string(), state, events)?;
        Ok(venv)
    }

    fn install_packages<E: LaunchEventSink>(
        &self,
        plan: &LaunchPlan,
        venv: &VirtualEnv,
        events: &E,
    ) -> LauncherResult<()> {
        let step = SetupStep::Install;
        if plan.packages.is_empty() {
            events.on_event(LaunchEvent::StepSkipped {
                step,
                reason: "no packages configured".to_string(),
            });
            return Ok(());
        }

        events.on_event(LaunchEvent::StepStarted { step });
        let mut install = CommandSpec::new(venv.python()).args(["-m", "pip", "install"]);
        if plan.upgrade {
            install = install.arg("--upgrade");
        }
        if plan.quiet_install {
            install = install.arg("--quiet");
        }
        let install = install
            .args(&plan.packages)
            .current_dir(&plan.base_dir)
            .activated(&venv.activation(plan.inherited_path.as_deref()));

        let install_error = |reason: String| LauncherError::Install {
            packages: plan.packages.clone(),
            reason,
        };
        let output = self
            .runner
            .run(&install)
            .map_err(|e| install_error(format!("could not run pip: {e}")))?;
        if !output.status.success() {
            return Err(install_error(format!("pip exited with {}", output.status)));
        }

        events.on_event(LaunchEvent::StepCompleted { step });
        Ok(())
    }

    fn launch<E: LaunchEventSink>(
        &self,
        plan: &LaunchPlan,
        venv: &VirtualEnv,
        activation: &Activation,
        events: &E,
    ) -> LauncherResult<AppExit> {
        let launch_error = |reason: String| LauncherError::Launch {
            entry: plan.entry.clone(),
            reason,
        };
        if !plan.entry.is_file() {
            return Err(launch_error("entry point not found".to_string()));
        }

        events.on_event(LaunchEvent::AppStarting {
            entry: plan.entry.clone(),
            url: plan.app_url.clone(),
        });
        if !self.interrupts.arm() {
            tracing::warn!("Ctrl+C will also stop the launcher");
        }

        let run = CommandSpec::new(venv.python())
            .arg(&plan.entry)
            .current_dir(&plan.base_dir)
            .activated(activation);
        let output = self
            .runner
            .run(&run)
            .map_err(|e| launch_error(format!("could not start {}: {e}", venv.python().display())))?;

        let exit = AppExit {
            code: output.status.code,
            interrupted: self.interrupts.interrupted() || output.status.code.is_none(),
        };
        tracing::info!(?exit, "UI process exited");
        events.on_event(LaunchEvent::AppExited { exit });
        Ok(exit)
    }

    /// `<tool> --version` must succeed before the tool is used
    fn require_tool(&self, tool: &str) -> LauncherResult<()> {
        let probe = CommandSpec::new(tool).arg("--version").capture();
        match self.runner.run(&probe) {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => {
                tracing::debug!(%tool, status = %output.status, "tool probe failed");
                Err(LauncherError::MissingTool {
                    tool: tool.to_string(),
                })
            }
            Err(e) => {
                tracing::debug!(%tool, error = %e, "tool not runnable");
                Err(LauncherError::MissingTool {
                    tool: tool.to_string(),
                })
            }
        }
    }
}

/// Remove a leftover step directory; anything not strictly below `base_dir` is refused
fn remove_dir(base_dir: &Path, dir: &Path) -> LauncherResult<()> {
    let inside = dir
        .strip_prefix(base_dir)
        .map(is_child_path)
        .unwrap_or(false);
    if !inside {
        return Err(LauncherError::UnsafeDirectory {
            key: "removal".to_string(),
            path: dir.to_path_buf(),
        });
    }

    let result = if dir.is_dir() {
        fs::remove_dir_all(dir)
    } else {
        fs::remove_file(dir)
    };
    result.map_err(|e| LauncherError::io(dir, e))
}
