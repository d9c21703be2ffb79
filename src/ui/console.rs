//! Terminal rendering of launch events

use std::cell::RefCell;
use std::io::Write;

use automv_launcher::domain::services::PatchOutcome;
use automv_launcher::{LaunchEvent, LaunchEventSink};

use crate::ui::blocks::step::{StepLine, StepStatus};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Writes one line per event; patch details only with `-v`
pub struct ConsoleSink<W: Write> {
    out: RefCell<W>,
    ui: UiContext,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, ui: UiContext) -> Self {
        Self {
            out: RefCell::new(out),
            ui,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        // Progress output is best effort; a closed stdout must not abort setup.
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    fn render(&self, event: LaunchEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        let text = match event {
            LaunchEvent::InterpreterResolved { interpreter } => {
                StepLine::new(StepStatus::Done, "Python")
                    .with_detail(format!("{} {}", interpreter.program(), interpreter.version()))
                    .render(color, unicode)
            }
            LaunchEvent::WaitingForLock => {
                StepLine::new(
                    StepStatus::Warning,
                    "Waiting for another launcher to finish setup",
                )
                .render(color, unicode)
            }
            LaunchEvent::StepStarted { step } => {
                StepLine::new(StepStatus::Running, step.label()).render(color, unicode)
            }
            LaunchEvent::StepSkipped { step, reason } => StepLine::new(StepStatus::Skipped, step.label())
                .with_detail(reason)
                .render(color, unicode),
            LaunchEvent::StepCompleted { step } => {
                StepLine::new(StepStatus::Done, step.label()).render(color, unicode)
            }
            LaunchEvent::StaleDirectoryRemoved { path, .. } => StepLine::new(
                StepStatus::Warning,
                format!("Removed unfinished {}", path.display()),
            )
            .render(color, unicode),
            LaunchEvent::FilePatched { file, outcome } => {
                let file = file.display().to_string();
                let line = match outcome {
                    PatchOutcome::Missing => {
                        StepLine::new(StepStatus::Warning, file).with_detail("not found")
                    }
                    PatchOutcome::Patched { missed } | PatchOutcome::Unchanged { missed }
                        if !missed.is_empty() =>
                    {
                        StepLine::new(StepStatus::Warning, file)
                            .with_detail(format!("{} edit(s) did not apply", missed.len()))
                    }
                    _ if self.ui.verbose == 0 => return None,
                    PatchOutcome::AlreadyPatched => {
                        StepLine::new(StepStatus::Skipped, file).with_detail("already patched")
                    }
                    PatchOutcome::Unchanged { .. } => {
                        StepLine::new(StepStatus::Skipped, file).with_detail("nothing to change")
                    }
                    PatchOutcome::Patched { .. } => StepLine::new(StepStatus::Done, file),
                };
                format!("  {}", line.render(color, unicode))
            }
            LaunchEvent::AppStarting { url, .. } => format!(
                "\n{} Starting AutoMV at {}\n  {}\n\n",
                Icon::Launch.colored(color, unicode),
                ColoredText::info(url).bold().render(color),
                ColoredText::dim("Press Ctrl+C to stop the server").render(color)
            ),
            LaunchEvent::AppExited { exit } => {
                let line = if exit.interrupted {
                    StepLine::new(StepStatus::Warning, "UI stopped").with_detail("interrupted")
                } else if exit.is_clean() {
                    StepLine::new(StepStatus::Done, "UI exited")
                } else {
                    let status = exit
                        .code
                        .map(|c| format!("exit status {c}"))
                        .unwrap_or_else(|| "no exit status".to_string());
                    StepLine::new(StepStatus::Warning, "UI exited").with_detail(status)
                };
                format!("\n{}", line.render(color, unicode))
            }
        };
        Some(text)
    }
}

impl<W: Write> LaunchEventSink for ConsoleSink<W> {
    fn on_event(&self, event: LaunchEvent) {
        if let Some(text) = self.render(event) {
            self.write(&text);
        }
    }
}
