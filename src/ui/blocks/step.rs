use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Running,
    Done,
    Skipped,
    Warning,
}

/// One progress line: `  <icon> <label>  <detail>`
#[derive(Debug, Clone)]
pub struct StepLine {
    pub status: StepStatus,
    pub label: String,
    pub detail: Option<String>,
}

impl StepLine {
    pub fn new(status: StepStatus, label: impl Into<String>) -> Self {
        Self {
            status,
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            StepStatus::Running => Icon::Progress,
            StepStatus::Done => Icon::Success,
            StepStatus::Skipped => Icon::Skipped,
            StepStatus::Warning => Icon::Warning,
        }
        .colored(supports_color, supports_unicode);

        match &self.detail {
            Some(detail) => format!(
                "  {} {} {}\n",
                icon,
                self.label,
                ColoredText::dim(format!("({detail})")).render(supports_color)
            ),
            None => format!("  {} {}\n", icon, self.label),
        }
    }
}
