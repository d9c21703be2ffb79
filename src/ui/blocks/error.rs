use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Single-line failure with an optional remedy underneath
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    hint: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.message.as_str()).render(supports_color)
        );
        if let Some(hint) = &self.hint {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                hint
            ));
        }
        out
    }
}
