use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use automv_launcher::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// The close prompt only makes sense when someone can press a key
    pub fn can_pause(&self) -> bool {
        self.caps.stdin_tty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            stdout_tty: true,
            stdin_tty: false,
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(0, None, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let ui = UiContext::from_caps(0, Some(ColorWhen::Always), ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn no_pause_without_interactive_stdin() {
        let ui = UiContext::from_caps(0, None, ci_caps());
        assert!(!ui.can_pause());
    }
}
