use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        io::stdout().is_terminal(),
        io::stdin().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdout_tty: bool,
    stdin_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        stdout_tty,
        stdin_tty,
        supports_color: stdout_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    // The first locale variable that is set decides.
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(val) = get_env(key).filter(|v| !v.is_empty()) {
            let v = val.to_lowercase();
            return v.contains("utf-8") || v.contains("utf8");
        }
    }

    // No locale configured.
    true
}

/// Print the close prompt and block until one key is pressed
///
/// Raw mode makes any key count, not just Enter. When raw mode is unavailable,
/// falls back to reading a line.
pub fn wait_for_keypress(prompt: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\n{prompt}")?;
    stdout.flush()?;

    if terminal::enable_raw_mode().is_err() {
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        return Ok(());
    }

    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    if let Err(e) = terminal::disable_raw_mode() {
        tracing::debug!(error = %e, "could not leave raw mode");
    }
    writeln!(stdout)?;
    result
}
