use std::io::{self, Write};

use automv_launcher::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    let _ = write_config_warnings(&mut io::stderr(), ui, warnings);
}

fn write_config_warnings<W: Write>(
    out: &mut W,
    ui: &UiContext,
    warnings: &[ConfigWarning],
) -> io::Result<()> {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        match w.line {
            Some(line) => writeln!(
                out,
                "{icon} Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )?,
            None => writeln!(out, "{icon} Unknown config key '{}' in {}", w.key, w.file.display())?,
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?", suggestion)?;
        }
    }
    Ok(())
}
