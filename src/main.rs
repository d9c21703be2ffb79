//! AutoMV launcher
//!
//! Usage: automv-launcher [--dir <PATH>] [--config <PATH>] [--no-pause]
//!
//! Brings a directory from nothing to a running AutoMV web UI, then waits for a
//! keypress so a double-clicked console window stays open.

mod logging;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use automv_launcher::config::{self, CONFIG_FILE};
use automv_launcher::presentation::{create_launch_use_case, Cli};
use automv_launcher::{AppExit, LaunchPlan, LauncherError};

use ui::blocks::error::ErrorBlock;
use ui::blocks::header::CommandHeader;
use ui::console::ConsoleSink;
use ui::context::UiContext;
use ui::primitives::icon::Icon;

const CLOSE_PROMPT: &str = "Press any key to close...";

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.verbose, cli.color);
    logging::init_cli_logger(cli.verbose, ui.color);

    let code = match run(&cli, &ui) {
        Ok(exit) => {
            if !exit.is_clean() {
                tracing::warn!(code = ?exit.code, interrupted = exit.interrupted, "UI did not exit cleanly");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err, &ui);
            ExitCode::FAILURE
        }
    };

    if !cli.no_pause && ui.can_pause() {
        if let Err(e) = ui::terminal::wait_for_keypress(CLOSE_PROMPT) {
            tracing::debug!(error = %e, "close prompt failed");
        }
    }

    code
}

fn run(cli: &Cli, ui: &UiContext) -> Result<AppExit> {
    let base_dir = cli
        .base_dir()
        .context("could not determine the launcher directory")?;

    let (config, warnings) = config::load_or_default(&base_dir, cli.config.as_deref())?;
    ui::output::print_config_warnings(ui, &warnings);
    let config = config::with_env_overrides(config);

    let mut header = CommandHeader::new(Icon::Launch, "AutoMV Launcher");
    header.add("Directory", base_dir.display().to_string());
    let config_file = cli
        .config
        .clone()
        .or_else(|| Some(base_dir.join(CONFIG_FILE)).filter(|p| p.exists()));
    if let Some(file) = &config_file {
        header.add("Config", file.display().to_string());
    }
    print!("{}", header.render(ui.color, ui.unicode));
    println!();

    let mut plan = LaunchPlan::from_config(&base_dir, &config)?
        .with_inherited_path(std::env::var_os("PATH"));
    if ui.verbose > 0 {
        plan.quiet_install = false;
    }
    tracing::debug!(?plan, "launch plan");

    let sink = ConsoleSink::new(std::io::stdout(), *ui);
    let exit = create_launch_use_case(&base_dir).execute(&plan, &sink)?;
    Ok(exit)
}

fn report_error(err: &anyhow::Error, ui: &UiContext) {
    let block = match err.downcast_ref::<LauncherError>() {
        Some(launcher) => {
            tracing::error!(kind = %launcher.kind(), error = %launcher, "launch failed");
            ErrorBlock::new(launcher.to_string()).with_hint(launcher.hint())
        }
        None => {
            tracing::error!(error = %format!("{err:#}"), "launch failed");
            ErrorBlock::new(format!("{err:#}"))
        }
    };
    eprint!("\n{}", block.render(ui.color, ui.unicode));
}
