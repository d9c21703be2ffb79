//! CLI Argument Parsing
//!
//! A bare invocation runs the whole launch sequence; every flag is optional.

use std::io;
use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// AutoMV launcher - set up and start the AutoMV web UI
#[derive(Parser, Debug)]
#[command(name = "automv-launcher")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run without arguments to fetch AutoMV, prepare its environment and start the UI."
)]
pub struct Cli {
    /// Base directory for AutoMV_repo, venv and app.py [default: the launcher's directory]
    #[arg(long, value_name = "PATH", env = "AUTOMV_HOME")]
    pub dir: Option<PathBuf>,

    /// Configuration file [default: <dir>/launcher.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit without waiting for a keypress
    #[arg(long, env = "AUTOMV_NO_PAUSE")]
    pub no_pause: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// `--dir` made absolute, or the directory holding the launcher executable
    ///
    /// Children run with the base directory as their working directory, so every
    /// path derived from it must be absolute.
    pub fn base_dir(&self) -> io::Result<PathBuf> {
        match &self.dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(std::env::current_dir()?.join(dir)),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent().map(|p| p.to_path_buf()).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "launcher executable has no parent directory",
                    )
                })
            }
        }
    }
}
