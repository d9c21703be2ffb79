//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the launch use case to its infrastructure adapters
//!
//! ## Structure
//!
//! - `cli` - Command-line surface
//! - `factory` - Creates the launch use case with real dependencies

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_launch_use_case, SystemLaunchUseCase};
