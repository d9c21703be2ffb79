//! AutoMV launcher - one-command bootstrap for the AutoMV web UI
//!
//! Finds a Python interpreter, clones the AutoMV repository, patches it for
//! BytePlus ModelArk, creates and provisions a virtual environment, then runs
//! the UI in the foreground. Repeated runs skip whatever setup already finished.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LaunchPlan, LaunchUseCase};
pub use config::Config;
pub use domain::ports::{AppExit, LaunchEvent, LaunchEventSink};
pub use domain::value_objects::{MarkerPolicy, SetupStep};
pub use error::{ErrorKind, LauncherError, LauncherResult};
