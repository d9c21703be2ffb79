//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod interrupt;
pub mod launch_events;
pub mod process_runner;
pub mod setup_lock;
pub mod state_repository;

pub use interrupt::InterruptSource;
pub use launch_events::{AppExit, LaunchEvent, LaunchEventSink, NoopEventSink};
pub use process_runner::{ExitInfo, ProcessOutput, ProcessRunner};
pub use setup_lock::SetupLock;
pub use state_repository::StateRepository;
