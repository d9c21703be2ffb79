//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Child process runner and Ctrl+C handling
//! - `repositories/` - Setup state persistence
//! - `lock` - Cross-process setup lock

pub mod lock;
pub mod process;
pub mod repositories;

// Re-export for convenience
pub use lock::{FileSetupLock, LOCK_FILE};
pub use process::{CtrlcInterrupts, SystemRunner};
pub use repositories::{TomlStateRepository, STATE_DIR};
