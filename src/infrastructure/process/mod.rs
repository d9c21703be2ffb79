//! Process Implementations
//!
//! Concrete implementations of the ProcessRunner and InterruptSource ports.

mod interrupt;
mod system;

pub use interrupt::CtrlcInterrupts;
pub use system::SystemRunner;
