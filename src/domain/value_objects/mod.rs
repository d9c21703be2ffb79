//! Domain Value Objects
//!
//! Immutable value types that represent launcher concepts.

mod command_spec;
mod interpreter;
mod marker_policy;
mod step;
mod virtual_env;

pub use command_spec::{CommandSpec, OutputMode};
pub use interpreter::Interpreter;
pub use marker_policy::MarkerPolicy;
pub use step::SetupStep;
pub use virtual_env::{Activation, VirtualEnv};
