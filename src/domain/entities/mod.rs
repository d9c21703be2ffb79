//! Domain Entities

mod setup_state;

pub use setup_state::{SetupState, StepProgress, StepRecord, STATE_VERSION};
