//! Repository Implementations

mod state;

pub use state::{TomlStateRepository, STATE_DIR, STATE_FILE};
