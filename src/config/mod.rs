//! Configuration module for the launcher
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AUTOMV_*)
//! 3. `launcher.toml` in the base directory, or `--config`
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, CONFIG_FILE,
};
pub use types::{
    is_child_path, AppConfig, Config, EnvironmentConfig, InterpreterConfig, MarkerPolicy,
    PackagesConfig, PatchesConfig, RepositoryConfig, SetupConfig, DEFAULT_REPOSITORY_URL,
};
