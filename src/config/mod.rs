//! Configuration module for llmake
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LLMAKE_*)
//! 3. Project config (`llmake.toml` next to the source document)
//! 4. User config (`<config_dir>/llmake/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    user_config_file, ConfigWarning, CONFIG_DIR_VAR, DEFAULT_COMMAND_VAR, GENERATOR_VAR, LOG_VAR,
    PROJECT_CONFIG_FILE,
};
pub use types::{BuildConfig, Config, LogConfig};
