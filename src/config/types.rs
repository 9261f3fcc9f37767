//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::services::DEFAULT_COMMANDS;
use crate::error::LlmakeResult;

use super::loader::{self, ConfigWarning};

/// Makefile generation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    /// Used for artifact entries that resolve to no commands
    #[serde(default = "default_commands")]
    pub default_commands: Vec<String>,

    /// Program invoked by `.prompt` recipes; the running executable when unset
    #[serde(default)]
    pub generator: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_commands: default_commands(),
            generator: None,
        }
    }
}

fn default_commands() -> Vec<String> {
    DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when no `-v` flag is given (e.g. "info")
    #[serde(default)]
    pub level: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LlmakeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LlmakeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Configuration for a source document: the project file next to it,
    /// else the user file, else defaults; environment overrides on top.
    pub fn load_for_source(source: &Path) -> LlmakeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_source(source)
    }

    /// Apply environment variable overrides (LLMAKE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Generator program, falling back to `fallback` when not configured.
    pub fn generator_or(&self, fallback: impl FnOnce() -> PathBuf) -> String {
        match &self.build.generator {
            Some(generator) => generator.clone(),
            None => fallback().display().to_string(),
        }
    }
}
