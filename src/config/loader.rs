//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LlmakeError, LlmakeResult};

use super::types::Config;

/// Project configuration file, looked up next to the source document
pub const PROJECT_CONFIG_FILE: &str = "llmake.toml";

/// Overrides the user configuration directory (used for test isolation)
pub const CONFIG_DIR_VAR: &str = "LLMAKE_CONFIG_DIR";

pub const DEFAULT_COMMAND_VAR: &str = "LLMAKE_DEFAULT_COMMAND";
pub const GENERATOR_VAR: &str = "LLMAKE_GENERATOR";
pub const LOG_VAR: &str = "LLMAKE_LOG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LlmakeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LlmakeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LlmakeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|dotted| {
            let key = dotted.rsplit('.').next().unwrap_or(&dotted).to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key: dotted,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config, else user config, else defaults. Environment overrides
/// apply in every case.
pub fn load_for_source(source: &Path) -> LlmakeResult<(Config, Vec<ConfigWarning>)> {
    let project_dir = source.parent().unwrap_or(Path::new(""));
    let candidates = [
        Some(project_dir.join(PROJECT_CONFIG_FILE)),
        user_config_file(),
    ];

    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            debug!(path = %path.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((config.with_env_overrides(), warnings));
        }
    }

    Ok((Config::default().with_env_overrides(), Vec::new()))
}

/// `<config_dir>/llmake/config.toml`
pub fn user_config_file() -> Option<PathBuf> {
    std::env::var(CONFIG_DIR_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("llmake").join("config.toml"))
}

/// Apply environment variable overrides (LLMAKE_* prefix), reading variables
/// through `var`.
pub fn with_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(command) = var(DEFAULT_COMMAND_VAR).filter(|c| !c.trim().is_empty()) {
        config.build.default_commands = vec![command];
    }

    if let Some(generator) = var(GENERATOR_VAR).filter(|g| !g.trim().is_empty()) {
        config.build.generator = Some(generator);
    }

    if let Some(level) = var(LOG_VAR).filter(|l| !l.trim().is_empty()) {
        config.log.level = Some(level);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|idx| idx + 1)
}
