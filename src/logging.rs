//! Structured logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! generated prompt, Makefile or listing. `RUST_LOG` takes precedence over the
//! level chosen here.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for llmake's own events
    pub level: Level,
    /// Include the module target (e.g. `llmake::parser`) in each line
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            include_target: level >= Level::DEBUG,
        }
    }

    /// Level from the `-v` count, falling back to the configured level name
    /// when no flag was given.
    pub fn from_verbosity(verbose: u8, configured: Option<&str>) -> Self {
        let level = match verbose {
            0 => configured.and_then(parse_level).unwrap_or(Level::WARN),
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self::with_level(level)
    }
}

/// Case-insensitive level name; `None` for anything unrecognised.
pub fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Install the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("llmake={}", config.level)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.include_target)
                    .without_time(),
            )
            .try_init();
    });
}
