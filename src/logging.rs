//! Logging configuration and initialization

use std::env;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

/// Logging output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub format: LogFormat,
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Human,
            output: LogOutput::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Build a configuration from `FLAGQUIZ_LOG_LEVEL`, `FLAGQUIZ_LOG_FORMAT`
    /// and `FLAGQUIZ_LOG_OUTPUT`, falling back to defaults for unset or bad values
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("FLAGQUIZ_LOG_LEVEL").ok().as_deref(),
            env::var("FLAGQUIZ_LOG_FORMAT").ok().as_deref(),
            env::var("FLAGQUIZ_LOG_OUTPUT").ok().as_deref(),
        )
    }

    fn from_values(level: Option<&str>, format: Option<&str>, output: Option<&str>) -> Self {
        let level = level
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let format = match format {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Human,
        };

        // Stdout belongs to the game display by default
        let output = match output {
            Some("stdout") => LogOutput::Stdout,
            _ => LogOutput::Stderr,
        };

        Self { level, format, output }
    }
}

/// Initialize structured logging with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            match config.output {
                LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init()?,
                LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init()?,
            }
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            match config.output {
                LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).try_init()?,
                LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).try_init()?,
            }
        }
    }

    Ok(())
}

/// Initialize logging with environment-based configuration
pub fn init_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::from_env())
}
