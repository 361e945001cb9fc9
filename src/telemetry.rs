//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; applications that want to see them can install
//! a subscriber through this module.
//!
//! ## Example
//!
//! ```rust,ignore
//! use invoicing_models::telemetry::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .log_payloads(true)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use crate::error::{ModelError, Result};
use crate::observability;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const ENV_LOG_LEVEL: &str = "INVOICING_MODELS_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "INVOICING_MODELS_LOG_FORMAT";
const ENV_LOG_FILE: &str = "INVOICING_MODELS_LOG_FILE";
const ENV_LOG_PAYLOADS: &str = "INVOICING_MODELS_LOG_PAYLOADS";

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Compact JSON format
    JsonCompact,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-compact" => Ok(Self::JsonCompact),
            _ => Err(ModelError::ConfigError(format!(
                "Invalid log format: {value}. Valid options: text, json, json-compact"
            ))),
        }
    }
}

/// Configuration for tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    /// Log level
    pub log_level: tracing::Level,
    /// Output format
    pub output_format: OutputFormat,
    /// Enable console (stderr) output when no log file is set
    pub enable_console: bool,
    /// Log file path (optional)
    pub log_file: Option<PathBuf>,
    /// Log raw wire payloads at `trace` level
    pub log_payloads: bool,
    /// Mask e-mail addresses and other sensitive values in logged payloads
    pub mask_sensitive_values: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            enable_console: true,
            log_file: None,
            log_payloads: false,
            mask_sensitive_values: true,
        }
    }
}

impl SubscriberConfig {
    /// Create a new builder for SubscriberConfig
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Create a debug configuration
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }

    /// Create a production configuration
    pub fn production(log_file: PathBuf) -> Self {
        Self {
            log_level: tracing::Level::WARN,
            output_format: OutputFormat::Json,
            enable_console: false,
            log_file: Some(log_file),
            ..Self::default()
        }
    }

    /// Build a configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `INVOICING_MODELS_LOG_LEVEL`: Log level (trace, debug, info, warn, error)
    /// - `INVOICING_MODELS_LOG_FORMAT`: Output format (text, json, json-compact)
    /// - `INVOICING_MODELS_LOG_FILE`: Log file path
    /// - `INVOICING_MODELS_LOG_PAYLOADS`: Log raw payloads (true, false, 1, 0)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(level) = get(ENV_LOG_LEVEL) {
            builder = builder.log_level_str(&level)?;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            builder = builder.output_format(OutputFormat::parse(&format)?);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            builder = builder.log_file(PathBuf::from(path));
        }
        if let Some(flag) = get(ENV_LOG_PAYLOADS) {
            let enabled = match flag.to_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ModelError::ConfigError(format!(
                        "Invalid value for {ENV_LOG_PAYLOADS}: {flag}"
                    )));
                }
            };
            builder = builder.log_payloads(enabled);
        }

        Ok(builder.build())
    }
}

/// Builder for SubscriberConfig
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    enable_console: Option<bool>,
    log_file: Option<PathBuf>,
    log_payloads: Option<bool>,
    mask_sensitive_values: Option<bool>,
}

impl SubscriberConfigBuilder {
    /// Set the log level
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string
    pub fn log_level_str(mut self, level: &str) -> Result<Self> {
        let level = match level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => {
                return Err(ModelError::ConfigError(format!(
                    "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
                )));
            }
        };
        self.log_level = Some(level);
        Ok(self)
    }

    /// Set the output format
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Enable or disable console output
    pub fn enable_console(mut self, enable: bool) -> Self {
        self.enable_console = Some(enable);
        self
    }

    /// Set the log file path
    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Log raw wire payloads at `trace` level
    pub fn log_payloads(mut self, enabled: bool) -> Self {
        self.log_payloads = Some(enabled);
        self
    }

    /// Mask sensitive values in logged payloads
    pub fn mask_sensitive_values(mut self, mask: bool) -> Self {
        self.mask_sensitive_values = Some(mask);
        self
    }

    /// Build the configuration
    pub fn build(self) -> SubscriberConfig {
        let defaults = SubscriberConfig::default();
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(defaults.log_level),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            enable_console: self.enable_console.unwrap_or(defaults.enable_console),
            log_file: self.log_file,
            log_payloads: self.log_payloads.unwrap_or(defaults.log_payloads),
            mask_sensitive_values: self
                .mask_sensitive_values
                .unwrap_or(defaults.mask_sensitive_values),
        }
    }
}

fn level_str(level: tracing::Level) -> &'static str {
    match level {
        tracing::Level::TRACE => "trace",
        tracing::Level::DEBUG => "debug",
        tracing::Level::INFO => "info",
        tracing::Level::WARN => "warn",
        tracing::Level::ERROR => "error",
    }
}

fn make_writer(config: &SubscriberConfig) -> Result<(BoxMakeWriter, Option<WorkerGuard>)> {
    match &config.log_file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                ModelError::ConfigError(format!(
                    "Log file path has no file name: {}",
                    path.display()
                ))
            })?;
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            Ok((BoxMakeWriter::new(writer), Some(guard)))
        }
        None if config.enable_console => Ok((BoxMakeWriter::new(std::io::stderr), None)),
        None => Ok((BoxMakeWriter::new(std::io::sink), None)),
    }
}

/// Initialize tracing subscriber with the given configuration
///
/// ## Returns
///
/// - `Ok(Some(WorkerGuard))` when logging to a file. The guard must be kept alive for the
///   duration of the program, dropping it flushes and stops the background writer.
/// - `Ok(None)` when logging to the console, or when a global subscriber was already set.
///   In the latter case the payload-logging and masking switches are left untouched.
/// - `Err(ModelError::TelemetryInit)` if initialization fails for another reason
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>> {
    let level = level_str(config.log_level);
    let filter = EnvFilter::new(format!("invoicing_models={level}"));
    let (writer, guard) = make_writer(&config)?;
    let ansi = config.log_file.is_none();

    let init_result = match config.output_format {
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .json()
            .try_init(),
        OutputFormat::JsonCompact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .json()
            .flatten_event(true)
            .try_init(),
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .try_init(),
    };

    match init_result {
        Ok(()) => {
            observability::set_log_payloads(config.log_payloads);
            observability::set_mask_sensitive_values(config.mask_sensitive_values);
            Ok(guard)
        }
        Err(e) => {
            let error_msg = e.to_string();
            if error_msg.contains("global default trace dispatcher has already been set") {
                Ok(None)
            } else {
                Err(ModelError::TelemetryInit(format!(
                    "Failed to initialize tracing: {e}"
                )))
            }
        }
    }
}

/// Initialize tracing subscriber with default configuration
pub fn init_default() -> Result<Option<WorkerGuard>> {
    init_subscriber(SubscriberConfig::default())
}

/// Initialize tracing subscriber from environment variables, see [`SubscriberConfig::from_env`]
pub fn init_from_env() -> Result<Option<WorkerGuard>> {
    init_subscriber(SubscriberConfig::from_env()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn builder_falls_back_to_defaults() {
        let config = SubscriberConfig::builder().build();
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.enable_console);
        assert!(!config.log_payloads);
        assert!(config.mask_sensitive_values);
    }

    #[test]
    fn production_preset_logs_json_to_file() {
        let config = SubscriberConfig::production(PathBuf::from("/var/log/models.log"));
        assert_eq!(config.log_level, tracing::Level::WARN);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.enable_console);
        assert!(config.mask_sensitive_values);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = SubscriberConfig::builder()
            .log_level_str("verbose")
            .unwrap_err();
        assert!(matches!(err, ModelError::ConfigError(_)));
    }

    #[test]
    fn reads_all_environment_variables() {
        let config = SubscriberConfig::from_vars(vars(&[
            (ENV_LOG_LEVEL, "DEBUG"),
            (ENV_LOG_FORMAT, "json-compact"),
            (ENV_LOG_FILE, "/tmp/models.log"),
            (ENV_LOG_PAYLOADS, "1"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.output_format, OutputFormat::JsonCompact);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/models.log")));
        assert!(config.log_payloads);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = SubscriberConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn rejects_invalid_environment_values() {
        assert!(SubscriberConfig::from_vars(vars(&[(ENV_LOG_FORMAT, "xml")])).is_err());
        assert!(SubscriberConfig::from_vars(vars(&[(ENV_LOG_PAYLOADS, "yes")])).is_err());
    }
}
