//! Subscriber setup for `settings-gen`.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber that prints them.
//!
//! # Example
//!
//! ```
//! use observable_settings_cli::logging::{LogFormat, LoggingConfig};
//! use tracing::Level;
//!
//! LoggingConfig::new()
//!     .with_level(Level::DEBUG)
//!     .with_format(LogFormat::Compact)
//!     .with_env_filter("observable_settings_codegen=trace")
//!     .init();
//! ```

use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Compact single-line output (default).
    #[default]
    Compact,
    /// JSON structured output.
    Json,
}

/// Logging configuration.
///
/// Logs go to stderr so generated code printed to stdout stays clean.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum log level.
    level: Level,
    /// Output format.
    format: LogFormat,
    /// Directive string such as `observable_settings_codegen=trace`.
    env_filter: Option<String>,
    /// Whether to log span enter/exit.
    span_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Compact,
            env_filter: None,
            span_events: false,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration logging warnings in compact form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets target-specific directives, `target=level,...`.
    ///
    /// An unparseable string falls back to the configured level.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables span enter/exit events.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// Returns the configured level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the configured format.
    #[must_use]
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Builds the filter the subscriber will use.
    pub fn filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        }
    }

    /// Installs the global subscriber.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init(&self) {
        let filter = self.filter();
        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        // try_init().ok(): a second init keeps the first subscriber
        match self.format {
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr)
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
            LogFormat::Compact => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr)
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr)
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
        }

        tracing::debug!(level = %self.level, format = ?self.format, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LoggingConfig::new();
        assert_eq!(config.level(), Level::WARN);
        assert_eq!(config.format(), LogFormat::Compact);
        assert!(!config.span_events);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn builder_methods() {
        let config = LoggingConfig::new()
            .with_level(Level::TRACE)
            .with_format(LogFormat::Json)
            .with_env_filter("observable_settings_codegen=debug")
            .with_span_events(true);

        assert_eq!(config.level(), Level::TRACE);
        assert_eq!(config.format(), LogFormat::Json);
        assert!(config.span_events);
        assert_eq!(
            config.env_filter.as_deref(),
            Some("observable_settings_codegen=debug")
        );
    }

    #[test]
    fn filter_uses_directives() {
        let config = LoggingConfig::new().with_env_filter("observable_settings_codegen=debug");
        assert!(
            config
                .filter()
                .to_string()
                .contains("observable_settings_codegen")
        );
    }

    #[test]
    fn invalid_filter_falls_back_to_level() {
        let config = LoggingConfig::new()
            .with_level(Level::INFO)
            .with_env_filter("observable_settings=loud");
        assert_eq!(
            config.filter().to_string(),
            EnvFilter::new("info").to_string()
        );
    }

    #[test]
    fn repeated_init_is_harmless() {
        LoggingConfig::new().init();
        LoggingConfig::new().with_format(LogFormat::Json).init();
    }
}
