//! Logging setup.
//!
//! Logs go to stderr so the CLI's JSON output on stdout stays parseable.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level for the subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warning level
    Warn,
    /// Error level - least verbose
    Error,
    /// Disable logging entirely
    Off,
}

impl LogLevel {
    /// Returns the `EnvFilter` directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl From<u8> for LogLevel {
    /// Convert verbosity count to log level.
    /// 0 = Info, 1 = Debug, 2+ = Trace
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Configuration for the subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// The log level to use
    pub level: LogLevel,
    /// Whether to include timestamps
    pub with_timestamps: bool,
    /// Whether to include the target (module path)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            with_timestamps: true,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set whether to include timestamps.
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.with_timestamps = enabled;
        self
    }

    /// Set whether to include the target (module path).
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Build a configuration from CLI flags. `quiet` wins over `verbose`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            LogLevel::Error
        } else {
            LogLevel::from(verbose)
        };
        Self::default().with_level(level)
    }
}

/// Initialize the global subscriber.
///
/// Call once at startup. Subsequent calls are ignored.
///
/// # Examples
///
/// ```no_run
/// use paywall_router::logging::{init_logging, LogLevel, LoggingConfig};
///
/// init_logging(LoggingConfig::new().with_level(LogLevel::Debug));
/// ```
pub fn init_logging(config: LoggingConfig) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.level.as_directive())
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    let _ = if config.with_timestamps {
        subscriber.try_init()
    } else {
        subscriber.without_time().try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(LogLevel::from(0), LogLevel::Info);
        assert_eq!(LogLevel::from(1), LogLevel::Debug);
        assert_eq!(LogLevel::from(2), LogLevel::Trace);
        assert_eq!(LogLevel::from(10), LogLevel::Trace);
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
    }

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Debug)
            .with_timestamps(false)
            .with_target(false);

        assert_eq!(config.level, LogLevel::Debug);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(LoggingConfig::from_flags(0, false).level, LogLevel::Info);
        assert_eq!(LoggingConfig::from_flags(1, false).level, LogLevel::Debug);
        assert_eq!(LoggingConfig::from_flags(2, false).level, LogLevel::Trace);
        assert_eq!(LoggingConfig::from_flags(3, true).level, LogLevel::Error);
    }

    #[test]
    fn test_directives() {
        assert_eq!(LogLevel::Off.as_directive(), "off");
        assert_eq!(LogLevel::Trace.as_directive(), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(LoggingConfig::new().with_level(LogLevel::Off));
        init_logging(LoggingConfig::new().with_level(LogLevel::Off));
    }
}
