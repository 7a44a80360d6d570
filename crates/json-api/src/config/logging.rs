//! Logging Config

use std::time::Duration;

use clap::{Args, ValueEnum};

/// Log line format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, one line per event.
    Compact,

    /// One JSON object per event, including the request span.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` holds no usable filter
    #[arg(short = 'l', long = "log-level", env = "RUST_LOG", default_value = "info")]
    pub level: String,

    /// Log line format
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub format: LogFormat,

    /// Requests taking longer than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter directives for the subscriber. The HTTP stack stays at `warn` so
    /// request lines come from our own middleware only.
    #[must_use]
    pub fn directives(&self) -> String {
        format!("{},h2=warn,hyper=warn,salvo_core=warn", self.level)
    }

    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }
}
