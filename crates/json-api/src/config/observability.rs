//! Logging and request tracing config

use clap::{Args, ValueEnum};

/// How log lines are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event
    Compact,

    /// One JSON object per event, with the current request span
    Json,
}

#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` holds no directives of its own
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Requests slower than this are logged at `warn`
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use crate::config::ServerConfig;

    use super::*;

    #[test]
    fn json_logs_and_threshold_from_flags() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "kiosk-json",
            "--log-format",
            "json",
            "--slow-request-threshold-ms",
            "250",
        ])?;

        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(config.observability.slow_request_threshold_ms, 250);

        Ok(())
    }
}
