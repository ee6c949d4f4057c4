//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Ledger channel the contract is deployed on
    pub channel: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable console output (for development)
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "pharma-chain".to_string(),
            channel: "mychannel".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PHARMA_SERVICE_NAME`: Service name (default: pharma-chain)
    /// - `PHARMA_CHANNEL`: Channel name (default: mychannel)
    /// - `PHARMA_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `PHARMA_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `PHARMA_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("PHARMA_SERVICE_NAME")
                .unwrap_or_else(|_| "pharma-chain".to_string()),

            channel: env::var("PHARMA_CHANNEL").unwrap_or_else(|_| "mychannel".to_string()),

            log_level: env::var("PHARMA_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("PHARMA_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("PHARMA_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Create configuration for a specific deployment channel.
    pub fn for_channel(channel: &str) -> Self {
        let mut config = Self::from_env();
        config.channel = channel.to_string();
        config
    }

    /// Service name qualified with the channel.
    pub fn full_service_name(&self) -> String {
        format!("{}@{}", self.service_name, self.channel)
    }
}
