//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    storage::StorageConfig,
};

pub(crate) mod auth;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

/// Sea Life JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "sealife-json", about = "Sea Life JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Record store settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Bearer token settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::{observability::LogFormat, storage::StorageBackend};

    use super::*;

    #[test]
    fn defaults_serve_records_from_postgres_on_8698() -> TestResult {
        let config = ServerConfig::try_parse_from(["sealife-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.server.base_path, "");
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert!(matches!(config.logging.log_format, LogFormat::Compact));
        assert!(!config.observability.otel_enabled, "otel is opt-in");

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "sealife-json",
            "--port",
            "9000",
            "--base-path",
            "/make-server",
            "--storage-backend",
            "memory",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.server.base_path, "/make-server");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }
}
