//! Configuration management for the MCP server.
//!
//! Configuration comes from defaults, optionally overridden by environment
//! variables (a `.env` file is loaded first when present).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Authless Calculator".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRANSPORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        debug!("Loaded configuration: {:?}", config);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "Authless Calculator");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "test-server");
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "test-server");
        assert_eq!(config.logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_transport_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "http");
            std::env::set_var("MCP_HTTP_PORT", "9999");
            std::env::set_var("MCP_SSE_KEEPALIVE_SECS", "5");
        }
        let config = Config::from_env();
        match config.transport {
            TransportConfig::Http(http) => {
                assert_eq!(http.port, 9999);
                assert_eq!(http.mcp_path, "/mcp");
                assert_eq!(http.sse_path, "/sse");
                assert_eq!(http.sse_keep_alive_secs, 5);
            }
            #[allow(unreachable_patterns)]
            other => panic!("expected HTTP transport, got {:?}", other),
        }
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_HTTP_PORT");
            std::env::remove_var("MCP_SSE_KEEPALIVE_SECS");
        }
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_stdio_transport_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "stdio");
        }
        let config = Config::from_env();
        assert!(matches!(config.transport, TransportConfig::Stdio));
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
        }
    }
}
