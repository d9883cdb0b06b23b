//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport.
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP server hosting the single-shot and SSE transports.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path of the single-shot JSON-RPC endpoint.
    #[serde(default = "default_mcp_path")]
    pub mcp_path: String,

    /// Path of the SSE stream. Messages are posted to `<sse_path>/message`.
    #[serde(default = "default_sse_path")]
    pub sse_path: String,

    /// Interval between SSE keep-alive comments, in seconds.
    #[serde(default = "default_keep_alive")]
    pub sse_keep_alive_secs: u64,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_port() -> u16 {
    8787
}

#[cfg(feature = "http")]
fn default_mcp_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_sse_path() -> String {
    "/sse".to_string()
}

#[cfg(feature = "http")]
fn default_keep_alive() -> u64 {
    15
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Path messages for an SSE session are posted to.
    pub fn sse_message_path(&self) -> String {
        format!("{}/message", self.sse_path.trim_end_matches('/'))
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            mcp_path: default_mcp_path(),
            sse_path: default_sse_path(),
            sse_keep_alive_secs: default_keep_alive(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            _ => Self::default_from_env(),
        }
    }

    #[cfg(feature = "http")]
    fn default_from_env() -> Self {
        Self::Http(HttpConfig::from_env())
    }

    #[cfg(not(feature = "http"))]
    fn default_from_env() -> Self {
        Self::default()
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!(
                "HTTP on {} ({} single-shot, {} SSE)",
                cfg.address(),
                cfg.mcp_path,
                cfg.sse_path
            ),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Load HTTP settings from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("MCP_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let host = std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host());
        let mcp_path = std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_mcp_path());
        let sse_path = std::env::var("MCP_SSE_PATH").unwrap_or_else(|_| default_sse_path());
        let sse_keep_alive_secs = std::env::var("MCP_SSE_KEEPALIVE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|s| *s > 0)
            .unwrap_or_else(default_keep_alive);
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            port,
            host,
            mcp_path,
            sse_path,
            sse_keep_alive_secs,
            enable_cors,
        }
    }
}
