//! Server configuration

use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Upper bound on handling a single request
    pub request_timeout: Duration,
    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_grace: Duration,
    /// Allowed CORS origins (empty = any origin)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout: Duration::from_secs(15),
            shutdown_grace: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// `address:port` string suitable for `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Parse a comma-separated origin list, dropping blank entries
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn is_cors_permissive(&self) -> bool {
        self.cors_origins.is_empty()
    }
}
