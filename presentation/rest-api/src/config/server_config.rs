use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = env::var("SERVICE_PORT")
            .ok()
            .map(|raw| parse_port(&raw))
            .unwrap_or(DEFAULT_PORT);

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            tracing::warn!("Invalid SERVICE_PORT '{raw}', falling back to {DEFAULT_PORT}");
            DEFAULT_PORT
        }
    }
}
