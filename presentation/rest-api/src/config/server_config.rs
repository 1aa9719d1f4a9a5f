use std::env;

/// HTTP listener address.
///
/// Environment variables:
/// - SERVICE_IP: interface to bind (default: "127.0.0.1")
/// - SERVICE_PORT: port to bind (default: "8080")
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string()),
        }
    }

    /// The "ip:port" string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_ip_and_port_into_bind_address() {
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "9090".to_string(),
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }
}
