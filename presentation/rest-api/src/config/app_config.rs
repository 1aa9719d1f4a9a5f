use super::{auth_config::AuthConfig, cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    /// Deployment environment label shown on the status page.
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env(),
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }
}
