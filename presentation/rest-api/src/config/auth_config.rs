use std::env;

/// Token-signing configuration.
///
/// The secret is read at startup so deployments can stage the value, but no
/// endpoint consumes it yet; write operations are currently unauthenticated.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    #[allow(dead_code)]
    pub jwt_secret: Option<String>,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: signing secret for the token-based auth rollout
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("JWT_SECRET").ok(),
        }
    }
}
