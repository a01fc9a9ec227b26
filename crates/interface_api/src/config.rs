//! API configuration
//!
//! Every field may be overridden by an `API_`-prefixed environment variable
//! (`API_PORT`, `API_JWT_SECRET`, ...). Unset fields keep their defaults.

use serde::Deserialize;

const DEV_JWT_SECRET: &str = "change-me-in-production";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// HS256 secret for staff tokens
    pub jwt_secret: String,
    /// Lifetime of issued staff tokens
    pub jwt_expiration_secs: u64,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True while the development signing secret is still in use
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}
