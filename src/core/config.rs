//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::routes::DEFAULT_AUTH_ENDPOINT;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the external sign-in API the browser posts credentials to
    /// Example: https://auth.example.com/api/auth/login
    pub auth_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_endpoint: std::env::var("AUTH_ENDPOINT").ok(),
        }
    }

    /// Check if a sign-in endpoint is configured
    pub fn has_auth_endpoint(&self) -> bool {
        self.auth_endpoint.is_some()
    }

    /// Configured endpoint, or `/api/auth/login` when unset or empty
    pub fn auth_endpoint_or_default(&self) -> &str {
        self.auth_endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or(DEFAULT_AUTH_ENDPOINT)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
