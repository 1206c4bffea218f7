//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration.

use std::net::SocketAddr;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Upper bound on concurrently stored sessions
    pub max_sessions: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid
    pub fn from_env(bind_override: Option<SocketAddr>) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => match std::env::var("SERVER_BIND") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "SERVER_BIND".to_string(),
                    reason: format!("Not a valid socket address: {raw}"),
                })?,
                Err(_) => "127.0.0.1:7777"
                    .parse()
                    .expect("Default bind address is valid"),
            },
        };

        let max_sessions = parse_env_or("MAX_SESSIONS", 10_000);

        Ok(ServerConfig { bind, max_sessions })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_sessions == 0 {
            return Err(ConfigError::Invalid {
                var: "MAX_SESSIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation_rejects_zero_sessions() {
        let config = ServerConfig {
            bind: "127.0.0.1:7777".parse().unwrap(),
            max_sessions: 0,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("MAX_SESSIONS"));
    }

    #[test]
    fn test_config_validation_accepts_defaults() {
        let config = ServerConfig {
            bind: "127.0.0.1:7777".parse().unwrap(),
            max_sessions: 10_000,
        };

        assert!(config.validate().is_ok());
    }
}
