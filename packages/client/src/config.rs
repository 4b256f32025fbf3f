//! Environment-based API configuration.
//!
//! Configuration is read once at startup via [`ApiConfig::from_env`] and
//! threaded through by reference; nothing else in the workspace touches the
//! environment.

use thiserror::Error;

/// Environment variable holding the required API key.
pub const ENV_API_KEY: &str = "CRIMINAL_ANALYSIS_API_KEY";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "CRIMINAL_ANALYSIS_API_URL";

/// Base URL used when [`ENV_API_URL`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://thomas:11004";

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("{name} environment variable is required")]
    MissingEnv {
        /// Name of the missing environment variable.
        name: String,
    },
}

/// Connection settings for the criminal activity analysis API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API key sent as the `X-API-KEY` header on every request.
    pub api_key: String,
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if [`ENV_API_KEY`] is unset or
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require_env(ENV_API_KEY)?,
            base_url: std::env::var(ENV_API_URL)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}

/// Reads a required environment variable, treating empty values as unset.
fn require_env(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_message_names_the_variable() {
        let err = ConfigError::MissingEnv {
            name: ENV_API_KEY.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CRIMINAL_ANALYSIS_API_KEY environment variable is required"
        );
    }
}
