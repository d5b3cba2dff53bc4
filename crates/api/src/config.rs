use std::net::IpAddr;

use randomizer_discogs::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use randomizer_discogs::DiscogsConfig;

/// Errors raised while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the Discogs token has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Discogs API connection settings.
    pub discogs: DiscogsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `DISCOGS_TOKEN`        | required, non-empty        |
    /// | `DISCOGS_BASE_URL`     | `https://api.discogs.com`  |
    /// | `DISCOGS_USER_AGENT`   | `DiscogsRandomizer/1.0`    |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCOGS_TOKEN").ok_or(ConfigError::Missing("DISCOGS_TOKEN"))?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::Empty("DISCOGS_TOKEN"));
        }

        let base_url = lookup("DISCOGS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        if base_url.trim().is_empty() {
            return Err(ConfigError::Empty("DISCOGS_BASE_URL"));
        }

        let user_agent =
            lookup("DISCOGS_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.into());
        if user_agent.trim().is_empty() {
            return Err(ConfigError::Empty("DISCOGS_USER_AGENT"));
        }

        let host = parse(&lookup, "HOST", "0.0.0.0", "IP address")?;
        let port = parse(&lookup, "PORT", "3000", "u16")?;
        let request_timeout_secs = parse(&lookup, "REQUEST_TIMEOUT_SECS", "30", "u64")?;

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            discogs: DiscogsConfig {
                token,
                base_url: base_url.trim().to_string(),
                user_agent: user_agent.trim().to_string(),
            },
        })
    }
}

fn parse<F, T>(
    lookup: &F,
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}
