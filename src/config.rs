//! Host configuration parsed from environment variables.

use client::config::ApiConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend the browser talks to; handed to the client through the shell.
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `API_BASE_URL`: REST backend base URL, default `http://localhost:8080`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("PORT").ok().as_deref(), std::env::var("API_BASE_URL").ok().as_deref())
    }

    fn from_vars(port: Option<&str>, api_base_url: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let api = api_base_url.map_or_else(ApiConfig::default, ApiConfig::new);
        Ok(Self { port, api })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
