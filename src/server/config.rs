//! Environment-driven server configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
/// Interface bound when `HOST` is not set
pub static DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration read from the process environment.
pub struct Config {
    /// Connection URL for Postgres or SQLite
    pub database_url: String,
    /// Interface the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Reads configuration from environment variables, applying defaults for unset values.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is set but is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = lookup("HOST")
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Socket address for the HTTP listener
    ///
    /// # Returns
    /// - `Ok(SocketAddr)` - `HOST` and `PORT` form a valid address
    /// - `Err(ConfigError::InvalidEnvValue)` - `HOST` is not an IP address
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: "HOST".to_string(),
                reason: format!("'{}' is not a valid IP address", self.host),
            })
    }
}
