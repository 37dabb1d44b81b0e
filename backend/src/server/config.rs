//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Errors raised while assembling the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("missing environment variable {name}")]
    MissingVar { name: &'static str },
    /// The bind address could not be parsed.
    #[error("invalid bind address {value}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) database_url: String,
}

impl ServerConfig {
    /// Construct a server configuration with explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, database_url: String) -> Self {
        Self {
            bind_addr,
            database_url,
        }
    }

    /// Build the configuration from the process environment.
    ///
    /// `DATABASE_URL` takes precedence when set; otherwise the URL is
    /// composed from `DB_HOST`, `DB_NAME`, `DB_USER`, and `DB_PASS`.
    /// `BIND_ADDR` defaults to `0.0.0.0:8080` when absent.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a required variable is missing or the
    /// bind address does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_value = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value,
                source,
            })?;

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let host = require_var("DB_HOST")?;
                let name = require_var("DB_NAME")?;
                let user = require_var("DB_USER")?;
                let pass = require_var("DB_PASS")?;
                format!("postgres://{user}:{pass}@{host}/{name}")
            }
        };

        Ok(Self {
            bind_addr,
            database_url,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the PostgreSQL connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar { name })
}
