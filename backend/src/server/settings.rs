//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `PERSONS_*` environment variables over the
//! defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use person_registry::outbound::persistence::DEFAULT_MAX_CONNECTIONS;
use serde::Deserialize;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_BIND_PORT: u16 = 8080;

/// Errors raised while turning settings into a runnable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Layered configuration could not be read.
    #[error("failed to load configuration: {0}")]
    Load(String),
    /// `bind_host` is not an IP address.
    #[error("invalid bind host '{host}': {source}")]
    BindHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings controlling the listener and the storage backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PERSONS")]
pub struct ServerSettings {
    /// IP address to listen on.
    pub bind_host: Option<String>,
    /// TCP port to listen on.
    pub bind_port: Option<u16>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Serve without applying the embedded migrations.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Load settings from the process arguments and environment.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load().map_err(|err| ConfigError::Load(err.to_string()))
    }

    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = match self.bind_host.as_deref() {
            Some(raw) => raw.trim().parse().map_err(|source| ConfigError::BindHost {
                host: raw.to_owned(),
                source,
            })?,
            None => DEFAULT_BIND_HOST,
        };
        Ok(SocketAddr::new(
            host,
            self.bind_port.unwrap_or(DEFAULT_BIND_PORT),
        ))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to [`DEFAULT_MAX_CONNECTIONS`].
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Whether embedded migrations run before serving. True unless skipped.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }
}
