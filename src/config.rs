//! Client and server configuration.
//!
//! The client's compiler list URL is fixed at build time, since the WASM
//! bundle has no process environment. The server reads its listen address
//! from the environment at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compiler list served by the public Wandbox deployment.
pub const DEFAULT_CATALOG_URL: &str = "https://wandbox.org/api/list.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Settings baked into the browser bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub catalog_url: String,
}

impl ClientConfig {
    /// Resolve from `CANINE_CATALOG_URL` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self { catalog_url: resolve_catalog_url(option_env!("CANINE_CATALOG_URL")) }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { catalog_url: DEFAULT_CATALOG_URL.to_owned() }
    }
}

fn resolve_catalog_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => DEFAULT_CATALOG_URL.to_owned(),
    }
}

/// Listen address for the SSR server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::from_values(host.as_deref(), port.as_deref())
    }

    fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = host
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOST)
            .to_owned();
        Ok(Self { host, port: parse_port(port)? })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
