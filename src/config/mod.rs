//! Environment-backed configuration.
//!
//! Server settings have defaults; the backend endpoint and credential do not.
//! Override with `RELAY_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

/// Relay configuration loaded once at startup.
///
/// Use [`Config::from_env`] to read `RELAY_*` overrides on top of defaults.
/// The backend settings stay optional here so the server can start without
/// them; [`Config::backend_settings`] is the per-request presence check.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Backend rerank endpoint URL. No default.
    pub backend_endpoint: Option<String>,

    /// Backend API credential, sent as a bearer token. No default.
    pub backend_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            backend_endpoint: None,
            backend_api_key: None,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "RELAY_PORT";
    pub const ENV_BIND_ADDR: &'static str = "RELAY_BIND_ADDR";
    pub const ENV_BACKEND_ENDPOINT: &'static str = "RELAY_BACKEND_ENDPOINT";
    pub const ENV_BACKEND_API_KEY: &'static str = "RELAY_BACKEND_API_KEY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let backend_endpoint = Self::parse_optional_string_from_env(Self::ENV_BACKEND_ENDPOINT);
        let backend_api_key = Self::parse_optional_string_from_env(Self::ENV_BACKEND_API_KEY);

        Ok(Self {
            port,
            bind_addr,
            backend_endpoint,
            backend_api_key,
        })
    }

    /// Returns the backend endpoint and credential, or the first missing variable.
    pub fn backend_settings(&self) -> Result<(&str, &str), ConfigError> {
        let endpoint = self
            .backend_endpoint
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_BACKEND_ENDPOINT,
            })?;
        let api_key = self
            .backend_api_key
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_BACKEND_API_KEY,
            })?;

        Ok((endpoint, api_key))
    }

    /// Names of the backend variables that are currently unset.
    pub fn missing_backend_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.backend_endpoint.is_none() {
            missing.push(Self::ENV_BACKEND_ENDPOINT);
        }
        if self.backend_api_key.is_none() {
            missing.push(Self::ENV_BACKEND_API_KEY);
        }
        missing
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    // A set-but-empty variable counts as absent.
    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
