use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use url::Url;

// Runtime configuration read from the environment (after .env is loaded).

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    // Root of the remote auth API, without a trailing slash. None leaves the
    // portal running but refusing every network operation.
    pub auth_api_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAuthApiUrl { value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAuthApiUrl { value, reason } => {
                write!(f, "AUTH_API_URL {value:?} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let auth_api_url = lookup("AUTH_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| normalize_base_url(&value))
            .transpose()?;

        let port = lookup("PORTAL_PORT")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let host = lookup("PORTAL_HOST")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_HOST);

        Ok(Self {
            auth_api_url,
            host,
            port,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidAuthApiUrl {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    // Paths are appended as "/api/...", so drop the trailing slash.
    Ok(url.as_str().trim_end_matches('/').to_string())
}
