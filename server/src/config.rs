//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin of the posts API and identity service, without trailing slash.
    pub upstream: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `CHIRP_API_UPSTREAM`: `http(s)://` origin that `/api/*` and
    ///   `/sign-in` are forwarded to
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHIRP_UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `CHIRP_UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let upstream = lookup("CHIRP_API_UPSTREAM").ok_or(ConfigError::Missing("CHIRP_API_UPSTREAM"))?;
        let upstream = parse_upstream(&upstream)?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_or(
                "CHIRP_UPSTREAM_TIMEOUT_SECS",
                lookup("CHIRP_UPSTREAM_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "CHIRP_UPSTREAM_CONNECT_TIMEOUT_SECS",
                lookup("CHIRP_UPSTREAM_CONNECT_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { port, upstream, timeouts })
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid { name: "CHIRP_API_UPSTREAM", value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}

fn parse_or<T: std::str::FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
