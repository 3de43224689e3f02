//! Command-line and environment configuration.
//!
//! Flags are `--name=value` (or `--name value`); environment variables are
//! the fallback and built-in defaults come last.

use std::fmt;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Reasons a command line is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' needs a value")]
    MissingValue(String),
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    #[error("invalid matrix '{0}': expected NAME=<rows>, e.g. A=1,2;3,4")]
    InvalidMatrix(String),
    #[error("missing expression")]
    MissingExpression,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Where `msym serve` listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `--host`/`--port` from `args`, falling back to `MSYM_HOST` and
    /// `MSYM_PORT` as looked up through `env`.
    pub fn from_args(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ServerConfig, ConfigError> {
        let mut host = None;
        let mut port = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_string())),
                None => (arg.as_str(), None),
            };
            let slot = match flag {
                "--host" => &mut host,
                "--port" | "-p" => &mut port,
                _ => return Err(ConfigError::UnknownOption(arg.clone())),
            };
            let value = match inline {
                Some(value) => value,
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?,
            };
            *slot = Some(value);
        }

        let host = host
            .or_else(|| env("MSYM_HOST"))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port.or_else(|| env("MSYM_PORT")) {
            Some(text) => text
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(text))?,
            None => DEFAULT_PORT,
        };
        Ok(ServerConfig { host, port })
    }

    /// `host:port`, as accepted by `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}", self.address())
    }
}

/// Process environment lookup for [`ServerConfig::from_args`].
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
