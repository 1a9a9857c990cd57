//! Server settings loaded via OrthoConfig.
//!
//! Values come from `CONTACT_INTAKE_*` environment variables, CLI flags and
//! configuration files. Every field is optional; accessors apply defaults.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::inbound::http::payload::{BodyLimits, DEFAULT_BODY_LIMIT};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while turning settings into a runnable server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    /// The configured host is not an IP literal.
    #[error("invalid bind host `{host}`: expected an IP address")]
    InvalidHost { host: String },
    /// The configured log format is not recognised.
    #[error("unknown log format `{0}`: expected `json` or `pretty`")]
    UnknownLogFormat(String),
    /// A body limit of zero would reject every request.
    #[error("{field} must be greater than zero")]
    ZeroBodyLimit { field: &'static str },
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable text.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = StartupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            _ => Err(StartupError::UnknownLogFormat(s.to_owned())),
        }
    }
}

/// Configuration values controlling the HTTP listener and logging.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACT_INTAKE")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Maximum JSON body size in bytes.
    pub json_limit: Option<usize>,
    /// Maximum form body size in bytes.
    pub form_limit: Option<usize>,
    /// Log output format, `json` or `pretty`.
    pub log_format: Option<String>,
}

impl ServerSettings {
    /// Socket address assembled from `host` and `port`.
    ///
    /// # Errors
    /// Returns [`StartupError::InvalidHost`] when the host is not an IP literal.
    ///
    /// # Examples
    /// ```
    /// use contact_intake::config::ServerSettings;
    ///
    /// let settings = ServerSettings::default();
    /// assert_eq!(settings.bind_addr().expect("default addr").port(), 8080);
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, StartupError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.trim().parse().map_err(|_| StartupError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Body size limits for the JSON and form extractors.
    ///
    /// # Errors
    /// Returns [`StartupError::ZeroBodyLimit`] when a limit is set to zero.
    pub fn body_limits(&self) -> Result<BodyLimits, StartupError> {
        let json = non_zero(self.json_limit, "json_limit")?;
        let form = non_zero(self.form_limit, "form_limit")?;
        Ok(BodyLimits { json, form })
    }

    /// Selected log format, defaulting to JSON.
    ///
    /// # Errors
    /// Returns [`StartupError::UnknownLogFormat`] for unrecognised values.
    pub fn log_format(&self) -> Result<LogFormat, StartupError> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), str::parse)
    }
}

fn non_zero(value: Option<usize>, field: &'static str) -> Result<usize, StartupError> {
    match value.unwrap_or(DEFAULT_BODY_LIMIT) {
        0 => Err(StartupError::ZeroBodyLimit { field }),
        limit => Ok(limit),
    }
}
