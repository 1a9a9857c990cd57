//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use contact_intake::config::{ServerSettings, StartupError};
use contact_intake::inbound::http::payload::BodyLimits;

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) limits: BodyLimits,
}

impl ServerConfig {
    /// Construct a server configuration from resolved values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, limits: BodyLimits) -> Self {
        Self { bind_addr, limits }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl TryFrom<&ServerSettings> for ServerConfig {
    type Error = StartupError;

    fn try_from(settings: &ServerSettings) -> Result<Self, Self::Error> {
        Ok(Self::new(settings.bind_addr()?, settings.body_limits()?))
    }
}
