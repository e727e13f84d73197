//! Listen-address configuration read from the environment.
//!
//! `SITE_ADDR` selects the interface (default `0.0.0.0`) and `PORT` the TCP
//! port (default `3000`). Blank values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: DEFAULT_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] if `SITE_ADDR` or `PORT` is set
    /// to something unparseable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] naming the first bad variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup("SITE_ADDR")) {
            config.addr = raw.parse().map_err(|e: std::net::AddrParseError| ServerError::InvalidConfig {
                var: "SITE_ADDR",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(raw) = non_blank(lookup("PORT")) {
            config.port = raw.parse().map_err(|e: std::num::ParseIntError| ServerError::InvalidConfig {
                var: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
