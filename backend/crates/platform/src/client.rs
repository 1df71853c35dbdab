//! Client identification utilities
//!
//! Resolves the peer address of the connection a request arrived on.

use axum::extract::ConnectInfo;
use http::Extensions;
use std::fmt;
use std::net::SocketAddr;

/// Peer address of the connection, if the server recorded one
///
/// Displays as `ip:port`, or `-` when the address is unknown (for example
/// when the router is driven directly in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerAddr(pub Option<SocketAddr>);

impl CallerAddr {
    /// Read the address stored by `into_make_service_with_connect_info`
    pub fn from_extensions(extensions: &Extensions) -> Self {
        Self(
            extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|info| info.0),
        )
    }
}

impl fmt::Display for CallerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(addr) => write!(f, "{}", addr),
            None => f.write_str("-"),
        }
    }
}
