//! Host and port of an IIIF image service.

use std::fmt;

use url::Url;

/// The server an IIIF request is addressed to.
///
/// The port is only present when the URI names one explicitly and it differs
/// from the scheme's default.
///
/// # Examples
///
/// ```
/// use iiif_uri::Server;
///
/// let server = Server::new("example.org", Some(8080));
/// assert_eq!(server.to_string(), "example.org:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Server {
    host: String,
    port: Option<u16>,
}

impl Server {
    /// Creates a server from a host and an optional port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Extracts the host and port from a parsed URL.
    ///
    /// The URL parser has already rejected malformed ports, so this is a pure
    /// restructuring.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self::new(url.host_str().unwrap_or_default(), url.port())
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if one was given explicitly.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{port}", self.host),
            None => f.write_str(&self.host),
        }
    }
}
