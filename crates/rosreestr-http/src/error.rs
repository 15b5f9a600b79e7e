//! Transport-level errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::request::HttpMethod;

/// A request could not be completed at the transport level.
///
/// Covers timeouts, refused connections, DNS failures and interrupted body
/// reads, plus failures to set up the underlying session. None of these are
/// retried by the executor.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within the timeout.
    #[error("{method} {url} timed out: {source}")]
    Timeout {
        /// Request method.
        method: HttpMethod,
        /// Request URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// Sending the request failed (connection refused, DNS failure, bad URL).
    #[error("{method} {url} failed: {source}")]
    Request {
        /// Request method.
        method: HttpMethod,
        /// Request URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read.
    #[error("{method} {url} returned HTTP {status} but the body could not be read: {source}")]
    Body {
        /// Request method.
        method: HttpMethod,
        /// Request URL.
        url: String,
        /// Status of the partial response.
        status: u16,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP session could not be built.
    #[error("Failed to build HTTP session: {source}")]
    Session {
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The configured CA bundle could not be loaded.
    #[error("Failed to load CA certificate from {path}: {message}")]
    Tls {
        /// Certificate path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("Invalid header '{name}'")]
    InvalidHeader {
        /// Header name.
        name: String,
    },
}

impl TransportError {
    /// Classifies an error returned while sending a request.
    pub(crate) fn send(method: HttpMethod, url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            Self::Timeout {
                method,
                url,
                source,
            }
        } else {
            Self::Request {
                method,
                url,
                source,
            }
        }
    }

    /// Classifies an error returned while reading a response body.
    pub(crate) fn body(method: HttpMethod, url: &str, status: u16, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            Self::Timeout {
                method,
                url,
                source,
            }
        } else {
            Self::Body {
                method,
                url,
                status,
                source,
            }
        }
    }

    /// Returns true if the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Status code of the partial response, if the failure happened after one arrived.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Body { status, .. } => Some(*status),
            Self::Timeout { source, .. } | Self::Request { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            Self::Session { .. } | Self::Tls { .. } | Self::InvalidHeader { .. } => None,
        }
    }
}
