//! Error types for registry client operations.

use rosreestr_core::ValidationError;
use rosreestr_http::TransportError;
use thiserror::Error;

/// Errors that can occur while querying the registry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An address failed validation.
    ///
    /// The clients take an already built [`rosreestr_core::AddressInput`];
    /// this lets callers chain the builder and a client call with `?`.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No macro region has the given name.
    #[error("There was not found suitable macro region for macro region name - `{name}`")]
    MacroRegionNotFound {
        /// Name that was looked up.
        name: String,
    },

    /// No region of the macro region has the given name.
    #[error(
        "There was not found suitable region for region name - `{region_name}` \
         and macro region name - `{macro_region_name}`"
    )]
    RegionNotFound {
        /// Region name that was looked up.
        region_name: String,
        /// Macro region the region was looked up in.
        macro_region_name: String,
    },

    /// The registry answered with status 400 or above.
    #[error("HTTP error from registry: {status} - {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not the expected JSON.
    #[error("JSON error: {source}")]
    Json {
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The client configuration is unusable.
    #[error("Invalid client configuration: {reason}")]
    InvalidConfig {
        /// What is wrong.
        reason: String,
    },
}

impl ClientError {
    /// Returns true for the two name lookup failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MacroRegionNotFound { .. } | Self::RegionNotFound { .. }
        )
    }

    /// HTTP status carried by the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { source: err }
    }
}
