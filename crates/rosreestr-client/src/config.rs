//! Configuration types for the registry clients.

use std::time::Duration;

use rosreestr_http::{ExecutorConfig, TlsConfig};
use url::Url;

use crate::error::ClientError;

/// Base URL of the online registry API.
pub const REGISTRY_BASE_URL: &str = "https://rosreestr.gov.ru/api/online";

/// Base URL of the public cadastral map API.
pub const CADASTRAL_BASE_URL: &str = "https://pkk.rosreestr.ru/api";

/// Default request timeout of both clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`RegistryClient`](crate::RegistryClient) and
/// [`CadastralClient`](crate::CadastralClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Reuse one HTTP session for every call.
    pub keep_alive: bool,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl ClientConfig {
    /// Creates a configuration for the API at `base_url`.
    ///
    /// A trailing slash is dropped so URL templates can append paths directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use rosreestr_client::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://localhost:8080/api/online/");
    /// assert_eq!(config.base_url, "http://localhost:8080/api/online");
    /// assert!(!config.keep_alive);
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            keep_alive: false,
            user_agent: format!("rosreestr-api/{}", env!("CARGO_PKG_VERSION")),
            tls: None,
        }
    }

    /// Configuration for the online registry API.
    #[must_use]
    pub fn registry() -> Self {
        Self::new(REGISTRY_BASE_URL)
    }

    /// Configuration for the cadastral map API.
    #[must_use]
    pub fn cadastral() -> Self {
        Self::new(CADASTRAL_BASE_URL)
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables session reuse.
    #[must_use]
    pub const fn with_keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Checks that the configuration can produce a working client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the base URL is not an
    /// absolute `http`/`https` URL or the timeout is zero.
    pub fn validate(&self) -> Result<(), ClientError> {
        let url = Url::parse(&self.base_url).map_err(|e| ClientError::InvalidConfig {
            reason: format!("base URL '{}' is not valid: {e}", self.base_url),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig {
                reason: format!("base URL '{}' must use http or https", self.base_url),
            });
        }
        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig {
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Executor settings implied by this configuration.
    #[must_use]
    pub fn executor_config(&self) -> ExecutorConfig {
        let config = ExecutorConfig::new()
            .with_timeout(self.timeout)
            .with_keep_alive(self.keep_alive)
            .with_user_agent(self.user_agent.clone());

        match self.tls {
            Some(ref tls) => config.with_tls(tls.clone()),
            None => config,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::registry()
    }
}
