//! Executor configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::session::SessionPolicy;

/// Default request timeout of a bare executor.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Configuration for [`HttpExecutor`](crate::HttpExecutor).
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Request timeout, overridable per call.
    pub timeout: Duration,

    /// Reuse one session for every call instead of opening one per call.
    pub keep_alive: bool,

    /// Headers sent with every request; per-call headers with the same name win.
    pub default_headers: BTreeMap<String, String>,

    /// TLS settings for the underlying transport.
    pub tls: Option<TlsConfig>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            keep_alive: false,
            default_headers: BTreeMap::new(),
            tls: None,
        }
    }
}

impl ExecutorConfig {
    /// Creates a configuration with a 3 second timeout and no keep-alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use rosreestr_http::ExecutorConfig;
    ///
    /// let config = ExecutorConfig::new()
    ///     .with_timeout(Duration::from_secs(5))
    ///     .with_keep_alive(true)
    ///     .with_user_agent("rosreestr-api/0.3.0");
    ///
    /// assert!(config.keep_alive);
    /// assert_eq!(config.default_headers["User-Agent"], "rosreestr-api/0.3.0");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Adds a default header.
    #[must_use]
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Sets the `User-Agent` default header.
    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.with_default_header("User-Agent", user_agent)
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Session policy implied by `keep_alive`.
    #[must_use]
    pub const fn session_policy(&self) -> SessionPolicy {
        if self.keep_alive {
            SessionPolicy::KeepAlive
        } else {
            SessionPolicy::PerRequest
        }
    }
}

/// TLS settings handed to the transport.
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Path to an additional PEM CA bundle to trust.
    pub ca_cert: Option<PathBuf>,

    /// Refuse protocol versions below TLS 1.2.
    pub min_tls_1_2: bool,
}

impl TlsConfig {
    /// Creates an empty TLS configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ca_cert: None,
            min_tls_1_2: false,
        }
    }

    /// Trusts the CA bundle at `path` in addition to the built-in roots.
    #[must_use]
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    /// Requires at least TLS 1.2.
    #[must_use]
    pub const fn with_min_tls_1_2(mut self) -> Self {
        self.min_tls_1_2 = true;
        self
    }
}
