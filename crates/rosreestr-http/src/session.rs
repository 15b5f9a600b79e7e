//! Session lifecycle: one reused session or a fresh one per call.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::config::{ExecutorConfig, TlsConfig};
use crate::error::TransportError;

/// Whether an executor reuses its session across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPolicy {
    /// One lazily created session, reused for the executor's lifetime.
    KeepAlive,
    /// A new session per call, closed when the call returns.
    PerRequest,
}

/// Builds transport sessions from the executor configuration.
struct SessionFactory {
    timeout: Duration,
    ca_cert: Option<reqwest::Certificate>,
    min_tls_1_2: bool,
}

impl fmt::Debug for SessionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionFactory")
            .field("timeout", &self.timeout)
            .field("ca_cert", &self.ca_cert.is_some())
            .field("min_tls_1_2", &self.min_tls_1_2)
            .finish()
    }
}

impl SessionFactory {
    fn new(timeout: Duration, tls: Option<&TlsConfig>) -> Result<Self, TransportError> {
        let ca_cert = match tls.and_then(|tls| tls.ca_cert.as_ref()) {
            Some(path) => {
                let pem = std::fs::read(path).map_err(|e| TransportError::Tls {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| TransportError::Tls {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                Some(cert)
            }
            None => None,
        };

        Ok(Self {
            timeout,
            ca_cert,
            min_tls_1_2: tls.is_some_and(|tls| tls.min_tls_1_2),
        })
    }

    fn build(&self) -> Result<Client, TransportError> {
        let mut builder = Client::builder().timeout(self.timeout);

        if let Some(ref cert) = self.ca_cert {
            builder = builder.add_root_certificate(cert.clone());
        }
        if self.min_tls_1_2 {
            builder = builder.min_tls_version(reqwest::tls::Version::TLS_1_2);
        }

        builder
            .build()
            .map_err(|source| TransportError::Session { source })
    }
}

/// A session borrowed for the duration of one call.
///
/// Scoped sessions are closed when dropped, on every exit path of the call.
#[derive(Debug)]
pub enum Session<'a> {
    /// The executor's reused keep-alive session.
    Shared(&'a Client),
    /// A session opened for this call only.
    Scoped(Client),
}

impl Deref for Session<'_> {
    type Target = Client;

    fn deref(&self) -> &Client {
        match self {
            Self::Shared(client) => client,
            Self::Scoped(client) => client,
        }
    }
}

/// Hands out sessions according to a [`SessionPolicy`].
///
/// The keep-alive session is not closed automatically; it lives as long as
/// this value.
#[derive(Debug)]
pub struct Sessions {
    policy: SessionPolicy,
    factory: SessionFactory,
    shared: OnceCell<Client>,
    opened: AtomicUsize,
}

impl Sessions {
    /// Creates a session manager for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Tls`] if a configured CA bundle cannot be loaded.
    pub fn new(config: &ExecutorConfig) -> Result<Self, TransportError> {
        Ok(Self {
            policy: config.session_policy(),
            factory: SessionFactory::new(config.timeout, config.tls.as_ref())?,
            shared: OnceCell::new(),
            opened: AtomicUsize::new(0),
        })
    }

    /// The policy in effect.
    #[must_use]
    pub const fn policy(&self) -> SessionPolicy {
        self.policy
    }

    /// Returns a session for one call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Session`] if a new session cannot be built.
    pub fn acquire(&self) -> Result<Session<'_>, TransportError> {
        match self.policy {
            SessionPolicy::KeepAlive => self
                .shared
                .get_or_try_init(|| self.open())
                .map(Session::Shared),
            SessionPolicy::PerRequest => self.open().map(Session::Scoped),
        }
    }

    /// Number of sessions opened so far.
    #[must_use]
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::Relaxed)
    }

    fn open(&self) -> Result<Client, TransportError> {
        let client = self.factory.build()?;
        self.opened.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(policy = ?self.policy, "Opened HTTP session");
        Ok(client)
    }
}
