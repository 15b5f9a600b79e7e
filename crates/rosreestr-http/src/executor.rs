//! The HTTP executor: one logged request per call.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::ExecutorConfig;
use crate::error::TransportError;
use crate::logger::{body_for_logging, RequestLogRecord, RequestLogger, TracingRequestLogger};
use crate::request::{HttpRequest, HttpResponse};
use crate::session::Sessions;

/// Capability shared by the registry clients: send one request, get one response.
///
/// Implementations must not interpret the status code; a 500 response is a
/// successful execution.
pub trait Executor: Send + Sync + Debug {
    /// Sends `request` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Sends a `GET` request to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.execute(HttpRequest::get(url))
    }
}

/// Blocking executor backed by `reqwest`.
///
/// Every call emits an INFO record before sending and a DEBUG (status < 400)
/// or ERROR (status >= 400, transport failure) record afterwards through the
/// injected [`RequestLogger`].
///
/// A single executor may be shared between clients through `Arc`; with
/// keep-alive enabled they all reuse the same session.
///
/// # Examples
///
/// ```no_run
/// use rosreestr_http::{Executor, ExecutorConfig, HttpExecutor};
///
/// let executor = HttpExecutor::new(ExecutorConfig::new().with_keep_alive(true))?;
/// let response = executor.get("https://rosreestr.gov.ru/api/online/macro_regions/")?;
/// println!("HTTP {}", response.status);
/// # Ok::<(), rosreestr_http::TransportError>(())
/// ```
#[derive(Debug)]
pub struct HttpExecutor {
    config: ExecutorConfig,
    sessions: Sessions,
    logger: Arc<dyn RequestLogger>,
}

impl HttpExecutor {
    /// Creates an executor that logs through `tracing`.
    ///
    /// No connection is opened until the first call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Tls`] if a configured CA bundle cannot be loaded.
    pub fn new(config: ExecutorConfig) -> Result<Self, TransportError> {
        Ok(Self {
            sessions: Sessions::new(&config)?,
            config,
            logger: Arc::new(TracingRequestLogger::new()),
        })
    }

    /// Replaces the request logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Returns the executor configuration.
    #[must_use]
    pub const fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Returns the session manager.
    #[must_use]
    pub const fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    /// Sends a `GET` request with form-urlencoded query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    pub fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        self.execute(HttpRequest::get(url).with_query(params))
    }

    /// Sends a `POST` request with an optional body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    pub fn post(&self, url: &str, body: Option<Vec<u8>>) -> Result<HttpResponse, TransportError> {
        self.execute(with_optional_body(HttpRequest::post(url), body))
    }

    /// Sends a `PATCH` request with an optional body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    pub fn patch(&self, url: &str, body: Option<Vec<u8>>) -> Result<HttpResponse, TransportError> {
        self.execute(with_optional_body(HttpRequest::patch(url), body))
    }

    /// Sends a `PUT` request with an optional body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    pub fn put(&self, url: &str, body: Option<Vec<u8>>) -> Result<HttpResponse, TransportError> {
        self.execute(with_optional_body(HttpRequest::put(url), body))
    }

    /// Merges default headers with per-call headers; per-call values win.
    fn merged_headers(&self, headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut merged = HeaderMap::new();
        let defaults = self
            .config
            .default_headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()));
        let per_call = headers.iter().map(|(name, value)| (name.as_str(), value.as_str()));

        for (name, value) in defaults.chain(per_call) {
            let invalid = || TransportError::InvalidHeader {
                name: name.to_string(),
            };
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            merged.insert(name, value);
        }

        Ok(merged)
    }

    fn send(
        session: &Client,
        request: HttpRequest,
        headers: HeaderMap,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method, url, body, ..
        } = request;

        let mut builder = session
            .request(method.into(), url.as_str())
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .map_err(|e| TransportError::send(method, &url, e))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let final_url = response.url().to_string();
        let body = response
            .bytes()
            .map_err(|e| TransportError::body(method, &url, status, e))?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
            url: final_url,
        })
    }
}

impl Executor for HttpExecutor {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = request.method;
        let url = request.url.clone();
        let timeout = request.timeout.unwrap_or(self.config.timeout);
        let request_body = body_for_logging(request.body.as_deref());

        self.logger
            .log(&RequestLogRecord::sent(method, &url, request_body.clone()));

        let start = Instant::now();
        // The session is dropped at the end of this expression, closing
        // per-request sessions whether the call succeeded or not.
        let result = self.merged_headers(&request.headers).and_then(|headers| {
            let session = self.sessions.acquire()?;
            Self::send(&session, request, headers, timeout)
        });
        let duration = start.elapsed();

        match result {
            Ok(response) => {
                self.logger.log(&RequestLogRecord::completed(
                    method,
                    &url,
                    request_body,
                    response.status,
                    body_for_logging(Some(&response.body)),
                    duration,
                ));
                Ok(response)
            }
            Err(err) => {
                self.logger.log(&RequestLogRecord::failed(
                    method,
                    &url,
                    request_body,
                    err.status(),
                    duration,
                    err.to_string(),
                ));
                Err(err)
            }
        }
    }
}

fn with_optional_body(request: HttpRequest, body: Option<Vec<u8>>) -> HttpRequest {
    match body {
        Some(body) => request.with_body(body),
        None => request,
    }
}
