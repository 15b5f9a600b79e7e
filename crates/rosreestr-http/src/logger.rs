//! Request logging collaborator injected into the executor.

use std::fmt::{self, Debug};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, error, info};

use crate::request::HttpMethod;

/// Severity of a request log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Successful responses.
    Debug,
    /// Outgoing requests.
    Info,
    /// Responses with status >= 400 and transport failures.
    Error,
}

/// Stage of the exchange a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestEvent {
    /// The request is about to be sent.
    Sent,
    /// A response was received.
    Completed,
    /// The request failed at the transport level.
    Failed,
}

/// One structured log record emitted by the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestLogRecord {
    /// Severity.
    pub level: LogLevel,
    /// Stage of the exchange.
    pub event: RequestEvent,
    /// Request method.
    pub method: HttpMethod,
    /// Request URL.
    pub url: String,
    /// Request body, when present and valid UTF-8.
    pub request_body: Option<String>,
    /// Response status, when a (possibly partial) response exists.
    pub status: Option<u16>,
    /// Response body, when present and valid UTF-8.
    pub response_body: Option<String>,
    /// Wall-clock time since the request was sent.
    pub duration: Option<Duration>,
    /// Transport error message for failed requests.
    pub error: Option<String>,
}

impl RequestLogRecord {
    pub(crate) fn sent(method: HttpMethod, url: &str, request_body: Option<String>) -> Self {
        Self {
            level: LogLevel::Info,
            event: RequestEvent::Sent,
            method,
            url: url.to_string(),
            request_body,
            status: None,
            response_body: None,
            duration: None,
            error: None,
        }
    }

    pub(crate) fn completed(
        method: HttpMethod,
        url: &str,
        request_body: Option<String>,
        status: u16,
        response_body: Option<String>,
        duration: Duration,
    ) -> Self {
        Self {
            level: if status >= 400 {
                LogLevel::Error
            } else {
                LogLevel::Debug
            },
            event: RequestEvent::Completed,
            method,
            url: url.to_string(),
            request_body,
            status: Some(status),
            response_body,
            duration: Some(duration),
            error: None,
        }
    }

    pub(crate) fn failed(
        method: HttpMethod,
        url: &str,
        request_body: Option<String>,
        status: Option<u16>,
        duration: Duration,
        error: String,
    ) -> Self {
        Self {
            level: LogLevel::Error,
            event: RequestEvent::Failed,
            method,
            url: url.to_string(),
            request_body,
            status,
            response_body: None,
            duration: Some(duration),
            error: Some(error),
        }
    }
}

impl fmt::Display for RequestLogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)?;
        if let Some(ref body) = self.request_body {
            write!(f, " BODY: {body}")?;
        }
        if let Some(status) = self.status {
            write!(f, " - HTTP {status}")?;
        }
        if let Some(ref body) = self.response_body {
            write!(f, " BODY: {body}")?;
        }
        if let Some(duration) = self.duration {
            write!(f, " {:.6}s", duration.as_secs_f64())?;
        }
        if let Some(ref error) = self.error {
            write!(f, " - {error}")?;
        }
        Ok(())
    }
}

/// Renders a body for logging; empty or non-UTF-8 bodies are omitted.
pub(crate) fn body_for_logging(body: Option<&[u8]>) -> Option<String> {
    body.filter(|body| !body.is_empty())
        .and_then(|body| std::str::from_utf8(body).ok())
        .map(ToString::to_string)
}

/// Sink for executor log records.
pub trait RequestLogger: Send + Sync + Debug {
    /// Records one request/response event.
    fn log(&self, record: &RequestLogRecord);
}

/// Logger that forwards records to `tracing` at the matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestLogger;

impl TracingRequestLogger {
    /// Creates a new tracing logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

macro_rules! emit {
    ($level:ident, $record:expr) => {
        $level!(
            method = %$record.method,
            url = %$record.url,
            request_body = $record.request_body.as_deref(),
            status = $record.status,
            response_body = $record.response_body.as_deref(),
            duration_secs = $record.duration.map(|d| d.as_secs_f64()),
            error = $record.error.as_deref(),
            "{}",
            $record
        )
    };
}

impl RequestLogger for TracingRequestLogger {
    fn log(&self, record: &RequestLogRecord) {
        match record.level {
            LogLevel::Debug => emit!(debug, record),
            LogLevel::Info => emit!(info, record),
            LogLevel::Error => emit!(error, record),
        }
    }
}

/// Logger that keeps records in memory, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct InMemoryRequestLogger {
    records: Mutex<Vec<RequestLogRecord>>,
}

impl InMemoryRequestLogger {
    /// Creates an empty in-memory logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all records logged so far.
    #[must_use]
    pub fn records(&self) -> Vec<RequestLogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the records logged at `level`.
    #[must_use]
    pub fn records_at(&self, level: LogLevel) -> Vec<RequestLogRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .collect()
    }

    /// Clears all records.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl RequestLogger for InMemoryRequestLogger {
    fn log(&self, record: &RequestLogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}
