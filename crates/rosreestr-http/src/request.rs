//! Request and response types passed through an executor.

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// HTTP methods the executor can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
    /// `PUT`
    Put,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Put => Self::PUT,
        }
    }
}

/// A single outgoing request.
///
/// Headers set here are merged on top of the executor's default headers, and
/// `timeout` overrides the executor's configured timeout for this call only.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use rosreestr_http::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::get("https://rosreestr.gov.ru/api/online/macro_regions/")
///     .with_header("Accept", "application/json")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Per-call headers; these win over default headers with the same name.
    pub headers: Vec<(String, String)>,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
    /// Per-call timeout override.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a request with no headers, body, or timeout override.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Creates a `GET` request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a `POST` request.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Creates a `PATCH` request.
    #[must_use]
    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, url)
    }

    /// Creates a `PUT` request.
    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    /// Adds a per-call header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Overrides the executor timeout for this request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Appends form-urlencoded query parameters to the URL.
    ///
    /// An empty parameter list leaves the URL untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rosreestr_http::HttpRequest;
    ///
    /// let request = HttpRequest::get("https://example.com/search")
    ///     .with_query(&[("text", "77:17:0:11471"), ("limit", "11")]);
    /// assert_eq!(request.url, "https://example.com/search?text=77%3A17%3A0%3A11471&limit=11");
    /// ```
    #[must_use]
    pub fn with_query(mut self, params: &[(&str, &str)]) -> Self {
        if params.is_empty() {
            return self;
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        let separator = if self.url.contains('?') { '&' } else { '?' };
        self.url.push(separator);
        self.url.push_str(&query);
        self
    }
}

/// A fully-read response, returned as-is with no status interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw body bytes.
    pub body: Vec<u8>,
    /// Final URL after redirects.
    pub url: String,
}

impl HttpResponse {
    /// Creates a response with no headers.
    ///
    /// Mainly useful for [`Executor`](crate::Executor) implementations that do
    /// not talk to a real server.
    #[must_use]
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            url: url.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }

    #[test]
    fn test_with_query_appends_to_existing_query() {
        let request = HttpRequest::get("https://example.com/features/1?text=1").with_query(&[
            ("limit", "11"),
            ("tolerance", "2"),
        ]);
        assert_eq!(
            request.url,
            "https://example.com/features/1?text=1&limit=11&tolerance=2"
        );
    }

    #[test]
    fn test_with_query_empty_params() {
        let request = HttpRequest::get("https://example.com/").with_query(&[]);
        assert_eq!(request.url, "https://example.com/");
    }

    #[test]
    fn test_builders() {
        let request = HttpRequest::post("https://example.com/")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"a":1}"#);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
        assert!(request.timeout.is_none());
    }

    #[test]
    fn test_response_helpers() {
        let response = HttpResponse::new(204, "https://example.com/", b"[1, 2]".as_slice());

        assert!(response.is_success());
        assert_eq!(response.text(), "[1, 2]");
        assert_eq!(response.json::<Vec<u8>>().unwrap(), vec![1, 2]);
    }
}
