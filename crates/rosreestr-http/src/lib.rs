//! # Rosreestr HTTP
//!
//! Blocking HTTP executor used by the Rosreestr registry clients.
//!
//! The executor sends one request per call and returns the raw response
//! without interpreting its status. Around every call it emits structured
//! log records through an injected [`RequestLogger`]:
//!
//! | Moment                        | Level   |
//! |-------------------------------|---------|
//! | before sending                | `INFO`  |
//! | response with status < 400    | `DEBUG` |
//! | response with status >= 400   | `ERROR` |
//! | transport failure             | `ERROR` |
//!
//! ## Session policy
//!
//! With keep-alive enabled the executor lazily creates one session on the
//! first call and reuses it; otherwise every call opens a fresh session that
//! is closed when the call returns, whether it succeeded or not.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use rosreestr_http::{Executor, ExecutorConfig, HttpExecutor, HttpRequest};
//!
//! let executor = HttpExecutor::new(
//!     ExecutorConfig::new()
//!         .with_timeout(Duration::from_secs(5))
//!         .with_keep_alive(true),
//! )?;
//!
//! let response = executor.execute(
//!     HttpRequest::get("https://rosreestr.gov.ru/api/online/macro_regions/")
//!         .with_header("Accept", "application/json"),
//! )?;
//! println!("{}", response.text());
//! # Ok::<(), rosreestr_http::TransportError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod executor;
mod logger;
mod request;
mod session;

pub use config::{ExecutorConfig, TlsConfig, DEFAULT_TIMEOUT};
pub use error::TransportError;
pub use executor::{Executor, HttpExecutor};
pub use logger::{
    InMemoryRequestLogger, LogLevel, RequestEvent, RequestLogRecord, RequestLogger,
    TracingRequestLogger,
};
pub use request::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{Session, SessionPolicy, Sessions};
