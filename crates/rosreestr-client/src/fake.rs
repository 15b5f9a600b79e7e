//! In-process executor for unit tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use rosreestr_http::{Executor, HttpRequest, HttpResponse, TransportError};

/// Answers requests from a fixed URL table and records every URL it was asked for.
///
/// Unknown URLs get a 404.
#[derive(Debug, Default)]
pub(crate) struct FakeExecutor {
    routes: HashMap<String, (u16, String)>,
    calls: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), (status, body.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn calls_to(&self, url: &str) -> usize {
        self.calls().iter().filter(|call| *call == url).count()
    }
}

impl Executor for FakeExecutor {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.url.clone());

        let (status, body) = self
            .routes
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| (404, "not found".to_string()));
        Ok(HttpResponse::new(status, request.url, body))
    }
}
