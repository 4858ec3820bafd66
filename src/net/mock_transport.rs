//! Scripted transport shared by the client tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Replays queued outcomes in order and records every request it receives.
///
/// An exhausted script answers with a network error.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Ok(HttpResponse { status, body: body.to_string() }));
        self
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self) -> Self {
        self.push(Err(TransportError::Network("connection refused".into())));
        self
    }

    /// Queue another outcome on an already shared transport.
    pub fn push(&self, outcome: Result<HttpResponse, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
    }
}
