//! Canned HTTP transport for client tests

use async_trait::async_trait;
use sansu_application::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::secrets::StaticSecretStore;

/// Replays queued responses in order and records every request
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn with_json(body: Value) -> Arc<Self> {
        let transport = Self::new();
        transport.push_json(body);
        transport
    }

    pub(crate) fn push_json(&self, body: Value) {
        self.push(Ok(HttpResponse::new(200, body.to_string())));
    }

    pub(crate) fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no canned response".to_string())))
    }
}

pub(crate) fn all_keys() -> Arc<StaticSecretStore> {
    Arc::new(
        StaticSecretStore::new()
            .with("GEMINI_API_KEY", "gemini-key")
            .with("OPENAI_API_KEY", "openai-key")
            .with("CLAUDE_API_KEY", "claude-key"),
    )
}

pub(crate) fn question_object() -> Value {
    json!({
        "question_1": "a",
        "question_2": "b",
        "question_3": "c",
        "question_4": "d",
        "question_5": "e"
    })
}
