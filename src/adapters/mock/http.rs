//! Scripted, recording HTTP double.
//!
//! Tests script the backend per URL and inspect what the client sent.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One request as the double received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// `GET` or `POST`
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// POST payload
    pub body: Option<String>,
}

impl RecordedRequest {
    /// The POST payload parsed as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.body.as_deref()?).ok()
    }
}

/// What the double answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A response with any status
    Success(Response),
    /// A transport failure
    Error(HttpError),
    /// Sleep, then answer; drives timeout paths
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    /// 200 with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(200, &value))
    }

    /// Empty body with the given status.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, Bytes::new()))
    }
}

#[derive(Debug, Default)]
struct Script {
    /// Answered every time
    sticky: HashMap<String, MockResponse>,
    /// Answered once each, before `sticky`
    queued: HashMap<String, VecDeque<MockResponse>>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

impl Script {
    /// Exact key first, then the longest key that prefixes `url`.
    fn key_for<'a, V>(map: &'a HashMap<String, V>, url: &'a str) -> Option<&'a str> {
        if map.contains_key(url) {
            return Some(url);
        }
        map.keys()
            .filter(|key| url.starts_with(key.as_str()))
            .max_by_key(|key| key.len())
            .map(String::as_str)
    }

    fn next_response(&mut self, url: &str) -> Option<MockResponse> {
        if let Some(key) = Self::key_for(&self.queued, url).map(str::to_owned) {
            if let Some(response) = self.queued.get_mut(&key).and_then(VecDeque::pop_front) {
                return Some(response);
            }
        }
        Self::key_for(&self.sticky, url)
            .and_then(|key| self.sticky.get(key).cloned())
            .or_else(|| self.fallback.clone())
    }
}

/// Mock [`HttpClient`]. Clones share the same script and request log.
///
/// ```ignore
/// use mock_interview::adapters::mock::{MockHttpClient, MockResponse};
///
/// let backend = MockHttpClient::new();
/// backend.set_response(
///     "http://backend/api/health",
///     MockResponse::json(serde_json::json!({"status": "ok"})),
/// );
/// // first submit fails, later ones use the sticky response
/// backend.push_response("http://backend/api/submit-answer", MockResponse::status(500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        // A panicking test must not poison the double for the assertions after it
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer requests to `url` (or any URL it prefixes) with `response`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.script().sticky.insert(url.to_string(), response);
    }

    /// Answer the next request to `url` with `response`, once.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        self.script()
            .queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Answer for URLs nothing else matches.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script().fallback = Some(response);
    }

    /// Every request so far, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script().requests.clone()
    }

    /// Requests whose URL ends with `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.script()
            .requests
            .iter()
            .filter(|r| r.url.ends_with(path))
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.script().requests.clear();
    }

    async fn handle(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<&str>,
    ) -> Result<Response, HttpError> {
        let mut next = {
            let mut script = self.script();
            script.requests.push(RecordedRequest {
                method: method.to_string(),
                url: url.to_string(),
                headers: headers.clone(),
                body: body.map(str::to_owned),
            });
            script.next_response(url)
        };

        loop {
            match next {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed(delay, inner)) => {
                    tokio::time::sleep(delay).await;
                    next = Some(*inner);
                }
                None => return Err(HttpError::Other(format!("unscripted request: {} {}", method, url))),
            }
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, headers, None).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, headers, Some(body)).await
    }
}
