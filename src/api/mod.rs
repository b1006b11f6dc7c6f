//! Backend API client.
//!
//! [`ApiClient::request`] is the single request primitive: it applies the
//! configured headers and timeout, maps non-2xx statuses to
//! [`ApiError::Http`] and decodes the body as JSON when the content type says
//! so. The domain operations below it only choose method, path and body.
//!
//! The client is constructed explicitly and passed to whoever needs it; tests
//! inject a [`MockHttpClient`](crate::adapters::MockHttpClient).

pub mod payloads;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::adapters::ReqwestHttpClient;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Difficulty, Feedback, JobRole, Question};
use crate::traits::{Headers, HttpClient, HttpError};

use payloads::{
    EndSessionRequest, QuestionsRequest, QuestionsResponse, StartSessionRequest,
    StartSessionResponse, SubmitAnswerRequest,
};

/// HTTP methods used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body announced as JSON
    Json(Value),
    /// Anything else, as text
    Text(String),
}

impl ResponseBody {
    /// Decode into a typed value.
    ///
    /// Text bodies are still tried as JSON since some backends omit the
    /// content type.
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        match self {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Text(text) => serde_json::from_str(&text).map_err(|_| {
                ApiError::InvalidResponse(format!("expected JSON, got {:?}", truncate(&text, 80)))
            }),
        }
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Client for the interview backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    headers: Headers,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiClient {
    /// Create a client backed by reqwest.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`] implementation.
    pub fn with_http_client(config: &ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            headers: config.headers.clone(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one request and decode its body.
    ///
    /// Dropping the returned future cancels the request; the timeout does the
    /// same and reports [`ApiError::RequestTimeout`].
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> ApiResult<ResponseBody> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("{} {}", method.as_str(), url);

        let call = async {
            match method {
                Method::Get => self.http.get(&url, &self.headers).await,
                Method::Post => {
                    let payload = body.map(Value::to_string).unwrap_or_default();
                    self.http.post(&url, &payload, &self.headers).await
                }
            }
        };

        let timeout_error = || ApiError::RequestTimeout {
            endpoint: endpoint.to_string(),
            timeout: self.timeout,
        };

        let response = match tokio::time::timeout(self.timeout, call).await {
            Err(_elapsed) => {
                tracing::warn!("{} {} timed out after {:?}", method.as_str(), endpoint, self.timeout);
                return Err(timeout_error());
            }
            Ok(Err(HttpError::Timeout(_))) => return Err(timeout_error()),
            Ok(Err(err)) => {
                tracing::warn!("{} {} failed: {}", method.as_str(), endpoint, err);
                return Err(err.into());
            }
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            tracing::warn!("{} {} returned HTTP {}", method.as_str(), endpoint, response.status);
            return Err(ApiError::Http {
                status: response.status,
            });
        }

        if response.is_json() && !response.body.is_empty() {
            Ok(ResponseBody::Json(response.json()?))
        } else {
            Ok(ResponseBody::Text(
                String::from_utf8_lossy(&response.body).into_owned(),
            ))
        }
    }

    async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<ResponseBody> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("unserializable request: {}", e)))?;
        self.request(Method::Post, endpoint, Some(&body)).await
    }

    /// `POST /api/start-session`; returns the backend-issued session id.
    pub async fn start_session(&self, job_role: JobRole, candidate_name: &str) -> ApiResult<String> {
        let body = StartSessionRequest {
            job_role: job_role.as_str(),
            candidate_name,
        };
        let response: StartSessionResponse =
            self.post("/api/start-session", &body).await?.decode()?;
        Ok(response.session_id)
    }

    /// `POST /api/questions`; returns the ordered question list.
    pub async fn get_questions(
        &self,
        job_role: JobRole,
        difficulty: Difficulty,
    ) -> ApiResult<Vec<Question>> {
        let body = QuestionsRequest {
            job_role: job_role.as_str(),
            difficulty,
        };
        let response: QuestionsResponse = self.post("/api/questions", &body).await?.decode()?;
        Ok(response.questions)
    }

    /// `POST /api/submit-answer`.
    pub async fn submit_answer(
        &self,
        question_id: &str,
        answer: &str,
        session_id: &str,
    ) -> ApiResult<ResponseBody> {
        let body = SubmitAnswerRequest {
            question_id,
            answer,
            session_id,
        };
        self.post("/api/submit-answer", &body).await
    }

    /// `POST /api/end-session`.
    pub async fn end_session(&self, session_id: &str) -> ApiResult<ResponseBody> {
        self.post("/api/end-session", &EndSessionRequest { session_id })
            .await
    }

    /// `GET /api/feedback/{session_id}`.
    pub async fn get_feedback(&self, session_id: &str) -> ApiResult<Feedback> {
        let endpoint = format!("/api/feedback/{}", urlencoding::encode(session_id));
        self.request(Method::Get, &endpoint, None).await?.decode()
    }

    /// `GET /api/health`.
    pub async fn health_check(&self) -> ApiResult<ResponseBody> {
        self.request(Method::Get, "/api/health", None).await
    }
}
