//! Common test utilities for integration tests.
//!
//! Provides a scripted backend (a [`MockHttpClient`] with every endpoint
//! answered), an [`App`] wired to it, and helpers to drive the message loop.
//!
//! # Example
//!
//! ```ignore
//! let backend = scripted_backend(&[("q1", "Tell me about yourself")]);
//! let mut app = test_app(&backend);
//! fill_setup(&mut app, "Ada", JobRole::SoftwareEngineer, Difficulty::Easy);
//! app.submit_setup();
//! pump_until(&mut app, |app| app.screen() == Screen::Interview).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use mock_interview::adapters::mock::{MockHttpClient, MockResponse};
use mock_interview::api::ApiClient;
use mock_interview::app::App;
use mock_interview::config::{ApiConfig, AppConfig};
use mock_interview::models::{Difficulty, JobRole};

pub const BASE: &str = "http://backend.test";
pub const SESSION_ID: &str = "sess-1";

/// Upper bound for any single wait in these tests.
pub const WAIT: Duration = Duration::from_secs(5);

pub fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

/// Configuration that never touches the user's files.
pub fn test_config() -> AppConfig {
    AppConfig::new()
        .with_api(
            ApiConfig::default()
                .with_base_url(BASE)
                .with_timeout(Duration::from_secs(2)),
        )
        .with_log_file(None)
        .with_health_check_interval(Duration::from_secs(3600))
        .with_export(std::env::temp_dir(), false)
}

/// A backend where every call succeeds.
pub fn scripted_backend(questions: &[(&str, &str)]) -> MockHttpClient {
    let backend = MockHttpClient::new();
    let questions: Vec<_> = questions
        .iter()
        .map(|(id, text)| json!({"id": id, "text": text}))
        .collect();

    backend.set_response(
        &url("/api/start-session"),
        MockResponse::json(json!({"session_id": SESSION_ID, "status": "started"})),
    );
    backend.set_response(
        &url("/api/questions"),
        MockResponse::json(json!({"questions": questions})),
    );
    backend.set_response(
        &url("/api/submit-answer"),
        MockResponse::json(json!({"status": "received"})),
    );
    backend.set_response(
        &url("/api/end-session"),
        MockResponse::json(json!({"status": "ended"})),
    );
    backend.set_response(&url("/api/feedback/"), MockResponse::json(sample_feedback()));
    backend.set_response(&url("/api/health"), MockResponse::json(json!({"status": "ok"})));
    backend
}

pub fn sample_feedback() -> serde_json::Value {
    json!({
        "overall_score": 82,
        "overall_feedback": "Solid answers with clear structure.",
        "question_feedback": [
            {"question": "Tell me about yourself", "score": 90, "feedback": "Concise."},
            {"score": 40, "feedback": "Skipped."},
            {"question": "Why this role?", "score": 75}
        ],
        "strengths": ["Communication"],
        "improvements": ["Give more metrics"]
    })
}

pub fn api_for(backend: &MockHttpClient, config: &AppConfig) -> ApiClient {
    ApiClient::with_http_client(&config.api, Arc::new(backend.clone()))
}

pub fn test_app(backend: &MockHttpClient) -> App {
    test_app_with(backend, test_config())
}

pub fn test_app_with(backend: &MockHttpClient, config: AppConfig) -> App {
    let api = api_for(backend, &config);
    App::new(config, api)
}

/// Fill every setup field. The app must be on the setup screen.
pub fn fill_setup(app: &mut App, name: &str, role: JobRole, difficulty: Difficulty) {
    let flow = app.setup_mut().expect("setup screen");
    flow.set_candidate_name(name);
    flow.set_job_role(Some(role));
    flow.set_difficulty(difficulty);
}

/// Process messages until `done` holds. Panics after [`WAIT`].
pub async fn pump_until<F>(app: &mut App, mut done: F)
where
    F: FnMut(&App) -> bool,
{
    let result = tokio::time::timeout(WAIT, async {
        while !done(app) {
            if !app.process_next_message().await {
                panic!("message channel closed");
            }
        }
    })
    .await;
    assert!(result.is_ok(), "condition not reached, app: {:?}", app);
}

/// Process whatever arrives within `window`.
pub async fn drain_for(app: &mut App, window: Duration) {
    let _ = tokio::time::timeout(window, async {
        while app.process_next_message().await {}
    })
    .await;
}
