//! Report export from the results screen.

mod common;

use common::*;
use mock_interview::app::Screen;
use mock_interview::input::{execute, Command};
use mock_interview::models::{Difficulty, JobRole};

#[tokio::test]
async fn test_export_writes_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let backend = scripted_backend(&[("q1", "Tell me about yourself"), ("q2", "Why Rust?")]);
    let config = test_config().with_export(dir.path().join("reports"), false);
    let mut app = test_app_with(&backend, config);

    fill_setup(&mut app, "Ada Lovelace", JobRole::FullStackDeveloper, Difficulty::Medium);
    app.submit_setup();
    pump_until(&mut app, |app| app.screen() == Screen::Interview).await;
    app.session_mut().unwrap().insert_str("First line\nSecond line");
    app.submit_answer();
    pump_until(&mut app, |app| app.session().is_some_and(|s| s.current_index() == 1)).await;
    app.skip_question();
    pump_until(&mut app, |app| app.results().is_some_and(|r| !r.is_loading())).await;

    execute(&mut app, Command::Export);

    let notice = app.notice.clone().unwrap();
    assert!(notice.starts_with("Report saved to"), "{notice}");

    let files: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with(&format!("interview-report-{SESSION_ID}-")));

    let text = std::fs::read_to_string(&files[0]).unwrap();
    assert!(text.contains("Candidate:  Ada Lovelace"));
    assert!(text.contains("Role:       Full Stack Developer"));
    assert!(text.contains("Overall score: 82/100"));
    assert!(text.contains("    First line\n    Second line"));
    assert!(text.contains("[Skipped]"));
}

#[tokio::test]
async fn test_export_before_feedback_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let backend = scripted_backend(&[("q1", "Q")]);
    backend.set_response(
        &url("/api/feedback/"),
        mock_interview::adapters::mock::MockResponse::status(500),
    );
    let mut app = test_app_with(&backend, test_config().with_export(dir.path(), false));

    fill_setup(&mut app, "Ada", JobRole::UiUxDesigner, Difficulty::Easy);
    app.submit_setup();
    pump_until(&mut app, |app| app.screen() == Screen::Interview).await;
    app.skip_question();
    pump_until(&mut app, |app| app.results().is_some_and(|r| !r.is_loading())).await;

    app.export_results();
    assert!(app.notice.as_deref().unwrap().starts_with("Export failed"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_export_is_ignored_outside_results() {
    let backend = scripted_backend(&[]);
    let mut app = test_app(&backend);
    app.export_results();
    assert!(app.notice.is_none());
}
