//! Plain-text export of interview results.
//!
//! The report is written to a file and handed to the OS viewer, from which
//! it can be printed.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::flows::{FeedbackReport, ResultsFlow};
use crate::models::{Answer, SessionParameters};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("feedback has not been loaded")]
    NotReady,

    #[error("cannot create {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
}

/// Render the full report as text.
pub fn render_text(
    parameters: &SessionParameters,
    session_id: &str,
    report: &FeedbackReport,
    answers: &[Answer],
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Mock Interview Report");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Candidate:  {}", parameters.candidate_name());
    let _ = writeln!(out, "Role:       {}", parameters.job_role());
    let _ = writeln!(out, "Difficulty: {}", parameters.difficulty().label());
    let _ = writeln!(out, "Session:    {session_id}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Overall score: {}/100", report.overall_score);
    let _ = writeln!(out, "{}", report.overall_feedback);

    if let Some(questions) = &report.questions {
        let _ = writeln!(out);
        let _ = writeln!(out, "Question feedback");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for item in questions {
            let _ = writeln!(out, "{}. {} ({}/100)", item.number, item.question, item.score);
            let _ = writeln!(out, "   {}", item.feedback);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Strengths");
    for strength in &report.strengths {
        let _ = writeln!(out, "  + {strength}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Areas for improvement");
    for improvement in &report.improvements {
        let _ = writeln!(out, "  - {improvement}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Transcript");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for (i, answer) in answers.iter().enumerate() {
        let _ = writeln!(out, "Q{}: {}", i + 1, answer.question);
        let _ = writeln!(out, "[{}]", answer.timestamp_iso());
        for line in answer.answer.lines() {
            let _ = writeln!(out, "    {line}");
        }
        let _ = writeln!(out);
    }

    out
}

/// File name for a report, unique per session and time.
pub fn file_name(session_id: &str, at: DateTime<Local>) -> String {
    let safe: String = session_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .take(40)
        .collect();
    format!("interview-report-{}-{}.txt", safe, at.format("%Y%m%d-%H%M%S"))
}

/// Write the loaded results of `flow` into `dir`.
pub fn export(flow: &ResultsFlow, dir: &Path, at: DateTime<Local>) -> Result<PathBuf, ExportError> {
    let report = flow.report().ok_or(ExportError::NotReady)?;
    let text = render_text(flow.parameters(), flow.session_id(), report, flow.answers());

    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(file_name(flow.session_id(), at));
    fs::write(&path, text).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!("Exported interview report to {}", path.display());
    Ok(path)
}

/// Hand a written report to the default viewer.
pub fn open_in_viewer(path: &Path) -> Result<(), ExportError> {
    open::that(path).map_err(|source| ExportError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::SessionOutcome;
    use crate::models::{Difficulty, Feedback, JobRole, Question};
    use chrono::{TimeZone, Utc};

    fn loaded_flow() -> ResultsFlow {
        let at = Utc.with_ymd_and_hms(2026, 4, 2, 8, 15, 0).unwrap();
        let (mut flow, _) = ResultsFlow::new(SessionOutcome {
            parameters: SessionParameters::new("Linus", Some(JobRole::BackendDeveloper), Difficulty::Hard)
                .unwrap(),
            session_id: "abc/123".to_string(),
            answers: vec![Answer::submitted(
                &Question::new("1", "Explain ownership"),
                "Each value has one owner.\nBorrows are checked.",
                at,
            )],
        });
        flow.on_feedback(Ok(Feedback {
            overall_score: Some(88.0),
            ..Feedback::default()
        }));
        flow
    }

    #[test]
    fn test_render_text_sections() {
        let flow = loaded_flow();
        let text = render_text(
            flow.parameters(),
            flow.session_id(),
            flow.report().unwrap(),
            flow.answers(),
        );
        assert!(text.contains("Candidate:  Linus"));
        assert!(text.contains("Role:       Backend Developer"));
        assert!(text.contains("Overall score: 88/100"));
        assert!(text.contains("Great job completing the interview!"));
        assert!(!text.contains("Question feedback"));
        assert!(text.contains("  + Completed all questions"));
        assert!(text.contains("Q1: Explain ownership"));
        assert!(text.contains("[2026-04-02T08:15:00.000Z]"));
        assert!(text.contains("    Borrows are checked."));
    }

    #[test]
    fn test_file_name_is_sanitized() {
        let at = Local.with_ymd_and_hms(2026, 4, 2, 10, 0, 5).unwrap();
        assert_eq!(
            file_name("abc/123", at),
            "interview-report-abc_123-20260402-100005.txt"
        );
    }

    #[test]
    fn test_export_requires_loaded_feedback() {
        let (flow, _) = ResultsFlow::new(SessionOutcome {
            parameters: SessionParameters::new("A", Some(JobRole::ProductManager), Difficulty::Easy)
                .unwrap(),
            session_id: "s".to_string(),
            answers: Vec::new(),
        });
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            export(&flow, dir.path(), Local::now()),
            Err(ExportError::NotReady)
        ));
    }

    #[test]
    fn test_export_writes_file() {
        let flow = loaded_flow();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports");

        let path = export(&flow, &target, Local::now()).unwrap();
        assert!(path.starts_with(&target));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Mock Interview Report"));
    }
}
