//! Results flow: fetch feedback for a finished session and assemble the
//! report shown beside the local transcript.
//!
//! `Loading -> {Loaded, Failed}`. A failed fetch is terminal for the view;
//! the only way forward is a full restart, handled by the shell.

use crate::error::ApiResult;
use crate::flows::session::SessionOutcome;
use crate::models::{Answer, Feedback, ScoreBand, SessionParameters};

pub const LOADING_MESSAGE: &str = "Analyzing your interview performance...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load interview feedback";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsStatus {
    Loading,
    /// Fetch failed; carries the underlying error text
    Failed(String),
    Loaded(FeedbackReport),
}

/// Side effect requested by the results flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsCommand {
    FetchFeedback { session_id: String },
}

#[derive(Debug, Clone)]
pub struct ResultsFlow {
    parameters: SessionParameters,
    session_id: String,
    answers: Vec<Answer>,
    status: ResultsStatus,
    scroll: u16,
}

impl ResultsFlow {
    /// Enter the view; the returned command fetches the feedback.
    pub fn new(outcome: SessionOutcome) -> (Self, ResultsCommand) {
        let command = ResultsCommand::FetchFeedback {
            session_id: outcome.session_id.clone(),
        };
        let flow = Self {
            parameters: outcome.parameters,
            session_id: outcome.session_id,
            answers: outcome.answers,
            status: ResultsStatus::Loading,
            scroll: 0,
        };
        (flow, command)
    }

    pub fn parameters(&self) -> &SessionParameters {
        &self.parameters
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn status(&self) -> &ResultsStatus {
        &self.status
    }

    pub fn report(&self) -> Option<&FeedbackReport> {
        match &self.status {
            ResultsStatus::Loaded(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ResultsStatus::Loading
    }

    /// Apply the feedback fetch. Only the first completion counts.
    pub fn on_feedback(&mut self, result: ApiResult<Feedback>) {
        if !self.is_loading() {
            return;
        }
        self.status = match result {
            Ok(feedback) => {
                tracing::info!(
                    "Feedback for {} loaded (score {})",
                    self.session_id,
                    feedback.overall_score()
                );
                ResultsStatus::Loaded(FeedbackReport::build(&feedback, &self.answers))
            }
            Err(err) => {
                tracing::warn!(
                    "Loading feedback for {} failed [{}]: {}",
                    self.session_id,
                    err.error_code(),
                    err
                );
                ResultsStatus::Failed(err.to_string())
            }
        };
        self.scroll = 0;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Keep the scroll offset within the rendered content.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

/// Per-question entry of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReport {
    /// 1-based position
    pub number: usize,
    pub question: String,
    pub score: u8,
    pub feedback: String,
}

impl QuestionReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }
}

/// Feedback with every fallback applied, ready to render or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport {
    pub overall_score: u8,
    pub overall_feedback: String,
    /// `None` when the backend sent no per-question section
    pub questions: Option<Vec<QuestionReport>>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl FeedbackReport {
    /// Combine backend feedback with the locally held answers.
    ///
    /// Items keep backend order; an item without question text borrows the
    /// local answer's question at the same position.
    pub fn build(feedback: &Feedback, answers: &[Answer]) -> Self {
        let questions = feedback.question_feedback.as_ref().map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let question = item
                        .question
                        .as_deref()
                        .filter(|q| !q.trim().is_empty())
                        .or_else(|| answers.get(i).map(|a| a.question.as_str()))
                        .unwrap_or_default()
                        .to_string();
                    QuestionReport {
                        number: i + 1,
                        question,
                        score: item.score(),
                        feedback: item.feedback().to_string(),
                    }
                })
                .collect()
        });

        Self {
            overall_score: feedback.overall_score(),
            overall_feedback: feedback.overall_feedback().to_string(),
            questions,
            strengths: feedback.strengths(),
            improvements: feedback.improvements(),
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.overall_score)
    }
}
