//! Session flow: the interview itself.
//!
//! ```text
//! Showing(i) --submit--> Submitting(i) --ok--> advance
//!     |                        '--err--> Showing(i), draft kept
//!     |--skip / timer hits 0--> advance
//! advance: Showing(i+1) or Finishing --end-session (any outcome)--> Done
//! ```
//!
//! Every transition is a method that returns the side effect the shell must
//! run, if any. Time is passed in so transitions stay deterministic.

use chrono::{DateTime, Utc};

use crate::config::QUESTION_TIME_LIMIT_SECS;
use crate::error::{ApiResult, ValidationError};
use crate::models::{Answer, Question, SessionParameters, StartedSession};

pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit answer. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Question on screen, countdown running
    Showing,
    /// Answer sent, waiting for the backend
    Submitting,
    /// All questions handled, ending the session
    Finishing,
    /// Terminal: outcome has been handed over
    Done,
}

/// Side effect requested by the session flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SubmitAnswer {
        question_index: usize,
        question_id: String,
        answer: String,
        session_id: String,
    },
    EndSession {
        session_id: String,
    },
}

/// What the interview produced, handed to the results flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub parameters: SessionParameters,
    pub session_id: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone)]
pub struct SessionFlow {
    parameters: SessionParameters,
    session_id: String,
    questions: Vec<Question>,
    index: usize,
    draft: String,
    time_limit: u32,
    time_left: u32,
    answers: Vec<Answer>,
    phase: SessionPhase,
    notice: Option<String>,
}

impl SessionFlow {
    /// Start at the first question.
    ///
    /// A session without questions goes straight to `Finishing` and the
    /// returned command ends it.
    pub fn new(started: StartedSession, time_limit: u32) -> (Self, Option<SessionCommand>) {
        let StartedSession {
            parameters,
            session,
        } = started;
        let time_limit = if time_limit == 0 {
            QUESTION_TIME_LIMIT_SECS
        } else {
            time_limit
        };

        let mut flow = Self {
            parameters,
            session_id: session.session_id,
            questions: session.questions,
            index: 0,
            draft: String::new(),
            time_limit,
            time_left: time_limit,
            answers: Vec::new(),
            phase: SessionPhase::Showing,
            notice: None,
        };

        let command = if flow.questions.is_empty() {
            Some(flow.finish())
        } else {
            None
        };
        (flow, command)
    }

    pub fn parameters(&self) -> &SessionParameters {
        &self.parameters
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Validation or submit-failure message for the current question.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Fraction of questions reached, counting the current one.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        ((self.index + 1) as f64 / self.questions.len() as f64).min(1.0)
    }

    /// Question whose countdown should be running, if any.
    pub fn countdown_target(&self) -> Option<usize> {
        (self.phase == SessionPhase::Showing).then_some(self.index)
    }

    /// A request is outstanding; submit and skip are disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SessionPhase::Submitting | SessionPhase::Finishing)
    }

    pub fn insert_str(&mut self, text: &str) {
        if self.phase == SessionPhase::Showing {
            self.draft.push_str(text);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.phase == SessionPhase::Showing {
            self.draft.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.phase == SessionPhase::Showing {
            self.draft.pop();
        }
    }

    /// Send the draft for the current question.
    ///
    /// Empty or whitespace-only drafts are rejected without any state change
    /// beyond the inline message. Returns `Ok(None)` when not on a question.
    pub fn submit(&mut self) -> Result<Option<SessionCommand>, ValidationError> {
        if self.phase != SessionPhase::Showing {
            return Ok(None);
        }
        if self.draft.trim().is_empty() {
            self.notice = Some(ValidationError::EmptyAnswer.to_string());
            return Err(ValidationError::EmptyAnswer);
        }
        let Some(question) = self.questions.get(self.index) else {
            return Ok(None);
        };

        let command = SessionCommand::SubmitAnswer {
            question_index: self.index,
            question_id: question.id.clone(),
            answer: self.draft.clone(),
            session_id: self.session_id.clone(),
        };
        self.notice = None;
        self.phase = SessionPhase::Submitting;
        Ok(Some(command))
    }

    /// Apply the backend's verdict on a submitted answer.
    ///
    /// Results for any question other than the one being submitted are
    /// ignored.
    pub fn on_submit_result<T>(
        &mut self,
        question_index: usize,
        result: ApiResult<T>,
        at: DateTime<Utc>,
    ) -> Option<SessionCommand> {
        if self.phase != SessionPhase::Submitting || question_index != self.index {
            return None;
        }

        match result {
            Ok(_) => {
                let question = self.questions.get(self.index)?;
                let answer = Answer::submitted(question, self.draft.clone(), at);
                self.answers.push(answer);
                self.advance()
            }
            Err(err) => {
                tracing::warn!(
                    "Submitting answer {} failed [{}]: {}",
                    question_index + 1,
                    err.error_code(),
                    err
                );
                self.phase = SessionPhase::Showing;
                self.notice = Some(SUBMIT_FAILED_MESSAGE.to_string());
                None
            }
        }
    }

    /// Record the sentinel answer for the current question and move on.
    /// No network call is made.
    pub fn skip(&mut self, at: DateTime<Utc>) -> Option<SessionCommand> {
        if self.phase != SessionPhase::Showing {
            return None;
        }
        let question = self.questions.get(self.index)?;
        self.answers.push(Answer::skipped(question, at));
        self.advance()
    }

    /// One second of the countdown for `question_index` has passed.
    ///
    /// Reaching zero skips the question. Ticks that do not belong to the
    /// question on screen are ignored.
    pub fn tick(&mut self, question_index: usize, at: DateTime<Utc>) -> Option<SessionCommand> {
        if self.countdown_target() != Some(question_index) {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            tracing::info!("Time ran out on question {}", question_index + 1);
            self.skip(at)
        } else {
            None
        }
    }

    fn advance(&mut self) -> Option<SessionCommand> {
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.draft.clear();
            self.time_left = self.time_limit;
            self.notice = None;
            self.phase = SessionPhase::Showing;
            None
        } else {
            Some(self.finish())
        }
    }

    fn finish(&mut self) -> SessionCommand {
        self.phase = SessionPhase::Finishing;
        self.notice = None;
        SessionCommand::EndSession {
            session_id: self.session_id.clone(),
        }
    }

    /// Apply the end-session outcome.
    ///
    /// Ending is best effort: a failure is logged and completion is reported
    /// all the same.
    pub fn on_session_ended<T>(&mut self, result: ApiResult<T>) -> Option<SessionOutcome> {
        if self.phase != SessionPhase::Finishing {
            return None;
        }
        if let Err(err) = result {
            tracing::warn!(
                "Ending session {} failed [{}]: {}",
                self.session_id,
                err.error_code(),
                err
            );
        }
        self.phase = SessionPhase::Done;
        tracing::info!(
            "Interview {} finished with {} answers",
            self.session_id,
            self.answers.len()
        );
        Some(SessionOutcome {
            parameters: self.parameters.clone(),
            session_id: self.session_id.clone(),
            answers: self.answers.clone(),
        })
    }
}

/// Countdown as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Difficulty, JobRole, Session, SKIPPED_ANSWER};
    use chrono::TimeZone;

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(secs as i64)
    }

    fn started(n: usize) -> StartedSession {
        StartedSession {
            parameters: SessionParameters::new("Ada", Some(JobRole::SoftwareEngineer), Difficulty::Medium)
                .unwrap(),
            session: Session {
                session_id: "sess-1".to_string(),
                questions: (0..n)
                    .map(|i| Question::new(format!("q{}", i + 1), format!("Question {}", i + 1)))
                    .collect(),
            },
        }
    }

    fn flow(n: usize) -> SessionFlow {
        let (flow, command) = SessionFlow::new(started(n), 300);
        assert!(command.is_none());
        flow
    }

    #[test]
    fn test_initial_state() {
        let flow = flow(3);
        assert_eq!(flow.phase(), SessionPhase::Showing);
        assert_eq!(flow.current_index(), 0);
        assert_eq!(flow.time_left(), 300);
        assert_eq!(flow.draft(), "");
        assert_eq!(flow.countdown_target(), Some(0));
        assert_eq!(flow.current_question().unwrap().id, "q1");
        assert!(!flow.is_last_question());
    }

    #[test]
    fn test_empty_draft_rejected_without_transition() {
        let mut flow = flow(2);
        flow.insert_str("   \n\t");
        assert_eq!(flow.submit(), Err(ValidationError::EmptyAnswer));
        assert_eq!(flow.phase(), SessionPhase::Showing);
        assert_eq!(flow.current_index(), 0);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.notice(), Some("Please provide an answer before proceeding."));
    }

    #[test]
    fn test_submit_success_appends_and_advances() {
        let mut flow = flow(2);
        flow.insert_str("I built a compiler");

        let command = flow.submit().unwrap().unwrap();
        assert_eq!(
            command,
            SessionCommand::SubmitAnswer {
                question_index: 0,
                question_id: "q1".to_string(),
                answer: "I built a compiler".to_string(),
                session_id: "sess-1".to_string(),
            }
        );
        assert_eq!(flow.phase(), SessionPhase::Submitting);
        assert_eq!(flow.countdown_target(), None);

        // Duplicate submit while in flight does nothing
        assert_eq!(flow.submit(), Ok(None));

        assert!(flow.on_submit_result(0, Ok(()), at(5)).is_none());
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.draft(), "");
        assert_eq!(flow.time_left(), 300);
        assert_eq!(flow.answers().len(), 1);
        assert_eq!(flow.answers()[0].answer, "I built a compiler");
        assert_eq!(flow.answers()[0].timestamp, at(5));
    }

    #[test]
    fn test_submit_failure_preserves_state() {
        let mut flow = flow(2);
        for _ in 0..10 {
            flow.tick(0, at(0));
        }
        flow.insert_str("draft answer");
        flow.submit().unwrap();

        let command = flow.on_submit_result::<()>(0, Err(ApiError::Http { status: 502 }), at(1));
        assert!(command.is_none());
        assert_eq!(flow.phase(), SessionPhase::Showing);
        assert_eq!(flow.current_index(), 0);
        assert_eq!(flow.draft(), "draft answer");
        assert!(flow.answers().is_empty());
        assert_eq!(flow.time_left(), 290);
        assert_eq!(flow.notice(), Some(SUBMIT_FAILED_MESSAGE));
    }

    #[test]
    fn test_skip_records_sentinel() {
        let mut flow = flow(2);
        flow.insert_str("half an answer");
        assert!(flow.skip(at(1)).is_none());
        assert_eq!(flow.answers()[0].answer, SKIPPED_ANSWER);
        assert_eq!(flow.answers()[0].question_id, "q1");
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.draft(), "");
    }

    #[test]
    fn test_timer_expiry_is_implicit_skip() {
        let mut flow = flow(2);
        for s in 0..299 {
            assert!(flow.tick(0, at(s)).is_none());
        }
        assert_eq!(flow.time_left(), 1);
        assert!(flow.tick(0, at(299)).is_none());

        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.time_left(), 300);
        assert_eq!(flow.answers()[0].answer, SKIPPED_ANSWER);
    }

    #[test]
    fn test_stale_ticks_ignored() {
        let mut flow = flow(2);
        flow.skip(at(0));
        assert!(flow.tick(0, at(1)).is_none());
        assert_eq!(flow.time_left(), 300);

        flow.insert_str("answer");
        flow.submit().unwrap();
        assert!(flow.tick(1, at(2)).is_none());
        assert_eq!(flow.time_left(), 300);
    }

    #[test]
    fn test_last_question_finishes() {
        let mut flow = flow(1);
        assert!(flow.is_last_question());
        let command = flow.skip(at(0)).unwrap();
        assert_eq!(
            command,
            SessionCommand::EndSession {
                session_id: "sess-1".to_string()
            }
        );
        assert_eq!(flow.phase(), SessionPhase::Finishing);
        assert!(flow.skip(at(1)).is_none());
        assert_eq!(flow.answers().len(), 1);
    }

    #[test]
    fn test_end_session_failure_still_completes() {
        let mut flow = flow(1);
        flow.skip(at(0));
        let outcome = flow
            .on_session_ended::<()>(Err(ApiError::Network("reset".to_string())))
            .unwrap();
        assert_eq!(flow.phase(), SessionPhase::Done);
        assert_eq!(outcome.session_id, "sess-1");
        assert_eq!(outcome.answers.len(), 1);
        assert!(flow.on_session_ended::<()>(Ok(())).is_none());
    }

    #[test]
    fn test_three_question_scenario() {
        let mut flow = flow(3);

        flow.insert_str("Answer one");
        flow.submit().unwrap();
        flow.on_submit_result(0, Ok(()), at(10));

        flow.insert_str("Answer two");
        flow.submit().unwrap();
        flow.on_submit_result(1, Ok(()), at(20));

        let command = flow.skip(at(30)).unwrap();
        assert!(matches!(command, SessionCommand::EndSession { .. }));

        let outcome = flow.on_session_ended(Ok(())).unwrap();
        let ids: Vec<&str> = outcome.answers.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
        assert_eq!(outcome.answers[2].answer, SKIPPED_ANSWER);
        assert_eq!(outcome.answers[0].answer, "Answer one");
    }

    #[test]
    fn test_empty_session_finishes_immediately() {
        let (flow, command) = SessionFlow::new(started(0), 300);
        assert_eq!(flow.phase(), SessionPhase::Finishing);
        assert!(matches!(command, Some(SessionCommand::EndSession { .. })));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(300), "5:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(9), "0:09");
    }

    #[test]
    fn test_progress() {
        let mut flow = flow(4);
        assert_eq!(flow.progress(), 0.25);
        flow.skip(at(0));
        assert_eq!(flow.progress(), 0.5);
    }
}
