//! Setup flow: collect candidate, role and difficulty, then open a session.
//!
//! `Idle -> Submitting -> {Succeeded, Idle with error}`. Validation happens
//! locally before any call. On failure the entered values stay in place.

use crate::api::ApiClient;
use crate::error::{ApiResult, ValidationError};
use crate::models::{Difficulty, JobRole, Session, SessionParameters, StartedSession};

/// Form field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    CandidateName,
    JobRole,
    Difficulty,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::CandidateName => SetupField::JobRole,
            SetupField::JobRole => SetupField::Difficulty,
            SetupField::Difficulty => SetupField::CandidateName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::CandidateName => SetupField::Difficulty,
            SetupField::JobRole => SetupField::CandidateName,
            SetupField::Difficulty => SetupField::JobRole,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Side effect requested by the setup flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupCommand {
    /// Create the session and fetch its questions
    Start(SessionParameters),
}

#[derive(Debug, Clone, Default)]
pub struct SetupFlow {
    candidate_name: String,
    job_role: Option<JobRole>,
    difficulty: Difficulty,
    focus: SetupField,
    status: SetupStatus,
    error: Option<String>,
    pending: Option<SessionParameters>,
}

impl SetupFlow {
    /// Empty form, medium difficulty, name field focused.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    pub fn job_role(&self) -> Option<JobRole> {
        self.job_role
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn focus(&self) -> SetupField {
        self.focus
    }

    pub fn status(&self) -> SetupStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A start request is in flight; the submit control is disabled.
    pub fn is_busy(&self) -> bool {
        self.status == SetupStatus::Submitting
    }

    fn editable(&self) -> bool {
        self.status == SetupStatus::Idle
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, field: SetupField) {
        self.focus = field;
    }

    /// Type into the name field (ignored elsewhere and while busy).
    pub fn insert_str(&mut self, text: &str) {
        if self.editable() && self.focus == SetupField::CandidateName {
            self.candidate_name
                .extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    pub fn backspace(&mut self) {
        if self.editable() && self.focus == SetupField::CandidateName {
            self.candidate_name.pop();
        }
    }

    pub fn set_candidate_name(&mut self, name: impl Into<String>) {
        if self.editable() {
            self.candidate_name = name.into();
        }
    }

    pub fn set_job_role(&mut self, role: Option<JobRole>) {
        if self.editable() {
            self.job_role = role;
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.editable() {
            self.difficulty = difficulty;
        }
    }

    /// Move the focused selector forward (role list or difficulty).
    pub fn cycle_next(&mut self) {
        match self.focus {
            SetupField::JobRole => self.set_job_role(Some(step_role(self.job_role, true))),
            SetupField::Difficulty => self.set_difficulty(self.difficulty.next()),
            SetupField::CandidateName => {}
        }
    }

    /// Move the focused selector backward (role list or difficulty).
    pub fn cycle_prev(&mut self) {
        match self.focus {
            SetupField::JobRole => self.set_job_role(Some(step_role(self.job_role, false))),
            SetupField::Difficulty => self.set_difficulty(self.difficulty.prev()),
            SetupField::CandidateName => {}
        }
    }

    /// Validate the form and request a session start.
    ///
    /// Returns `Ok(None)` while a start is already in flight.
    pub fn submit(&mut self) -> Result<Option<SetupCommand>, ValidationError> {
        if !self.editable() {
            return Ok(None);
        }

        match SessionParameters::new(&self.candidate_name, self.job_role, self.difficulty) {
            Ok(params) => {
                self.error = None;
                self.status = SetupStatus::Submitting;
                self.pending = Some(params.clone());
                Ok(Some(SetupCommand::Start(params)))
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Apply the outcome of a [`SetupCommand::Start`].
    ///
    /// Returns the session to hand to the interview flow on success.
    pub fn on_started(&mut self, result: ApiResult<Session>) -> Option<StartedSession> {
        if self.status != SetupStatus::Submitting {
            return None;
        }
        let parameters = self.pending.take()?;

        match result {
            Ok(session) if session.questions.is_empty() => {
                self.fail("no questions were returned");
                None
            }
            Ok(session) => {
                tracing::info!(
                    "Interview session {} started with {} questions",
                    session.session_id,
                    session.questions.len()
                );
                self.status = SetupStatus::Succeeded;
                Some(StartedSession {
                    parameters,
                    session,
                })
            }
            Err(err) => {
                tracing::warn!("Failed to start interview [{}]: {}", err.error_code(), err);
                self.fail(&err.to_string());
                None
            }
        }
    }

    fn fail(&mut self, reason: &str) {
        self.status = SetupStatus::Idle;
        self.error = Some(format!("Failed to start interview: {}", reason));
    }
}

fn step_role(current: Option<JobRole>, forward: bool) -> JobRole {
    let roles = JobRole::ALL;
    let len = roles.len();
    let idx = match (current.and_then(|r| roles.iter().position(|x| *x == r)), forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };
    roles[idx]
}

/// Create the session, then fetch its questions. Both calls must succeed.
pub async fn start_interview(api: &ApiClient, params: &SessionParameters) -> ApiResult<Session> {
    let session_id = api
        .start_session(params.job_role(), params.candidate_name())
        .await?;
    let questions = api
        .get_questions(params.job_role(), params.difficulty())
        .await?;
    Ok(Session {
        session_id,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::Question;

    fn filled_form() -> SetupFlow {
        let mut flow = SetupFlow::new();
        flow.insert_str("Ada Lovelace");
        flow.set_job_role(Some(JobRole::BackendDeveloper));
        flow
    }

    fn session(questions: usize) -> Session {
        Session {
            session_id: "sess-1".to_string(),
            questions: (0..questions)
                .map(|i| Question::new(format!("q{i}"), format!("Question {i}")))
                .collect(),
        }
    }

    #[test]
    fn test_defaults() {
        let flow = SetupFlow::new();
        assert_eq!(flow.candidate_name(), "");
        assert_eq!(flow.job_role(), None);
        assert_eq!(flow.difficulty(), Difficulty::Medium);
        assert_eq!(flow.focus(), SetupField::CandidateName);
        assert_eq!(flow.status(), SetupStatus::Idle);
    }

    #[test]
    fn test_missing_fields_fail_fast() {
        let mut flow = SetupFlow::new();
        flow.insert_str("   ");
        flow.set_job_role(Some(JobRole::DataScientist));

        assert_eq!(flow.submit(), Err(ValidationError::MissingRequiredFields));
        assert_eq!(flow.error(), Some("Please fill in all required fields"));
        assert_eq!(flow.status(), SetupStatus::Idle);

        let mut flow = SetupFlow::new();
        flow.insert_str("Ada");
        assert!(flow.submit().is_err());
    }

    #[test]
    fn test_submit_then_success() {
        let mut flow = filled_form();
        let command = flow.submit().unwrap().unwrap();
        let SetupCommand::Start(params) = command;
        assert_eq!(params.candidate_name(), "Ada Lovelace");
        assert_eq!(params.difficulty(), Difficulty::Medium);
        assert!(flow.is_busy());

        // Double submit while in flight is ignored
        assert_eq!(flow.submit(), Ok(None));

        let started = flow.on_started(Ok(session(3))).unwrap();
        assert_eq!(started.session.questions.len(), 3);
        assert_eq!(started.parameters.job_role(), JobRole::BackendDeveloper);
        assert_eq!(flow.status(), SetupStatus::Succeeded);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut flow = filled_form();
        flow.set_difficulty(Difficulty::Hard);
        flow.submit().unwrap();

        let started = flow.on_started(Err(ApiError::Http { status: 500 }));
        assert!(started.is_none());
        assert_eq!(flow.status(), SetupStatus::Idle);
        assert_eq!(
            flow.error(),
            Some("Failed to start interview: HTTP error! status: 500")
        );
        assert_eq!(flow.candidate_name(), "Ada Lovelace");
        assert_eq!(flow.job_role(), Some(JobRole::BackendDeveloper));
        assert_eq!(flow.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_empty_question_list_is_failure() {
        let mut flow = filled_form();
        flow.submit().unwrap();
        assert!(flow.on_started(Ok(session(0))).is_none());
        assert_eq!(
            flow.error(),
            Some("Failed to start interview: no questions were returned")
        );
    }

    #[test]
    fn test_editing_locked_while_busy() {
        let mut flow = filled_form();
        flow.submit().unwrap();
        flow.insert_str("x");
        flow.backspace();
        flow.set_focus(SetupField::Difficulty);
        flow.cycle_next();
        assert_eq!(flow.candidate_name(), "Ada Lovelace");
        assert_eq!(flow.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_selectors_cycle() {
        let mut flow = SetupFlow::new();
        flow.focus_next();
        assert_eq!(flow.focus(), SetupField::JobRole);
        flow.cycle_next();
        assert_eq!(flow.job_role(), Some(JobRole::SoftwareEngineer));
        flow.cycle_prev();
        assert_eq!(flow.job_role(), Some(JobRole::UiUxDesigner));

        flow.focus_next();
        flow.cycle_prev();
        assert_eq!(flow.difficulty(), Difficulty::Easy);

        flow.focus_next();
        assert_eq!(flow.focus(), SetupField::CandidateName);
        flow.focus_prev();
        assert_eq!(flow.focus(), SetupField::Difficulty);
    }

    #[test]
    fn test_name_editing() {
        let mut flow = SetupFlow::new();
        flow.insert_char('A');
        flow.insert_str("da\n");
        assert_eq!(flow.candidate_name(), "Ada");
        flow.backspace();
        assert_eq!(flow.candidate_name(), "Ad");

        flow.set_focus(SetupField::JobRole);
        flow.insert_char('x');
        assert_eq!(flow.candidate_name(), "Ad");
    }
}
