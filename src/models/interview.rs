//! Interview session data: parameters, questions and answers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Answer text recorded when a question is skipped or times out.
pub const SKIPPED_ANSWER: &str = "[Skipped]";

/// Roles offered on the setup screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobRole {
    SoftwareEngineer,
    FrontendDeveloper,
    BackendDeveloper,
    FullStackDeveloper,
    DataScientist,
    ProductManager,
    DevOpsEngineer,
    UiUxDesigner,
}

impl JobRole {
    pub const ALL: [JobRole; 8] = [
        JobRole::SoftwareEngineer,
        JobRole::FrontendDeveloper,
        JobRole::BackendDeveloper,
        JobRole::FullStackDeveloper,
        JobRole::DataScientist,
        JobRole::ProductManager,
        JobRole::DevOpsEngineer,
        JobRole::UiUxDesigner,
    ];

    /// Name sent to the backend and shown in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::SoftwareEngineer => "Software Engineer",
            JobRole::FrontendDeveloper => "Frontend Developer",
            JobRole::BackendDeveloper => "Backend Developer",
            JobRole::FullStackDeveloper => "Full Stack Developer",
            JobRole::DataScientist => "Data Scientist",
            JobRole::ProductManager => "Product Manager",
            JobRole::DevOpsEngineer => "DevOps Engineer",
            JobRole::UiUxDesigner => "UI/UX Designer",
        }
    }

    /// Look a role up by its display name.
    pub fn from_name(name: &str) -> Option<JobRole> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question difficulty requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Next level, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Previous level, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

/// Validated inputs of one interview attempt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParameters {
    candidate_name: String,
    job_role: JobRole,
    difficulty: Difficulty,
}

impl SessionParameters {
    /// Validate raw form values.
    ///
    /// The name is trimmed and must not be empty; a role must be chosen.
    pub fn new(
        candidate_name: &str,
        job_role: Option<JobRole>,
        difficulty: Difficulty,
    ) -> Result<Self, ValidationError> {
        let name = candidate_name.trim();
        match job_role {
            Some(job_role) if !name.is_empty() => Ok(Self {
                candidate_name: name.to_string(),
                job_role,
                difficulty,
            }),
            _ => Err(ValidationError::MissingRequiredFields),
        }
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    pub fn job_role(&self) -> JobRole {
        self.job_role
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// One interview question as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub text: String,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Accept string or numeric identifiers and keep them as opaque strings.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// A backend session and its fixed, ordered question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub questions: Vec<Question>,
}

/// Everything the interview screen needs, handed over by the setup flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedSession {
    pub parameters: SessionParameters,
    pub session: Session,
}

/// The candidate's response to one question. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    /// Question text at the time it was answered
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

impl Answer {
    /// An answer the candidate typed and the backend accepted.
    pub fn submitted(question: &Question, text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            question_id: question.id.clone(),
            question: question.text.clone(),
            answer: text.into(),
            timestamp: at,
        }
    }

    /// The sentinel answer for a skipped or timed-out question.
    pub fn skipped(question: &Question, at: DateTime<Utc>) -> Self {
        Self::submitted(question, SKIPPED_ANSWER, at)
    }

    pub fn is_skipped(&self) -> bool {
        self.answer == SKIPPED_ANSWER
    }

    /// ISO-8601 timestamp with millisecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_job_roles_in_display_order() {
        let names: Vec<&str> = JobRole::ALL.iter().map(JobRole::as_str).collect();
        assert_eq!(names[0], "Software Engineer");
        assert_eq!(names[7], "UI/UX Designer");
        assert_eq!(JobRole::from_name("Data Scientist"), Some(JobRole::DataScientist));
        assert_eq!(JobRole::from_name("Astronaut"), None);
    }

    #[test]
    fn test_difficulty_cycles_and_serializes() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.prev(), Difficulty::Hard);
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }

    #[test]
    fn test_session_parameters_validation() {
        let params =
            SessionParameters::new("  Ada Lovelace ", Some(JobRole::BackendDeveloper), Difficulty::Hard)
                .unwrap();
        assert_eq!(params.candidate_name(), "Ada Lovelace");
        assert_eq!(params.job_role(), JobRole::BackendDeveloper);

        assert_eq!(
            SessionParameters::new("   ", Some(JobRole::DataScientist), Difficulty::Easy),
            Err(ValidationError::MissingRequiredFields)
        );
        assert_eq!(
            SessionParameters::new("Ada", None, Difficulty::Easy),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_question_accepts_numeric_ids() {
        let q: Question = serde_json::from_str(r#"{"id": 7, "text": "Why Rust?"}"#).unwrap();
        assert_eq!(q.id, "7");
        let q: Question = serde_json::from_str(r#"{"id": "q-7", "text": "Why Rust?"}"#).unwrap();
        assert_eq!(q.id, "q-7");
        assert!(serde_json::from_str::<Question>(r#"{"id": null, "text": "x"}"#).is_err());
    }

    #[test]
    fn test_answers() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let question = Question::new("q1", "Tell me about yourself");

        let skipped = Answer::skipped(&question, at);
        assert!(skipped.is_skipped());
        assert_eq!(skipped.answer, "[Skipped]");
        assert_eq!(skipped.question, "Tell me about yourself");
        assert_eq!(skipped.timestamp_iso(), "2026-03-01T09:30:00.000Z");

        let submitted = Answer::submitted(&question, "I write compilers", at);
        assert!(!submitted.is_skipped());

        let json = serde_json::to_value(&submitted).unwrap();
        assert_eq!(json["questionId"], "q1");
    }
}
