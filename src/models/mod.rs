//! Data model shared by the flows, the API client and the UI.

pub mod feedback;
pub mod interview;

pub use feedback::{Feedback, QuestionFeedback, ScoreBand};
pub use interview::{
    Answer, Difficulty, JobRole, Question, Session, SessionParameters, StartedSession,
    SKIPPED_ANSWER,
};
