//! AppMessage enum for async communication within the application.

use chrono::{DateTime, Utc};

use crate::error::ApiResult;
use crate::models::{Feedback, Session};

/// Messages received from background tasks.
///
/// Every message produced on behalf of a flow carries that flow's id; the
/// shell drops messages addressed to a flow that has been torn down.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Session created and questions fetched (or not)
    SetupFinished {
        flow_id: u64,
        result: ApiResult<Session>,
    },
    /// Backend verdict on a submitted answer
    AnswerSubmitted {
        flow_id: u64,
        question_index: usize,
        result: ApiResult<()>,
    },
    /// End-session call finished
    SessionEnded { flow_id: u64, result: ApiResult<()> },
    /// Feedback fetch finished
    FeedbackLoaded {
        flow_id: u64,
        result: ApiResult<Feedback>,
    },
    /// One second of the countdown for a question elapsed
    CountdownTick { flow_id: u64, question_index: usize },
    /// Health probe finished
    HealthChecked { connected: bool, at: DateTime<Utc> },
}

impl AppMessage {
    /// Id of the flow this message belongs to, if it belongs to one.
    pub fn flow_id(&self) -> Option<u64> {
        match self {
            AppMessage::SetupFinished { flow_id, .. }
            | AppMessage::AnswerSubmitted { flow_id, .. }
            | AppMessage::SessionEnded { flow_id, .. }
            | AppMessage::FeedbackLoaded { flow_id, .. }
            | AppMessage::CountdownTick { flow_id, .. } => Some(*flow_id),
            AppMessage::HealthChecked { .. } => None,
        }
    }
}
