//! Request and response bodies of the backend API.

use serde::{Deserialize, Serialize};

use crate::models::interview::opaque_id;
use crate::models::{Difficulty, Question};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartSessionRequest<'a> {
    pub job_role: &'a str,
    pub candidate_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StartSessionResponse {
    #[serde(deserialize_with = "opaque_id")]
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionsRequest<'a> {
    pub job_role: &'a str,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitAnswerRequest<'a> {
    pub question_id: &'a str,
    pub answer: &'a str,
    pub session_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndSessionRequest<'a> {
    pub session_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_field_names() {
        let body = serde_json::to_value(StartSessionRequest {
            job_role: "Data Scientist",
            candidate_name: "Grace",
        })
        .unwrap();
        assert_eq!(body, json!({"job_role": "Data Scientist", "candidate_name": "Grace"}));

        let body = serde_json::to_value(QuestionsRequest {
            job_role: "Data Scientist",
            difficulty: Difficulty::Easy,
        })
        .unwrap();
        assert_eq!(body, json!({"job_role": "Data Scientist", "difficulty": "easy"}));

        let body = serde_json::to_value(SubmitAnswerRequest {
            question_id: "q1",
            answer: "An answer",
            session_id: "s1",
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"question_id": "q1", "answer": "An answer", "session_id": "s1"})
        );
    }

    #[test]
    fn test_start_session_response_numeric_id() {
        let response: StartSessionResponse =
            serde_json::from_value(json!({"session_id": 42, "status": "started"})).unwrap();
        assert_eq!(response.session_id, "42");
    }
}
