//! Backend-computed interview feedback.
//!
//! Every field is optional on the wire, and a field of the wrong shape
//! decodes as missing instead of rejecting the document. Accessors apply
//! the display fallbacks so rendering never has to deal with missing data.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const FALLBACK_OVERALL_FEEDBACK: &str = "Great job completing the interview!";
pub const FALLBACK_STRENGTH: &str = "Completed all questions";
pub const FALLBACK_IMPROVEMENT: &str = "Continue practicing interview skills";
pub const FALLBACK_QUESTION_FEEDBACK: &str = "No feedback provided.";

/// Feedback document returned by `GET /api/feedback/{session_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default, deserialize_with = "lenient_score")]
    pub overall_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub overall_feedback: Option<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub question_feedback: Option<Vec<QuestionFeedback>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub improvements: Option<Vec<String>>,
}

/// Per-question part of [`Feedback`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionFeedback {
    #[serde(default, deserialize_with = "lenient_text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub feedback: Option<String>,
}

/// A JSON number, or a string holding one.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Strings pass through, numbers and booleans are stringified.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// An array of strings. Non-string entries are dropped; a non-array is missing.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// An array of objects. Entries that are not objects are dropped.
fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<QuestionFeedback>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Round and clamp a raw score into 0..=100. Missing scores read as 0.
pub fn clamp_score(raw: Option<f64>) -> u8 {
    match raw {
        Some(score) if score.is_finite() => score.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

/// Colour band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above
    Strong,
    /// 60 to 79
    Fair,
    /// below 60
    Weak,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Strong
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

impl Feedback {
    pub fn overall_score(&self) -> u8 {
        clamp_score(self.overall_score)
    }

    pub fn overall_feedback(&self) -> &str {
        non_empty(self.overall_feedback.as_deref()).unwrap_or(FALLBACK_OVERALL_FEEDBACK)
    }

    /// Strengths, or the single fallback bullet when the backend sent none.
    pub fn strengths(&self) -> Vec<String> {
        list_or(self.strengths.as_deref(), FALLBACK_STRENGTH)
    }

    /// Improvements, or the single fallback bullet when the backend sent none.
    pub fn improvements(&self) -> Vec<String> {
        list_or(self.improvements.as_deref(), FALLBACK_IMPROVEMENT)
    }
}

impl QuestionFeedback {
    pub fn score(&self) -> u8 {
        clamp_score(self.score)
    }

    pub fn feedback(&self) -> &str {
        non_empty(self.feedback.as_deref()).unwrap_or(FALLBACK_QUESTION_FEEDBACK)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn list_or(items: Option<&[String]>, fallback: &str) -> Vec<String> {
    match items {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => vec![fallback.to_string()],
    }
}
