//! Saved answer records.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::MarkTier;

/// A persisted answer. Immutable after creation; the collection it lives in
/// is only ever cleared in bulk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnswer {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub marks: MarkTier,
    /// ISO 8601 creation timestamp.
    pub date: String,
    /// Label of the context used: a document name, or "General".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_source: Option<String>,
}

impl SavedAnswer {
    /// Create a record stamped with the current time.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        marks: MarkTier,
        context_source: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            question: question.into(),
            answer: answer.into(),
            marks,
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            context_source,
        }
    }
}
