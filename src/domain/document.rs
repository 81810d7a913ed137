//! Stored syllabus documents.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A stored document: uploaded syllabus material with its extracted text.
/// Created on upload-save, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: String,
    pub name: String,
    /// Extracted text content.
    pub content: String,
    pub upload_date: String,
    /// Human-readable size label, e.g. "12.4 KB".
    pub size: String,
}

impl StoredDocument {
    /// Create a document from extracted text, stamped with today's date.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            name: name.into(),
            size: size_label(content.len()),
            upload_date: Utc::now().format("%Y-%m-%d").to_string(),
            content,
        }
    }
}

fn size_label(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let value = bytes as f64;
    if value >= KB * KB {
        format!("{:.1} MB", value / (KB * KB))
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}
