use super::types::Category;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A post as stored in the fixture dataset.
///
/// `date` holds the raw timestamp; it is only normalized when the
/// `timestamp` field is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    pub content: String,

    pub date: String,

    pub author: String,
}

impl PostRecord {
    /// A new post stamped with the current wall-clock time.
    pub fn new(id: String, title: String, content: String, author: String) -> Self {
        Self {
            id,
            title,
            category: None,
            summary: None,
            content,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            author,
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }
}
