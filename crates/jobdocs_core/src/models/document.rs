use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// The Record: one job-application artifact (resume, cover letter, ...)
// ---------------------------------------------------------------------------
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Document {
    pub id: i64,

    // Metadata
    pub title: String,

    // Wire name of the classification tag. Deliberately a plain String:
    // the category vocabulary is a presentation hint, storage accepts
    // whatever the caller persisted (see Category).
    pub category: String,

    // Body
    pub content: String,

    // Set once at creation, never touched again
    pub created_at: DateTime<Utc>,

    // Refreshed by the repository on every update
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Human label for this record's category, falling back to the raw
    /// stored value when it is outside the suggested vocabulary.
    pub fn category_label(&self) -> &str {
        match crate::Category::parse(&self.category) {
            Some(cat) => cat.label(),
            None => &self.category,
        }
    }
}
