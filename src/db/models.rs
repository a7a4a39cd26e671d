use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// A snippet is live while `at` is strictly before its expiry.
    pub fn is_live_at(&self, at: DateTime<Utc>) -> bool {
        at < self.expires
    }
}

/// Payload for inserting a snippet; timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSnippet {
    pub title: String,
    pub content: String,
    pub expires_in_days: u32,
}
