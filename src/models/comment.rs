use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reply to a single post. Comment IDs are sequential within their
/// parent post, not globally unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
