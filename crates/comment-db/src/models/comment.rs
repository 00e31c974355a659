//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub user_id: i64,
    pub content_type: String,
    pub object_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
    pub posted_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}
