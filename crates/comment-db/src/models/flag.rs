//! Flag database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the flags table
#[derive(Debug, Clone, FromRow)]
pub struct FlagModel {
    pub id: i64,
    pub comment_id: i64,
    pub count: i32,
}

/// Database model for the flag_instances table
#[derive(Debug, Clone, FromRow)]
pub struct FlagInstanceModel {
    pub id: i64,
    pub flag_id: i64,
    pub user_id: i64,
    pub reason: i16,
    pub info: Option<String>,
    pub flagged_at: DateTime<Utc>,
}
